//! Domain records for the meeting service's REST resources.
//!
//! Every record implements [`crate::schema::Record`]: build one with
//! `from_value`/`from_json` and it is fully validated or not built at all.
//! Full records embed their short form (`Meeting` holds a `MeetingSummary`,
//! `Registrant` holds a `RegistrantSummary`) and serialize back to the flat
//! wire shape.

pub mod meeting;
pub mod participant;
pub mod registrant;
pub mod settings;
pub mod user;

pub use meeting::{Meeting, MeetingSummary, MeetingSummaryPage};
pub use participant::{Participant, ParticipantPage};
pub use registrant::{Registrant, RegistrantConfirmation, RegistrantPage, RegistrantSummary};
pub use settings::{MeetingSettings, Preset};
pub use user::{User, UserPage};
