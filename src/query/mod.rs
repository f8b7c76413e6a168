pub mod filter;

pub use filter::{MeetingFilter, ParticipantLookup};
