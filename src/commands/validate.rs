use std::path::Path;

use anyhow::{bail, Result};
use log::debug;
use serde::Serialize;

use crate::cli::args::RecordKind;
use crate::cli::context::RunContext;
use crate::cli::input::read_input;
use crate::models::{
    Meeting, MeetingSettings, MeetingSummary, MeetingSummaryPage, Participant, ParticipantPage,
    Registrant, RegistrantConfirmation, RegistrantPage, RegistrantSummary, User, UserPage,
};
use crate::output::OutputMode;
use crate::schema::Record;

pub fn run(kind: RecordKind, input: Option<&Path>, ctx: &RunContext) -> Result<()> {
    let text = read_input(input)?;

    match kind {
        RecordKind::Settings => report::<MeetingSettings>(&text, ctx),
        RecordKind::MeetingSummary => report::<MeetingSummary>(&text, ctx),
        RecordKind::Meeting => report::<Meeting>(&text, ctx),
        RecordKind::Meetings => report::<MeetingSummaryPage>(&text, ctx),
        RecordKind::RegistrantSummary => report::<RegistrantSummary>(&text, ctx),
        RecordKind::Registrant => report::<Registrant>(&text, ctx),
        RecordKind::Registrants => report::<RegistrantPage>(&text, ctx),
        RecordKind::Confirmation => report::<RegistrantConfirmation>(&text, ctx),
        RecordKind::Participant => report::<Participant>(&text, ctx),
        RecordKind::Participants => report::<ParticipantPage>(&text, ctx),
        RecordKind::User => report::<User>(&text, ctx),
        RecordKind::Users => report::<UserPage>(&text, ctx),
    }
}

/// Build `R` from `text` and print it, or print its issues and fail.
fn report<R: Record + Serialize>(text: &str, ctx: &RunContext) -> Result<()> {
    let name = R::schema().name;

    match R::from_json(text) {
        Ok(record) => {
            match ctx.output_mode {
                OutputMode::Json => println!("{}", crate::output::json::to_json(&record)),
                OutputMode::Tty => {
                    let value = serde_json::to_value(&record)?;
                    println!("{}", crate::output::table::format_valid_header(name));
                    println!("{}", crate::output::table::format_record_fields(&value));
                }
            }
            Ok(())
        }
        Err(err) => {
            debug!("{} rejected at: {}", name, err.paths().join(", "));
            match ctx.output_mode {
                OutputMode::Json => {
                    println!("{}", crate::output::json::format_validation_error(name, &err))
                }
                OutputMode::Tty => {
                    eprintln!("{}", crate::output::table::format_validation_error(name, &err))
                }
            }
            bail!("{} failed validation", name)
        }
    }
}
