use std::path::Path;

use anyhow::{bail, Context, Result};
use log::debug;

use crate::cli::context::RunContext;
use crate::cli::input::read_input;
use crate::models::{Participant, ParticipantPage};
use crate::output::OutputMode;
use crate::query::ParticipantLookup;
use crate::schema::Record;

fn load_page(input: Option<&Path>) -> Result<ParticipantPage> {
    let text = read_input(input)?;
    ParticipantPage::from_json(&text).context("Input is not a valid participant page")
}

pub fn list(input: Option<&Path>, ctx: &RunContext) -> Result<()> {
    let page = load_page(input)?;
    let refs: Vec<_> = page.participants().iter().collect();
    print_participants(&refs, ctx);
    Ok(())
}

pub fn find(
    input: Option<&Path>,
    id: Option<&str>,
    email: Option<&str>,
    name: Option<&str>,
    ctx: &RunContext,
) -> Result<()> {
    let page = load_page(input)?;
    let Some(lookup) = ParticipantLookup::from_flags(id, email, name) else {
        bail!("Specify --id, --email, or --name");
    };

    let hits = lookup.apply(&page);
    debug!("{} of {} participants match {}", hits.len(), page.len(), lookup.describe());
    print_participants(&hits, ctx);
    Ok(())
}

fn print_participants(participants: &[&Participant], ctx: &RunContext) {
    match ctx.output_mode {
        OutputMode::Json => {
            println!("{}", crate::output::json::format_participants(participants));
        }
        OutputMode::Tty => {
            if participants.is_empty() {
                println!("No participants found.");
                return;
            }
            for p in participants {
                println!("{}", crate::output::table::format_participant_row(p));
            }
        }
    }
}
