use std::path::Path;

use anyhow::{Context, Result};
use log::debug;

use crate::cli::context::RunContext;
use crate::cli::input::read_input;
use crate::models::{MeetingSummary, MeetingSummaryPage};
use crate::output::OutputMode;
use crate::query::MeetingFilter;
use crate::schema::Record;

fn load_page(input: Option<&Path>) -> Result<MeetingSummaryPage> {
    let text = read_input(input)?;
    MeetingSummaryPage::from_json(&text).context("Input is not a valid meeting list page")
}

pub fn list(input: Option<&Path>, ctx: &RunContext) -> Result<()> {
    let page = load_page(input)?;
    let refs: Vec<_> = page.meetings.iter().collect();
    print_meetings(&refs, ctx);

    if page.has_next_page() && !ctx.output_mode.is_json() {
        eprintln!(
            "{} of {} meetings on this page; more available (next_page_token present).",
            page.meetings.len(),
            page.total_records
        );
    }
    Ok(())
}

pub fn filter(input: Option<&Path>, topic: Option<&str>, id: Option<i64>, ctx: &RunContext) -> Result<()> {
    let page = load_page(input)?;
    let Some(filter) = MeetingFilter::from_flags(topic, id) else {
        anyhow::bail!("Specify --topic or --id");
    };

    let hits = filter.apply(&page);
    debug!("{} of {} meetings match {}", hits.len(), page.meetings.len(), filter.describe());
    print_meetings(&hits, ctx);
    Ok(())
}

fn print_meetings(meetings: &[&MeetingSummary], ctx: &RunContext) {
    match ctx.output_mode {
        OutputMode::Json => {
            println!("{}", crate::output::json::format_meetings(meetings));
        }
        OutputMode::Tty => {
            if meetings.is_empty() {
                println!("No meetings found.");
                return;
            }
            for m in meetings {
                println!("{}", crate::output::table::format_meeting_row(m, &ctx.tz));
            }
        }
    }
}
