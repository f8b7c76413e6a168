use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::context::RunContext;
use crate::cli::input::read_input;
use crate::models::RegistrantPage;
use crate::output::OutputMode;
use crate::schema::Record;

pub fn list(input: Option<&Path>, ctx: &RunContext) -> Result<()> {
    let text = read_input(input)?;
    let page = RegistrantPage::from_json(&text).context("Input is not a valid registrant page")?;

    match ctx.output_mode {
        OutputMode::Json => println!("{}", crate::output::json::to_json(&page.registrants)),
        OutputMode::Tty => {
            if page.registrants.is_empty() {
                println!("No registrants found.");
                return Ok(());
            }
            for r in &page.registrants {
                println!("{}", crate::output::table::format_registrant_row(r));
            }
        }
    }
    Ok(())
}
