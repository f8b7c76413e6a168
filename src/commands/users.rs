use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::context::RunContext;
use crate::cli::input::read_input;
use crate::models::UserPage;
use crate::output::OutputMode;
use crate::schema::Record;

pub fn list(input: Option<&Path>, ctx: &RunContext) -> Result<()> {
    let text = read_input(input)?;
    let page = UserPage::from_json(&text).context("Input is not a valid user page")?;

    match ctx.output_mode {
        OutputMode::Json => println!("{}", crate::output::json::to_json(&page.users)),
        OutputMode::Tty => {
            if page.users.is_empty() {
                println!("No users found.");
                return Ok(());
            }
            for u in &page.users {
                println!("{}", crate::output::table::format_user_row(u));
            }
        }
    }
    Ok(())
}
