use anyhow::Result;
use colored::Colorize;

use crate::cli::context::RunContext;
use crate::models::{MeetingSettings, Preset};
use crate::output::OutputMode;

pub fn preset(name: Option<Preset>, ctx: &RunContext) -> Result<()> {
    let preset = name.unwrap_or(ctx.config.default_preset);
    let settings = MeetingSettings::preset(preset);

    match ctx.output_mode {
        OutputMode::Json => {
            println!("{}", crate::output::json::to_json(&settings));
        }
        OutputMode::Tty => {
            println!("{} {}", "Preset:".dimmed(), preset.name().bold());
            let value = serde_json::to_value(&settings)?;
            println!("{}", crate::output::table::format_record_fields(&value));
        }
    }

    Ok(())
}
