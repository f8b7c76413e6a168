use anyhow::Result;

use crate::cli::args::ConfigAction;
use crate::cli::context::RunContext;
use crate::output::OutputMode;

pub fn run(action: &ConfigAction, ctx: &RunContext) -> Result<()> {
    match action {
        ConfigAction::Path => {
            println!("{}", ctx.config_path.display());
        }
        ConfigAction::Show => match ctx.output_mode {
            OutputMode::Json => println!("{}", crate::output::json::to_json(&ctx.config)),
            OutputMode::Tty => print!("{}", ctx.config.to_toml()?),
        },
    }
    Ok(())
}
