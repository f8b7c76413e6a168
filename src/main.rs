mod cli;
mod commands;
mod config;
mod models;
mod output;
mod platform;
mod query;
mod schema;

use anyhow::Result;
use clap::Parser;

use cli::args::{
    Cli, Commands, MeetingsAction, ParticipantsAction, RegistrantsAction, SettingsAction, UsersAction,
};
use cli::context::RunContext;

fn main() -> Result<()> {
    setup_broken_pipe_handling();
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = RunContext::from_args(cli.json, cli.no_color, cli.utc, cli.config.as_deref())?;

    match &cli.command {
        Commands::Validate { kind, input } => {
            commands::validate::run(*kind, input.as_deref(), &ctx)?;
        }

        Commands::Meetings { action } => match action {
            MeetingsAction::List { input } => {
                commands::meetings::list(input.as_deref(), &ctx)?;
            }
            MeetingsAction::Filter { input, topic, id } => {
                commands::meetings::filter(input.as_deref(), topic.as_deref(), *id, &ctx)?;
            }
        },

        Commands::Participants { action } => match action {
            ParticipantsAction::List { input } => {
                commands::participants::list(input.as_deref(), &ctx)?;
            }
            ParticipantsAction::Find {
                input,
                id,
                email,
                name,
            } => {
                commands::participants::find(
                    input.as_deref(),
                    id.as_deref(),
                    email.as_deref(),
                    name.as_deref(),
                    &ctx,
                )?;
            }
        },

        Commands::Registrants {
            action: RegistrantsAction::List { input },
        } => {
            commands::registrants::list(input.as_deref(), &ctx)?;
        }

        Commands::Users {
            action: UsersAction::List { input },
        } => {
            commands::users::list(input.as_deref(), &ctx)?;
        }

        Commands::Settings {
            action: SettingsAction::Preset { name },
        } => {
            commands::settings::preset(*name, &ctx)?;
        }

        Commands::Config { action } => {
            commands::config::run(action, &ctx)?;
        }
    }

    Ok(())
}

/// Initialize logging based on the `--verbose` flag or `ZOOMSCHEMA_LOG` env var.
///
/// - `ZOOMSCHEMA_LOG` env var: full filter control (e.g. `ZOOMSCHEMA_LOG=zoomschema::schema=trace`)
/// - `--verbose`: sets `zoomschema` crate to `Debug` level
/// - Otherwise: `Warn` level only (effectively silent)
fn init_logging(verbose: bool) {
    let env_var = std::env::var("ZOOMSCHEMA_LOG").ok();

    let mut builder = env_logger::Builder::new();
    builder.format_target(true);
    builder.format_module_path(false);

    if let Some(ref filter) = env_var {
        builder.parse_filters(filter);
    } else if verbose {
        builder.filter_module("zoomschema", log::LevelFilter::Debug);
    } else {
        builder.filter_level(log::LevelFilter::Warn);
    }

    builder.init();
}

/// Exit quietly when stdout is closed early (`zoomschema validate users u.json --json | head -1`).
///
/// Unix gets SIGPIPE back at its default disposition; everywhere else a panic
/// hook swallows the "failed printing to stdout" panic.
fn setup_broken_pipe_handling() {
    #[cfg(unix)]
    unsafe {
        // SIGPIPE = 13, SIG_DFL = 0
        unsafe extern "C" {
            fn signal(sig: i32, handler: usize) -> usize;
        }
        signal(13, 0);
    }

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let msg = info
            .payload()
            .downcast_ref::<String>()
            .map(|s| s.as_str())
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("");

        if msg.contains("failed printing to stdout") {
            std::process::exit(0);
        }

        default_hook(info);
    }));
}
