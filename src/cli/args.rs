use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};

use crate::models::Preset;

fn parse_preset(s: &str) -> Result<Preset, String> {
    Preset::parse(s).ok_or_else(|| format!("invalid preset '{}': expected 'conservative' or 'permissive'", s))
}

#[derive(Parser, Debug)]
#[command(
    name = "zoomschema",
    version = env!("ZOOMSCHEMA_VERSION"),
    about = "Validate and query meeting-service API records"
)]
pub struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output (uses human-readable format without ANSI codes)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Display timestamps in UTC instead of local time
    #[arg(long, global = true)]
    pub utc: bool,

    /// Use a specific config file instead of the default
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output (logs each validated record and its issues)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Record types accepted by `validate`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum RecordKind {
    Settings,
    MeetingSummary,
    Meeting,
    Meetings,
    RegistrantSummary,
    Registrant,
    Registrants,
    Confirmation,
    Participant,
    Participants,
    User,
    Users,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a raw JSON record and print the typed result
    #[command(visible_alias = "v")]
    Validate {
        /// Record type
        #[arg(value_enum)]
        kind: RecordKind,

        /// JSON file to read ("-" or omitted reads stdin)
        input: Option<PathBuf>,
    },

    /// Query a page of meetings
    Meetings {
        #[command(subcommand)]
        action: MeetingsAction,
    },

    /// Query a page of participants
    Participants {
        #[command(subcommand)]
        action: ParticipantsAction,
    },

    /// Query a page of meeting registrants
    Registrants {
        #[command(subcommand)]
        action: RegistrantsAction,
    },

    /// Query a page of user accounts
    Users {
        #[command(subcommand)]
        action: UsersAction,
    },

    /// Meeting settings presets
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum MeetingsAction {
    /// List every meeting on the page
    List {
        /// JSON file with a meeting list page ("-" or omitted reads stdin)
        input: Option<PathBuf>,
    },

    /// Keep meetings matching a topic fragment or an exact id
    #[command(group(ArgGroup::new("selector").required(true).args(["topic", "id"])))]
    Filter {
        /// JSON file with a meeting list page ("-" or omitted reads stdin)
        input: Option<PathBuf>,

        /// Case-insensitive topic substring
        #[arg(long)]
        topic: Option<String>,

        /// Exact meeting id
        #[arg(long)]
        id: Option<i64>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ParticipantsAction {
    /// List every participant on the page
    #[command(visible_alias = "ls")]
    List {
        /// JSON file with a participant page ("-" or omitted reads stdin)
        input: Option<PathBuf>,
    },

    /// Find participants by exact id, email, or name
    #[command(group(ArgGroup::new("lookup").required(true).args(["id", "email", "name"])))]
    Find {
        /// JSON file with a participant page ("-" or omitted reads stdin)
        input: Option<PathBuf>,

        #[arg(long)]
        id: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        name: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum RegistrantsAction {
    /// List every registrant on the page
    #[command(visible_alias = "ls")]
    List {
        /// JSON file with a registrant page ("-" or omitted reads stdin)
        input: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum UsersAction {
    /// List every user on the page
    #[command(visible_alias = "ls")]
    List {
        /// JSON file with a user page ("-" or omitted reads stdin)
        input: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Print a settings preset [conservative, permissive]; defaults to the configured preset
    Preset {
        #[arg(value_parser = parse_preset)]
        name: Option<Preset>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the config file path
    Path,
    /// Print the effective configuration
    Show,
}
