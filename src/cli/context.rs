use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{FixedOffset, Offset};

use crate::config::Config;
use crate::output::OutputMode;

pub struct RunContext {
    pub output_mode: OutputMode,
    pub tz: FixedOffset,
    pub config_path: PathBuf,
    pub config: Config,
}

impl RunContext {
    /// Create context from CLI arguments
    pub fn from_args(json: bool, no_color: bool, utc: bool, config: Option<&Path>) -> Result<Self> {
        if no_color {
            colored::control::set_override(false);
        }

        let output_mode = OutputMode::from_flag(json);
        let tz = if utc {
            chrono::Utc.fix()
        } else {
            *chrono::Local::now().offset()
        };

        let config_path = crate::platform::config_path(config)?;
        let config = Config::load(&config_path)?;

        Ok(RunContext {
            output_mode,
            tz,
            config_path,
            config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Preset;
    use tempfile::TempDir;

    fn missing_config(dir: &TempDir) -> PathBuf {
        dir.path().join("config.toml")
    }

    #[test]
    fn utc_flag_gives_zero_offset() {
        let dir = TempDir::new().unwrap();
        let ctx = RunContext::from_args(false, false, true, Some(missing_config(&dir).as_path())).unwrap();
        assert_eq!(ctx.tz, FixedOffset::east_opt(0).unwrap());
    }

    #[test]
    fn default_gives_local_offset() {
        let dir = TempDir::new().unwrap();
        let ctx = RunContext::from_args(false, false, false, Some(missing_config(&dir).as_path())).unwrap();
        let local_offset = *chrono::Local::now().offset();
        assert_eq!(ctx.tz, local_offset);
    }

    #[test]
    fn loads_config_from_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = missing_config(&dir);
        std::fs::write(&path, "default_preset = \"permissive\"\n").unwrap();

        let ctx = RunContext::from_args(true, false, false, Some(path.as_path())).unwrap();
        assert_eq!(ctx.config.default_preset, Preset::Permissive);
        assert_eq!(ctx.output_mode, OutputMode::Json);
        assert_eq!(ctx.config_path, path);
    }

    #[test]
    fn bad_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = missing_config(&dir);
        std::fs::write(&path, "nonsense = 1\n").unwrap();

        assert!(RunContext::from_args(false, false, false, Some(path.as_path())).is_err());
    }
}
