use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;

/// Env var that points at a config file, overriding the platform default.
pub const CONFIG_ENV: &str = "ZOOMSCHEMA_CONFIG";

/// Platform config directory for zoomschema
/// (`~/.config/zoomschema` on Linux, `~/Library/Application Support/zoomschema` on macOS).
pub fn config_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("", "", "zoomschema")
        .context("Cannot determine config directory (no home directory)")?;
    Ok(dirs.config_dir().to_path_buf())
}

/// Resolve the config file: explicit flag, then `ZOOMSCHEMA_CONFIG`, then the platform default.
pub fn config_path(explicit: Option<&std::path::Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Ok(path) = env::var(CONFIG_ENV) {
        if !path.is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    Ok(config_dir()?.join("config.toml"))
}
