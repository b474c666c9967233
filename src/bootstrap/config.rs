//! # Configuration Loader
//!
//! Reads the TOML file and hands the parsed document to
//! [`AppConfig::from_toml`]. No validation and no default-value rules live
//! here: whatever is in the file is accepted as a fact.

use anyhow::Context;
use std::path::{Path, PathBuf};

use dt_core::config::AppConfig;

pub const CONFIG_DIR_NAME: &str = "dieta";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// `<config_dir>/dieta/config.toml`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load the explicit path if given, otherwise the default location.
///
/// An explicit path must exist. A missing default file yields
/// [`AppConfig::empty`].
pub fn load_or_default(explicit: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config(&path);
    }

    match default_config_path() {
        Some(path) if path.exists() => load_config(&path),
        _ => Ok(AppConfig::empty()),
    }
}
