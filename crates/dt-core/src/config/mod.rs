//! # Configuration DTO
//!
//! Maps a parsed TOML document onto [`AppConfig`]. Data only: missing keys
//! become empty or `false` values, and nothing here decides what those
//! values mean.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Trim whitespace before the non-empty check
    pub trim_whitespace: bool,

    /// Reject selections outside the option sets
    pub enforce_option_sets: bool,

    /// Tracing filter directives (may be empty)
    pub log_filter: String,

    /// Directory for the log file (empty disables file logging)
    pub log_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// Must NOT contain validation or default-value logic. Empty strings are
    /// valid facts.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            trim_whitespace: toml_value
                .get("validation")
                .and_then(|v| v.get("trim_whitespace"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
            enforce_option_sets: toml_value
                .get("validation")
                .and_then(|v| v.get("enforce_option_sets"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
            log_filter: toml_value
                .get("logging")
                .and_then(|l| l.get("filter"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            log_dir: PathBuf::from(
                toml_value
                    .get("logging")
                    .and_then(|l| l.get("log_dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            trim_whitespace: false,
            enforce_option_sets: false,
            log_filter: String::new(),
            log_dir: PathBuf::new(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_reads_all_sections() {
        let toml_str = r#"
            [validation]
            trim_whitespace = true
            enforce_option_sets = true

            [logging]
            filter = "dt_app=debug"
            log_dir = "/var/log/dieta"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert!(config.trim_whitespace);
        assert!(config.enforce_option_sets);
        assert_eq!(config.log_filter, "dt_app=debug");
        assert_eq!(config.log_dir, PathBuf::from("/var/log/dieta"));
    }

    #[test]
    fn test_from_toml_returns_empty_values_when_missing() {
        let toml_value: Value = toml::from_str("[validation]\n").unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn test_from_toml_ignores_wrong_types() {
        // A string where a bool is expected is not an error, just absent
        let toml_str = r#"
            [validation]
            trim_whitespace = "yes"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = AppConfig::from_toml(&toml_value).unwrap();

        assert!(!config.trim_whitespace);
    }
}
