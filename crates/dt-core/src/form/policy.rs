use crate::config::AppConfig;

/// Knobs for the validation layer.
///
/// The defaults mirror the original schemas: a value is valid as soon as it
/// has at least one character (whitespace included), and selections are only
/// checked for presence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    /// Trim surrounding whitespace before the non-empty check.
    pub trim_whitespace: bool,
    /// Reject selections that are not part of the field's option set.
    pub enforce_option_sets: bool,
}

impl ValidationPolicy {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            trim_whitespace: config.trim_whitespace,
            enforce_option_sets: config.enforce_option_sets,
        }
    }
}
