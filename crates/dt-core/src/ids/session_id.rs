use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Identifier of one pass through the wizard.
/// Format: uuid v4
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WizardSessionId(String);

impl_id!(WizardSessionId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_id_new_is_unique() {
        let a = WizardSessionId::new();
        let b = WizardSessionId::new();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }

    #[test]
    fn test_session_id_from_str() {
        let id: WizardSessionId = "session-1".into();
        assert_eq!(id.as_str(), "session-1");
        assert_eq!(id.to_string(), "session-1");
    }
}
