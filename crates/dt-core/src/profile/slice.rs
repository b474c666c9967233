use serde::{Deserialize, Serialize};

/// Biometric fields written by the first step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageOneSlice {
    pub name: String,
    pub weight: String,
    pub age: String,
    pub height: String,
}

/// Preference fields written by the second step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageTwoSlice {
    pub gender: String,
    pub level: String,
    pub objective: String,
}
