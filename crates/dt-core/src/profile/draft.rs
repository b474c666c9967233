use serde::{Deserialize, Serialize};

use super::slice::{PageOneSlice, PageTwoSlice};

/// Partially filled user profile.
///
/// Each slice stays `None` until its step submits successfully. Writing one
/// slice never touches the other one, and nothing re-validates a slice that
/// was already written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfileDraft {
    page_one: Option<PageOneSlice>,
    page_two: Option<PageTwoSlice>,
}

impl UserProfileDraft {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a new draft with the page one slice replaced.
    pub fn with_page_one(&self, slice: PageOneSlice) -> Self {
        Self {
            page_one: Some(slice),
            page_two: self.page_two.clone(),
        }
    }

    /// Returns a new draft with the page two slice replaced.
    pub fn with_page_two(&self, slice: PageTwoSlice) -> Self {
        Self {
            page_one: self.page_one.clone(),
            page_two: Some(slice),
        }
    }

    pub fn page_one(&self) -> Option<&PageOneSlice> {
        self.page_one.as_ref()
    }

    pub fn page_two(&self) -> Option<&PageTwoSlice> {
        self.page_two.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.page_one.is_none() && self.page_two.is_none()
    }

    /// Converts the draft into a full profile for the nutrition step.
    pub fn complete(&self) -> Result<UserProfile, IncompleteDraft> {
        match (&self.page_one, &self.page_two) {
            (Some(page_one), Some(page_two)) => Ok(UserProfile {
                name: page_one.name.clone(),
                weight: page_one.weight.clone(),
                age: page_one.age.clone(),
                height: page_one.height.clone(),
                gender: page_two.gender.clone(),
                level: page_two.level.clone(),
                objective: page_two.objective.clone(),
            }),
            (None, Some(_)) => Err(IncompleteDraft::MissingPageOne),
            (Some(_), None) => Err(IncompleteDraft::MissingPageTwo),
            (None, None) => Err(IncompleteDraft::Empty),
        }
    }
}

/// Profile with both slices present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub weight: String,
    pub age: String,
    pub height: String,
    pub gender: String,
    pub level: String,
    pub objective: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IncompleteDraft {
    #[error("draft has no biometric data")]
    MissingPageOne,
    #[error("draft has no preference data")]
    MissingPageTwo,
    #[error("draft is empty")]
    Empty,
}
