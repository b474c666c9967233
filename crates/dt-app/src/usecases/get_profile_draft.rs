use std::sync::Arc;

use dt_core::ports::DraftStorePort;
use dt_core::profile::{IncompleteDraft, UserProfile, UserProfileDraft};

/// Use case for reading the draft handed to the nutrition step.
pub struct GetProfileDraft {
    draft_store: Arc<dyn DraftStorePort>,
}

impl GetProfileDraft {
    pub fn new(draft_store: Arc<dyn DraftStorePort>) -> Self {
        Self { draft_store }
    }

    pub async fn execute(&self) -> UserProfileDraft {
        self.draft_store.snapshot().await
    }

    /// Full profile, or which slice is still missing.
    pub async fn completed(&self) -> Result<UserProfile, IncompleteDraft> {
        self.execute().await.complete()
    }
}
