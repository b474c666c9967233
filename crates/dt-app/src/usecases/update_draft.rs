use std::sync::Arc;

use dt_core::ports::DraftStorePort;
use dt_core::profile::{PageOneSlice, PageTwoSlice};
use tracing::debug;

/// Use case for writing wizard slices into the session draft.
pub struct UpdateDraft {
    draft_store: Arc<dyn DraftStorePort>,
}

impl UpdateDraft {
    pub fn new(draft_store: Arc<dyn DraftStorePort>) -> Self {
        Self { draft_store }
    }

    pub async fn set_page_one(&self, slice: PageOneSlice) {
        debug!(slice = "page_one", "writing biometric slice");
        self.draft_store.set_page_one(slice).await;
    }

    pub async fn set_page_two(&self, slice: PageTwoSlice) {
        debug!(slice = "page_two", "writing preference slice");
        self.draft_store.set_page_two(slice).await;
    }

    pub async fn reset(&self) {
        self.draft_store.reset().await;
    }
}
