//! In-memory draft store
//!
//! Holds the draft of a single wizard session. The store is created by the
//! caller and injected where needed; there is no process-wide instance.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use dt_core::ports::DraftStorePort;
use dt_core::profile::{PageOneSlice, PageTwoSlice, UserProfileDraft};

#[derive(Default)]
pub struct InMemoryDraftStore {
    draft: RwLock<UserProfileDraft>,
}

impl InMemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DraftStorePort for InMemoryDraftStore {
    async fn set_page_one(&self, slice: PageOneSlice) {
        let mut draft = self.draft.write().await;
        *draft = draft.with_page_one(slice);
        debug!("draft page one merged");
    }

    async fn set_page_two(&self, slice: PageTwoSlice) {
        let mut draft = self.draft.write().await;
        *draft = draft.with_page_two(slice);
        debug!("draft page two merged");
    }

    async fn snapshot(&self) -> UserProfileDraft {
        self.draft.read().await.clone()
    }

    async fn reset(&self) {
        *self.draft.write().await = UserProfileDraft::empty();
        debug!("draft reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_one() -> PageOneSlice {
        PageOneSlice {
            name: "Ana".into(),
            weight: "1.70".into(),
            age: "30".into(),
            height: "1.70".into(),
        }
    }

    fn page_two() -> PageTwoSlice {
        PageTwoSlice {
            gender: "feminino".into(),
            level: "Sedentário".into(),
            objective: "emagrecer".into(),
        }
    }

    #[tokio::test]
    async fn snapshot_is_empty_for_new_store() {
        let store = InMemoryDraftStore::new();
        assert!(store.snapshot().await.is_empty());
    }

    #[tokio::test]
    async fn slices_merge_independently() {
        let store = InMemoryDraftStore::new();

        store.set_page_two(page_two()).await;
        store.set_page_one(page_one()).await;

        let draft = store.snapshot().await;
        assert_eq!(draft.page_one(), Some(&page_one()));
        assert_eq!(draft.page_two(), Some(&page_two()));
    }

    #[tokio::test]
    async fn snapshot_does_not_see_later_writes() {
        let store = InMemoryDraftStore::new();
        store.set_page_one(page_one()).await;
        let before = store.snapshot().await;

        store.set_page_two(page_two()).await;

        assert!(before.page_two().is_none());
    }

    #[tokio::test]
    async fn reset_clears_written_draft() {
        let store = InMemoryDraftStore::new();
        store.set_page_one(page_one()).await;
        assert!(!store.snapshot().await.is_empty());

        store.reset().await;

        assert!(store.snapshot().await.is_empty());
    }
}
