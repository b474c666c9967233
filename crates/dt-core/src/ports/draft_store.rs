use async_trait::async_trait;

use crate::profile::{PageOneSlice, PageTwoSlice, UserProfileDraft};

/// Session-scoped accumulator for the user profile draft.
///
/// Writes are shallow merges of one slice and cannot fail.
#[async_trait]
pub trait DraftStorePort: Send + Sync {
    async fn set_page_one(&self, slice: PageOneSlice);

    async fn set_page_two(&self, slice: PageTwoSlice);

    /// Current draft as of the last write.
    async fn snapshot(&self) -> UserProfileDraft;

    /// Drops both slices, for a new session.
    async fn reset(&self);
}

