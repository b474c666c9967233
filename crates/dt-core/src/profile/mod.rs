//! User profile draft accumulated across the wizard steps.

mod draft;
mod slice;

pub use draft::{IncompleteDraft, UserProfile, UserProfileDraft};
pub use slice::{PageOneSlice, PageTwoSlice};
