mod get_profile_draft;
mod update_draft;
pub mod wizard;

pub use get_profile_draft::GetProfileDraft;
pub use update_draft::UpdateDraft;
pub use wizard::WizardOrchestrator;
