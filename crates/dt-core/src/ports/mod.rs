//! Port interfaces for the application layer
//!
//! Ports define the contract between the wizard use cases and the
//! infrastructure that stores the draft, performs navigation and publishes
//! state to the presentation layer.

mod draft_store;
mod navigator;
mod wizard_event;

pub use draft_store::DraftStorePort;
pub use navigator::NavigatorPort;
pub use wizard_event::WizardEventPort;

