//! # dt-core
//!
//! Core domain models and validation rules for the Dieta onboarding wizard.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod config;
pub mod form;
pub mod ids;
pub mod ports;
pub mod profile;
pub mod wizard;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use form::{FieldError, FieldErrors, FieldName, ValidationPolicy};
pub use ids::WizardSessionId;
pub use profile::{IncompleteDraft, PageOneSlice, PageTwoSlice, UserProfile, UserProfileDraft};
pub use wizard::{Route, StepId, WizardAction, WizardEvent, WizardFlow, WizardState};
