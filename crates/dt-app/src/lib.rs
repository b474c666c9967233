//! Dieta Application Orchestration Layer
//!
//! This crate contains the wizard use cases and the orchestrator that runs
//! the state machine against the ports.

pub mod usecases;

pub use usecases::{GetProfileDraft, UpdateDraft, WizardOrchestrator};
