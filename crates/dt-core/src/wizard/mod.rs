//! Wizard domain module.
//!
//! This module defines the step order and the submit state machine.

mod flow;
pub mod state_machine;
mod step;

pub use flow::{FlowError, WizardFlow};
pub use state_machine::{WizardAction, WizardEvent, WizardState, WizardStateMachine};
pub use step::{Route, StepId};
