//! Wizard state machine.
//!
//! Defines a pure state transition function for the submit flow.

use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use super::flow::WizardFlow;
use super::step::{Route, StepId};
use crate::form::{
    validate_step_one, validate_step_two, FieldErrors, StepOneInput, StepTwoInput,
    ValidationPolicy,
};
use crate::profile::{PageOneSlice, PageTwoSlice};

/// Wizard state: the screen on top of the stack and the errors of the last
/// rejected submit.
///
/// `errors_for` names the screen that produced `errors`. It differs from
/// `step` when an earlier screen, still mounted under the current one, was
/// resubmitted with invalid input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardState {
    pub step: StepId,
    pub errors: FieldErrors,
    pub errors_for: StepId,
}

impl WizardState {
    pub fn at(step: StepId) -> Self {
        Self {
            step,
            errors: FieldErrors::new(),
            errors_for: step,
        }
    }

    /// Errors to show on `screen`, if the last rejected submit came from it.
    pub fn errors_on(&self, screen: StepId) -> Option<&FieldErrors> {
        (self.errors_for == screen && !self.errors.is_empty()).then_some(&self.errors)
    }

    /// The flow has left the form screens.
    pub fn is_finished(&self) -> bool {
        !self.step.is_form()
    }
}

/// Events that drive the wizard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardEvent {
    /// The biometrics screen was submitted.
    SubmitBiometrics(StepOneInput),
    /// The preferences screen was submitted.
    SubmitPreferences(StepTwoInput),
}

impl WizardEvent {
    /// Event name without the submitted values, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            WizardEvent::SubmitBiometrics(_) => "SubmitBiometrics",
            WizardEvent::SubmitPreferences(_) => "SubmitPreferences",
        }
    }
}

/// Side-effects produced by state transitions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardAction {
    /// Merge the biometric slice into the draft.
    CommitPageOne(PageOneSlice),
    /// Merge the preference slice into the draft.
    CommitPageTwo(PageTwoSlice),
    /// Push a route on the router.
    Navigate(Route),
}

impl WizardAction {
    /// Action name without the slice contents, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            WizardAction::CommitPageOne(_) => "CommitPageOne",
            WizardAction::CommitPageTwo(_) => "CommitPageTwo",
            WizardAction::Navigate(_) => "Navigate",
        }
    }
}

/// Pure wizard state machine: no side effects.
#[derive(Debug, Clone, Default)]
pub struct WizardStateMachine {
    flow: WizardFlow,
    policy: ValidationPolicy,
}

impl WizardStateMachine {
    pub fn new(flow: WizardFlow, policy: ValidationPolicy) -> Self {
        Self { flow, policy }
    }

    pub fn flow(&self) -> &WizardFlow {
        &self.flow
    }

    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }

    pub fn initial_state(&self) -> WizardState {
        WizardState::at(self.flow.first())
    }

    pub fn transition(
        &self,
        state: WizardState,
        event: WizardEvent,
    ) -> (WizardState, Vec<WizardAction>) {
        let submitted = match &event {
            WizardEvent::SubmitBiometrics(_) => StepId::Biometrics,
            WizardEvent::SubmitPreferences(_) => StepId::Preferences,
        };

        if !self.flow.is_mounted(submitted, state.step) {
            warn!(step = ?state.step, event = event.kind(), "invalid wizard transition");
            return (state, Vec::new());
        }

        let commit = match event {
            WizardEvent::SubmitBiometrics(input) => validate_step_one(&input, &self.policy)
                .map(|fields| WizardAction::CommitPageOne(fields.into_page_one())),
            WizardEvent::SubmitPreferences(input) => validate_step_two(&input, &self.policy)
                .map(|fields| WizardAction::CommitPageTwo(fields.into_page_two())),
        };

        // A rejected submit never moves the cursor; nothing was navigated.
        let commit = match commit {
            Ok(commit) => commit,
            Err(errors) => {
                return (
                    WizardState {
                        step: state.step,
                        errors,
                        errors_for: submitted,
                    },
                    Vec::new(),
                )
            }
        };

        let next = match self.flow.successor(submitted) {
            Ok(next) => next,
            Err(err) => {
                error!(error = %err, "wizard flow cannot advance");
                return (state, Vec::new());
            }
        };

        (
            WizardState::at(next),
            vec![commit, WizardAction::Navigate(next.route())],
        )
    }
}
