use super::step::StepId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("wizard flow has no steps")]
    Empty,
    #[error("step {0:?} appears more than once")]
    Duplicate(StepId),
    #[error("wizard flow is missing step {0:?}")]
    MissingStep(StepId),
    #[error("wizard flow must end on a screen without a form, found {0:?}")]
    EndsOnForm(StepId),
    #[error("no step follows {0:?}")]
    NoSuccessor(StepId),
}

/// Ordered list of wizard steps.
///
/// Destinations are looked up here instead of being hard-coded in each
/// submit handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardFlow {
    steps: Vec<StepId>,
}

impl WizardFlow {
    pub fn new(steps: Vec<StepId>) -> Result<Self, FlowError> {
        let last = *steps.last().ok_or(FlowError::Empty)?;

        for (index, step) in steps.iter().enumerate() {
            if steps[..index].contains(step) {
                return Err(FlowError::Duplicate(*step));
            }
        }
        for required in [StepId::Biometrics, StepId::Preferences] {
            if !steps.contains(&required) {
                return Err(FlowError::MissingStep(required));
            }
        }
        if last.is_form() {
            return Err(FlowError::EndsOnForm(last));
        }

        Ok(Self { steps })
    }

    /// Biometrics, then preferences, then nutrition.
    pub fn standard() -> Self {
        Self {
            steps: vec![StepId::Biometrics, StepId::Preferences, StepId::Nutrition],
        }
    }

    pub fn steps(&self) -> &[StepId] {
        &self.steps
    }

    pub fn first(&self) -> StepId {
        self.steps[0]
    }

    pub fn position(&self, step: StepId) -> Option<usize> {
        self.steps.iter().position(|candidate| *candidate == step)
    }

    pub fn next_after(&self, step: StepId) -> Option<StepId> {
        let index = self.position(step)?;
        self.steps.get(index + 1).copied()
    }

    /// Step the wizard moves to after `step` is submitted.
    pub fn successor(&self, step: StepId) -> Result<StepId, FlowError> {
        self.next_after(step).ok_or(FlowError::NoSuccessor(step))
    }

    /// Whether `step` is still on the navigation stack while `current` is shown.
    pub fn is_mounted(&self, step: StepId, current: StepId) -> bool {
        if !current.is_form() {
            return false;
        }
        match (self.position(step), self.position(current)) {
            (Some(step), Some(current)) => step <= current,
            _ => false,
        }
    }
}

impl Default for WizardFlow {
    fn default() -> Self {
        Self::standard()
    }
}
