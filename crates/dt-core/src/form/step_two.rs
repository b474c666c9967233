use serde::{Deserialize, Serialize};

use super::error::FieldErrors;
use super::field::FieldName;
use super::options::{GENDER_OPTIONS, LEVEL_OPTIONS, OBJECTIVE_OPTIONS};
use super::policy::ValidationPolicy;
use super::rules::selected;
use super::state::StepForm;
use crate::profile::PageTwoSlice;

/// Raw selections of the preference step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepTwoInput {
    pub gender: Option<String>,
    pub level: Option<String>,
    pub objective: Option<String>,
}

impl StepTwoInput {
    pub fn new(
        gender: impl Into<String>,
        level: impl Into<String>,
        objective: impl Into<String>,
    ) -> Self {
        Self {
            gender: Some(gender.into()),
            level: Some(level.into()),
            objective: Some(objective.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepTwoFields {
    pub gender: String,
    pub level: String,
    pub objective: String,
}

impl StepTwoFields {
    pub fn into_page_two(self) -> PageTwoSlice {
        PageTwoSlice {
            gender: self.gender,
            level: self.level,
            objective: self.objective,
        }
    }
}

/// Validates selections in schema order: gender, objective, level.
pub fn validate_step_two(
    input: &StepTwoInput,
    policy: &ValidationPolicy,
) -> Result<StepTwoFields, FieldErrors> {
    let mut errors = FieldErrors::new();

    let gender = selected(
        FieldName::Gender,
        input.gender.as_deref(),
        &GENDER_OPTIONS,
        policy,
        &mut errors,
    );
    let objective = selected(
        FieldName::Objective,
        input.objective.as_deref(),
        &OBJECTIVE_OPTIONS,
        policy,
        &mut errors,
    );
    let level = selected(
        FieldName::Level,
        input.level.as_deref(),
        &LEVEL_OPTIONS,
        policy,
        &mut errors,
    );

    match (gender, level, objective) {
        (Some(gender), Some(level), Some(objective)) if errors.is_empty() => Ok(StepTwoFields {
            gender,
            level,
            objective,
        }),
        _ => Err(errors),
    }
}

impl StepForm for StepTwoInput {
    type Output = StepTwoFields;

    const FIELDS: &'static [FieldName] =
        &[FieldName::Gender, FieldName::Level, FieldName::Objective];

    fn set(&mut self, field: FieldName, value: String) -> bool {
        let slot = match field {
            FieldName::Gender => &mut self.gender,
            FieldName::Level => &mut self.level,
            FieldName::Objective => &mut self.objective,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    fn value(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::Gender => self.gender.as_deref(),
            FieldName::Level => self.level.as_deref(),
            FieldName::Objective => self.objective.as_deref(),
            _ => None,
        }
    }

    fn validate(&self, policy: &ValidationPolicy) -> Result<StepTwoFields, FieldErrors> {
        validate_step_two(self, policy)
    }
}
