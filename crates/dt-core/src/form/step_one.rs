use serde::{Deserialize, Serialize};

use super::error::FieldErrors;
use super::field::FieldName;
use super::policy::ValidationPolicy;
use super::rules::required;
use super::state::StepForm;
use crate::profile::PageOneSlice;

/// Raw biometric input as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOneInput {
    pub name: Option<String>,
    pub weight: Option<String>,
    pub age: Option<String>,
    pub height: Option<String>,
}

impl StepOneInput {
    pub fn new(
        name: impl Into<String>,
        weight: impl Into<String>,
        age: impl Into<String>,
        height: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            weight: Some(weight.into()),
            age: Some(age.into()),
            height: Some(height.into()),
        }
    }
}

/// Biometric fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOneFields {
    pub name: String,
    pub weight: String,
    pub age: String,
    pub height: String,
}

impl StepOneFields {
    /// Builds the slice written to the draft.
    ///
    /// `weight` is taken from the height input. This matches the mapping the
    /// screen has always shipped with and is kept until the intended mapping
    /// is confirmed.
    pub fn into_page_one(self) -> PageOneSlice {
        PageOneSlice {
            name: self.name,
            weight: self.height.clone(),
            age: self.age,
            height: self.height,
        }
    }
}

/// Validates every field in schema order: name, weight, age, height.
pub fn validate_step_one(
    input: &StepOneInput,
    policy: &ValidationPolicy,
) -> Result<StepOneFields, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = required(FieldName::Name, input.name.as_deref(), policy, &mut errors);
    let weight = required(FieldName::Weight, input.weight.as_deref(), policy, &mut errors);
    let age = required(FieldName::Age, input.age.as_deref(), policy, &mut errors);
    let height = required(FieldName::Height, input.height.as_deref(), policy, &mut errors);

    match (name, weight, age, height) {
        (Some(name), Some(weight), Some(age), Some(height)) if errors.is_empty() => {
            Ok(StepOneFields {
                name,
                weight,
                age,
                height,
            })
        }
        _ => Err(errors),
    }
}

impl StepForm for StepOneInput {
    type Output = StepOneFields;

    const FIELDS: &'static [FieldName] = &[
        FieldName::Name,
        FieldName::Weight,
        FieldName::Age,
        FieldName::Height,
    ];

    fn set(&mut self, field: FieldName, value: String) -> bool {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Weight => &mut self.weight,
            FieldName::Age => &mut self.age,
            FieldName::Height => &mut self.height,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    fn value(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::Name => self.name.as_deref(),
            FieldName::Weight => self.weight.as_deref(),
            FieldName::Age => self.age.as_deref(),
            FieldName::Height => self.height.as_deref(),
            _ => None,
        }
    }

    fn validate(&self, policy: &ValidationPolicy) -> Result<StepOneFields, FieldErrors> {
        validate_step_one(self, policy)
    }
}
