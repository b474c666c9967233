use super::error::FieldErrors;
use super::field::FieldName;
use super::policy::ValidationPolicy;

/// Raw input of one wizard step.
pub trait StepForm: Default + Clone {
    type Output;

    /// Fields owned by the step, in schema order.
    const FIELDS: &'static [FieldName];

    /// Stores a value; returns `false` when the field belongs to another step.
    fn set(&mut self, field: FieldName, value: String) -> bool;

    fn value(&self, field: FieldName) -> Option<&str>;

    fn validate(&self, policy: &ValidationPolicy) -> Result<Self::Output, FieldErrors>;
}

/// Ephemeral state of a mounted step screen.
///
/// Lives only while the screen is shown and is dropped on navigation.
#[derive(Debug, Clone)]
pub struct FormState<F: StepForm> {
    values: F,
    errors: FieldErrors,
    policy: ValidationPolicy,
}

impl<F: StepForm> FormState<F> {
    pub fn new(policy: ValidationPolicy) -> Self {
        Self {
            values: F::default(),
            errors: FieldErrors::new(),
            policy,
        }
    }

    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) -> bool {
        self.values.set(field, value.into())
    }

    pub fn values(&self) -> &F {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Message to render under `field`, if any.
    pub fn error_for(&self, field: FieldName) -> Option<&str> {
        self.errors.get(field)
    }

    /// Whether the current values would pass validation.
    pub fn is_valid(&self) -> bool {
        self.values.validate(&self.policy).is_ok()
    }

    /// Replaces the displayed errors, typically with the result of a submit.
    pub fn show_errors(&mut self, errors: FieldErrors) {
        self.errors = errors;
    }

    /// Validates locally and records the outcome.
    pub fn submit(&mut self) -> Option<F::Output> {
        match self.values.validate(&self.policy) {
            Ok(output) => {
                self.errors = FieldErrors::new();
                Some(output)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{StepOneInput, StepTwoInput};

    #[test]
    fn fresh_form_is_invalid_and_has_no_errors() {
        let form = FormState::<StepOneInput>::new(ValidationPolicy::default());
        assert!(!form.is_valid());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn submit_records_errors_then_clears_them() {
        let mut form = FormState::<StepOneInput>::new(ValidationPolicy::default());
        form.set_field(FieldName::Name, "Ana");

        assert!(form.submit().is_none());
        assert_eq!(form.error_for(FieldName::Weight), Some("Peso é obrigatório"));
        assert_eq!(form.error_for(FieldName::Name), None);

        form.set_field(FieldName::Weight, "60");
        form.set_field(FieldName::Age, "30");
        form.set_field(FieldName::Height, "1.70");
        assert!(form.is_valid());

        let fields = form.submit().unwrap();
        assert_eq!(fields.height, "1.70");
        assert!(form.errors().is_empty());
    }

    #[test]
    fn select_form_binds_only_its_fields() {
        let mut form = FormState::<StepTwoInput>::new(ValidationPolicy::default());
        assert!(!form.set_field(FieldName::Name, "Ana"));
        assert!(form.set_field(FieldName::Gender, "feminino"));
        assert_eq!(form.values().value(FieldName::Gender), Some("feminino"));
        assert_eq!(StepTwoInput::FIELDS.len(), 3);
    }
}
