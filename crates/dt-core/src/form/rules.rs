use super::error::{FieldError, FieldErrors};
use super::field::FieldName;
use super::options::OptionSet;
use super::policy::ValidationPolicy;

/// Non-empty check shared by every field.
///
/// Records the field's message and returns `None` when the value is missing
/// or empty. A missing value is treated exactly like an empty one.
pub(super) fn required(
    field: FieldName,
    raw: Option<&str>,
    policy: &ValidationPolicy,
    errors: &mut FieldErrors,
) -> Option<String> {
    let value = raw.unwrap_or_default();
    let value = if policy.trim_whitespace {
        value.trim()
    } else {
        value
    };

    if value.is_empty() {
        errors.push(FieldError::required(field));
        return None;
    }
    Some(value.to_string())
}

/// Non-empty check for a select field, plus optional option-set closure.
pub(super) fn selected(
    field: FieldName,
    raw: Option<&str>,
    options: &OptionSet,
    policy: &ValidationPolicy,
    errors: &mut FieldErrors,
) -> Option<String> {
    let value = required(field, raw, policy, errors)?;
    if policy.enforce_option_sets && !options.contains_value(&value) {
        errors.push(FieldError::required(field));
        return None;
    }
    Some(value)
}
