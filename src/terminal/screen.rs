use std::io::{BufRead, Write};

use dt_core::form::layout::ScreenLayout;
use dt_core::form::{FormState, StepForm};
use dt_core::profile::UserProfile;

use super::prompt::{PromptError, Terminal};

/// Renders one step screen and collects a value for every field.
///
/// Errors already recorded on `form` are shown under their field before the
/// field is asked again.
pub fn fill_form<F, R, W>(
    term: &mut Terminal<R, W>,
    layout: &ScreenLayout,
    form: &mut FormState<F>,
) -> Result<(), PromptError>
where
    F: StepForm,
    R: BufRead,
    W: Write,
{
    term.line("")?;
    term.line(&format!("{} · {}", layout.step_label, layout.title))?;

    for field in layout.fields {
        term.line(field.label)?;
        if let Some(message) = form.error_for(field.field) {
            term.line(&format!("  ! {message}"))?;
        }

        let value = match field.options {
            Some(options) => term
                .prompt_select(field.placeholder, options)?
                .unwrap_or_default()
                .to_string(),
            None => term.prompt_text(field.placeholder)?,
        };
        form.set_field(field.field, value);
    }

    term.line(&format!("[ {} ]", layout.submit_label))?;
    Ok(())
}

/// Hand-off to the nutrition step.
pub fn show_profile<R: BufRead, W: Write>(
    term: &mut Terminal<R, W>,
    profile: &UserProfile,
) -> Result<(), PromptError> {
    let json = serde_json::to_string_pretty(profile)
        .map_err(|err| PromptError::Io(std::io::Error::other(err)))?;
    term.line("")?;
    term.line(&json)
}
