//! Form validation for the wizard steps.
//!
//! Validation is independent of rendering: each step turns its raw input
//! into either validated fields or an ordered list of [`FieldError`]s, and
//! the presentation layer only projects those errors onto its widgets.

mod error;
mod field;
pub mod options;
mod policy;
mod rules;
pub mod layout;
mod state;
mod step_one;
mod step_two;

pub use error::{FieldError, FieldErrors};
pub use field::FieldName;
pub use policy::ValidationPolicy;
pub use state::{FormState, StepForm};
pub use step_one::{validate_step_one, StepOneFields, StepOneInput};
pub use step_two::{validate_step_two, StepTwoFields, StepTwoInput};
