//! Line-based terminal front end.
//!
//! Renders the wizard screens and projects field errors under each field.
//! Generic over the reader and writer so it can run against in-memory
//! buffers.

mod prompt;
mod screen;

pub use prompt::{PromptError, Terminal};
pub use screen::{fill_form, show_profile};
