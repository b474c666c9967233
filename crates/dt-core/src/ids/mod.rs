mod id_macro;
mod session_id;

pub use session_id::WizardSessionId;
