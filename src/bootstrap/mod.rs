//! Process bootstrap: configuration, tracing and dependency wiring.

pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{default_config_path, load_config, load_or_default};
pub use tracing::init_tracing_subscriber;
pub use wiring::{build_runtime, WizardRuntime};
