//! Tracing configuration for Dieta
//!
//! Installs the global `tracing-subscriber` registry:
//!
//! - `RUST_LOG` wins, then `logging.filter` from the config file, then the
//!   build-profile defaults
//! - human-readable lines go to stderr so stdout stays free for the screens
//! - an extra non-blocking file layer is added when `logging.log_dir` is set

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};

use dt_core::config::AppConfig;

pub const LOG_FILE_NAME: &str = "dieta.log";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives when neither `RUST_LOG` nor the config sets one.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    vec![
        if is_dev { "debug" } else { "warn" }.to_string(),
        if is_dev { "dt_app=debug" } else { "dt_app=info" }.to_string(),
        if is_dev {
            "dt_infra=debug"
        } else {
            "dt_infra=info"
        }
        .to_string(),
    ]
}

fn build_env_filter(config: &AppConfig) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    if !config.log_filter.is_empty() {
        match EnvFilter::try_new(&config.log_filter) {
            Ok(filter) => return filter,
            Err(err) => eprintln!(
                "Invalid logging.filter {:?}, using defaults: {err}",
                config.log_filter
            ),
        }
    }
    EnvFilter::new(build_filter_directives(is_development()).join(","))
}

/// Initialize the tracing subscriber
///
/// Call once in `main.rs` after loading the config.
///
/// ## Errors
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = build_env_filter(config);

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(BoxMakeWriter::new(io::stderr));

    let file_writer = if config.log_dir.as_os_str().is_empty() {
        None
    } else {
        match build_file_writer(&config.log_dir) {
            Ok(writer) => Some(writer),
            Err(err) => {
                eprintln!("Failed to initialize file logging, continuing without it: {err}");
                None
            }
        }
    };

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(
                "%Y-%m-%d %H:%M:%S%.3f".to_string(),
            ))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(log_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
