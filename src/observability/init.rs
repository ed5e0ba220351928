//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber with a file-backed fmt
//! layer, setting up the pipeline from `tracing` macros to the log file.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::infrastructure::paths;
use crate::Config;

/// Initializes the tracing subscriber with file-based log output.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters events based on the configured log level
/// 2. Formats them as plain text without ANSI styling
/// 3. Appends to `<data_dir>/roster.log`
///
/// # Parameters
///
/// * `config` - Client configuration containing the `log_level` option
///
/// # Level Resolution
///
/// Level is determined by:
/// 1. `config.log_level` if set (sourced from `ROSTER_LOG`)
/// 2. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently skips setup if the directory or file cannot be created
///   (logging is optional, the UI must still come up)
/// - Idempotent: safe to call multiple times (only the first call takes
///   effect)
pub fn init_tracing(config: &Config) {
    let level = config
        .log_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths::log_path())
    else {
        return;
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(Arc::new(file));

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(fmt_layer);

    let _ = subscriber.try_init();
}
