//! Tracing initialization and subscriber setup.
//!
//! Sets up the pipeline from `tracing` macros to the rotating log file:
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → FileWriter → heroboard.log
//! ```

use super::file_writer::FileWriter;
use crate::Config;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "heroboard.log";

const DEFAULT_LEVEL: &str = "info";

/// Initializes the tracing subscriber with file output.
///
/// # Trace Level Resolution
///
/// 1. `config.trace_level` if set and valid
/// 2. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Returns `None` without installing anything if that fails (logging is optional)
/// - Idempotent: only the first call installs a subscriber
///
/// Returns the log file path when a subscriber was set up.
///
/// # Example
///
/// ```rust,no_run
/// use heroboard::observability::init_tracing;
/// use heroboard::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// if let Some(path) = init_tracing(&config) {
///     tracing::debug!(log = %path.display(), "tracing is now active");
/// }
/// ```
pub fn init_tracing(config: &Config) -> Option<PathBuf> {
    let data_dir = crate::infrastructure::paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return None;
    }

    let log_file = data_dir.join(LOG_FILE_NAME);
    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(FileWriter::new(log_file.clone()));

    let subscriber = tracing_subscriber::registry()
        .with(build_filter(config))
        .with(layer);

    let _ = subscriber.try_init();
    Some(log_file)
}

/// Builds the level filter, falling back to `info` on an invalid directive.
fn build_filter(config: &Config) -> EnvFilter {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}
