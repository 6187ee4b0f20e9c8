//! Tracing initialization and subscriber setup.
//!
//! Configures the tracing subscriber pipeline from `tracing` macros to the
//! rotating log file.

use super::file_writer::FileWriter;
use crate::Config;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "wanderlog.log";

/// Initializes the tracing subscriber with file output.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters events by the configured level
/// 2. Formats them as plain text lines
/// 3. Writes to a rotating file with backups
///
/// # Trace Level Resolution
///
/// 1. `RUST_LOG` environment variable if set
/// 2. `config.trace_level` if set
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently skips setup if that fails (logging is optional)
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```rust,no_run
/// use wanderlog::observability::init_tracing;
/// use wanderlog::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let data_dir = crate::infrastructure::paths::get_data_dir(config);
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let writer = Arc::new(FileWriter::new(data_dir.join(LOG_FILE_NAME)));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    let _ = subscriber.try_init();
}
