//! Logging setup
//!
//! Installs a global `tracing` subscriber. `RUST_LOG` takes precedence over
//! the configured level when it is set.

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{FacadeError, Result};
use tracing_subscriber::EnvFilter;

/// Build the event filter for a logging configuration
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(config.level.to_ascii_lowercase())
            .map_err(|e| FacadeError::Logging(format!("Invalid log level: {}", e))),
    }
}

/// Initialize the global subscriber
///
/// Fails if a global subscriber has already been installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = env_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .with_thread_ids(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    installed.map_err(|e| FacadeError::Logging(e.to_string()))
}
