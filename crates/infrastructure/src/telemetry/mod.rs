//! Logging initialisation
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a text or
//! JSON formatter. Log lines go to stderr so stdout carries only rendered
//! output.

use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};

/// Errors that can occur while installing the subscriber
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// A global subscriber is already installed or the filter is invalid
    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Filter directives to use when `RUST_LOG` is unset
///
/// A command-line override beats the configured filter.
#[must_use]
pub fn effective_filter<'a>(config: &'a LoggingConfig, overridden: Option<&'a str>) -> &'a str {
    overridden.unwrap_or(&config.filter)
}

/// Initialize logging with the given configuration
///
/// `RUST_LOG` wins when set; otherwise `overridden` (e.g. from `-v` flags),
/// then `config.filter`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig, overridden: Option<&str>) -> Result<(), TelemetryError> {
    let directives = effective_filter(config, overridden);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives));

    match config.format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    }
    .map_err(|e| TelemetryError::Init(e.to_string()))?;

    debug!(filter = %directives, format = %config.format, "Logging initialized");
    Ok(())
}
