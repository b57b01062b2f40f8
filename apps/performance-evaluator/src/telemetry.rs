//! Logging setup.
//!
//! `RUST_LOG`, when set, overrides the configured level.
//!
//! # Usage
//!
//! ```rust,ignore
//! use performance_evaluator::config::load_config;
//! use performance_evaluator::telemetry::init_logging;
//!
//! let config = load_config(None)?;
//! init_logging(&config.logging)?;
//! ```

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::LoggingConfig;

/// Errors from logging initialization.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured level is not a valid filter directive.
    #[error("Invalid log filter '{0}'")]
    InvalidFilter(String),

    /// A global subscriber could not be installed.
    #[error("Failed to install subscriber: {0}")]
    SubscriberError(String),
}

/// Build the log filter from `RUST_LOG`, falling back to `level`.
///
/// # Errors
///
/// Returns `TelemetryError::InvalidFilter` if `RUST_LOG` is unset and
/// `level` does not parse.
pub fn build_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|_| TelemetryError::InvalidFilter(level.to_string()))
}

/// Install the global tracing subscriber.
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(&config.level)?;
    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match config.format.as_str() {
        "json" => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        "pretty" => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init(),
        _ => registry
            .with(tracing_subscriber::fmt::layer().compact())
            .try_init(),
    };
    result.map_err(|e| TelemetryError::SubscriberError(e.to_string()))?;

    tracing::debug!(level = %config.level, format = %config.format, "Logging initialized");
    Ok(())
}
