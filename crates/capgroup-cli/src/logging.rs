//! Structured logging for the capgroup binary.
//!
//! Everything goes to stderr so stdout carries only match output.

use capgroup::{LogFormat, LoggingConfig};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Error type for logging initialization.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// The configured level is not a valid filter directive.
    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    /// A global subscriber was already installed.
    #[error("failed to set global subscriber: {0}")]
    SetSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Build the filter: `RUST_LOG` wins over the configured level.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, LogError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|_| LogError::InvalidLevel(config.level.clone())),
    }
}

/// Install the global subscriber.
pub fn init_logging(config: &LoggingConfig) -> Result<(), LogError> {
    let filter = env_filter(config)?;

    match config.format {
        LogFormat::Pretty => {
            let subscriber = tracing_subscriber::registry().with(filter).with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_ansi(false),
            );
            tracing::subscriber::set_global_default(subscriber)?;
        }
        LogFormat::Json => {
            let subscriber = tracing_subscriber::registry().with(filter).with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(true)
                    .flatten_event(true),
            );
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    tracing::debug!(
        log_level = %config.level,
        log_format = %config.format,
        "logging initialized"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_garbage_level() {
        // only meaningful when RUST_LOG does not override the level
        if std::env::var_os("RUST_LOG").is_none() {
            let config = LoggingConfig::new().level("capgroup=loudest");
            assert!(matches!(env_filter(&config), Err(LogError::InvalidLevel(_))));
        }
    }

    #[test]
    fn accepts_directives() {
        let config = LoggingConfig::new().level("capgroup=trace,warn");
        assert!(env_filter(&config).is_ok());
    }
}
