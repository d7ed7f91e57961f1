//! Tracing subscriber initialization.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },

    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Initializes the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; the configured log level is the fallback.
pub fn init(log_level: &str) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(log_level).map_err(|source| TelemetryError::EnvFilter {
            value: log_level.to_string(),
            source,
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(TelemetryError::Subscriber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_rejects_malformed_filter() {
        // An unparsable directive must surface as an EnvFilter error, not
        // fall back silently. Only runs meaningfully when RUST_LOG is unset.
        if std::env::var_os("RUST_LOG").is_none() {
            let result = init("not==a==filter");
            assert!(matches!(result, Err(TelemetryError::EnvFilter { .. })));
        }
    }
}
