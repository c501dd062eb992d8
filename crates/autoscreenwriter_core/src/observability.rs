//! Tracing subscriber initialization.

use autoscreenwriter_error::{ConfigError, ConfigErrorKind};
use tracing_subscriber::EnvFilter;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Install the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and falls back to `default_filter`.
/// Logs go to stderr so generated text on stdout stays clean.
///
/// # Errors
///
/// Fails if the filter is invalid or a subscriber is already installed.
pub fn init_tracing(format: LogFormat, default_filter: &str) -> Result<(), ConfigError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .map_err(|e| ConfigErrorKind::Logging(format!("invalid filter: {}", e)))?,
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
    result.map_err(|e| ConfigErrorKind::Logging(e.to_string()))?;

    tracing::debug!(%format, "Tracing initialized");
    Ok(())
}
