//! Tracing subscriber setup.

use prism_error::{ConfigError, PrismResult};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Log output layout.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over `default_directive` when set. Logs go to stderr so
/// generated text on stdout stays clean.
pub fn init_tracing(format: LogFormat, default_directive: &str) -> PrismResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = match format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    result.map_err(|e| ConfigError::new(format!("Failed to initialize tracing: {}", e)))?;
    debug!(format = %format, "Tracing initialized");
    Ok(())
}
