//! Subscriber initialization and configuration

use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// `[logging]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directives used when neither `RUST_LOG` nor `-v` is given
    /// (e.g. "warn", "infrastructure=debug,warn")
    #[serde(default = "default_log_filter")]
    pub filter: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            format: LogFormat::default(),
        }
    }
}

/// Pick the filter directives to apply
///
/// `RUST_LOG` wins, then the command-line override, then the configured filter.
pub fn resolve_filter(
    rust_log: Option<&str>,
    cli_override: Option<&str>,
    config: &LoggingConfig,
) -> String {
    rust_log
        .filter(|value| !value.trim().is_empty())
        .or(cli_override)
        .unwrap_or(config.filter.as_str())
        .to_string()
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns `TelemetryError::Filter` for unparsable directives and
/// `TelemetryError::Init` when a subscriber is already installed.
pub fn init_logging(
    config: &LoggingConfig,
    cli_override: Option<&str>,
) -> Result<(), TelemetryError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directives = resolve_filter(rust_log.as_deref(), cli_override, config);
    let env_filter =
        EnvFilter::try_new(&directives).map_err(|e| TelemetryError::Filter(e.to_string()))?;

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.format {
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
    }
    .map_err(|e| TelemetryError::Init(e.to_string()))?;

    debug!(filter = %directives, format = ?config.format, "Logging initialized");
    Ok(())
}

/// Error type for logging initialization
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// Failed to initialize tracing subscriber
    #[error("Failed to initialize tracing: {0}")]
    Init(String),

    /// Filter directives could not be parsed
    #[error("Invalid log filter: {0}")]
    Filter(String),
}
