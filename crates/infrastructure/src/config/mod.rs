//! Application configuration
//!
//! Layered with the `config` crate:
//! 1. built-in defaults (every section implements `Default`)
//! 2. `lta-cli.toml` in the working directory, or an explicit `--config` file
//! 3. environment variables prefixed `LTA_`, nested with `__`
//!    (e.g. `LTA_DATAMALL__API_KEY`, `LTA_NEAREST__DEFAULT_LIMIT`)

mod tuning;

use std::{fmt, path::Path};

use application::error::ApplicationError;
use integration_datamall::DataMallConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::telemetry::LoggingConfig;

pub use tuning::{NearestConfig, TravelTimeConfig};

/// Name of the optional configuration file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "lta-cli";

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "LTA";

/// Application environment (development or production)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Production environment
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment
    #[serde(default)]
    pub environment: Environment,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// DataMall API client settings
    #[serde(default)]
    pub datamall: DataMallConfig,

    /// Nearest-stop ranking defaults
    #[serde(default)]
    pub nearest: NearestConfig,

    /// Travel time estimation defaults
    #[serde(default)]
    pub travel_time: TravelTimeConfig,
}

impl AppConfig {
    /// Load configuration from defaults, an optional file and the environment
    ///
    /// With `path` set the file must exist; otherwise `lta-cli.toml` is read
    /// when present.
    pub fn load(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Load configuration using a custom environment source
    fn load_with_env(
        path: Option<&Path>,
        environment: config::Environment,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder().add_source(file).add_source(
            environment
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder.build()?.try_deserialize()?;
        debug!(environment = %config.environment, "Configuration loaded");
        Ok(config)
    }

    /// Check that every section holds usable values
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` naming the first bad setting.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        self.datamall
            .validate()
            .map_err(|e| ApplicationError::Configuration(format!("datamall: {e}")))?;
        self.nearest.ranking_options()?;
        self.travel_time.travel_time_options()?;
        Ok(())
    }
}
