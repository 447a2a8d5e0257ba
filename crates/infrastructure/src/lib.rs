//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the DataMall client and
//! provides configuration loading and logging setup for the binaries.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, Environment, NearestConfig, TravelTimeConfig};
pub use telemetry::{LogFormat, LoggingConfig, TelemetryError, init_logging};
