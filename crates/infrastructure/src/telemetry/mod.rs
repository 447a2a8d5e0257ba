//! Logging setup
//!
//! Installs a `tracing` subscriber writing to stderr so stdout carries only
//! command results.

mod logging;

pub use logging::{LogFormat, LoggingConfig, TelemetryError, init_logging, resolve_filter};
