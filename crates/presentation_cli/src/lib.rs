//! lta-cli presentation layer
//!
//! Argument parsing and plain-text output for the `lta-cli` binary.

pub mod cli;
pub mod output;

pub use cli::{Cli, Commands, log_filter_from_verbosity};
