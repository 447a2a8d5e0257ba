//! Application layer - Use cases and orchestration
//!
//! Contains the pure ranking and travel-time computations, the port through
//! which transit data is fetched, and the service that ties them together.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
