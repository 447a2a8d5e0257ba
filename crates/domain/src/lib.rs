//! Domain layer for lta-cli
//!
//! Contains the transit entities, value objects, and domain errors shared by
//! every other crate. Geographic distance lives here because it is a pure
//! property of two points and needs nothing but the coordinates.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
