//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Coordinates outside the valid latitude/longitude ranges
    #[error(
        "Invalid coordinates ({latitude}, {longitude}): latitude must be -90 to 90, longitude must be -180 to 180"
    )]
    InvalidCoordinates {
        /// Rejected latitude
        latitude: f64,
        /// Rejected longitude
        longitude: f64,
    },
}

impl DomainError {
    /// Create an invalid coordinates error
    pub const fn invalid_coordinates(latitude: f64, longitude: f64) -> Self {
        Self::InvalidCoordinates {
            latitude,
            longitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_coordinates_creates_correct_error() {
        let DomainError::InvalidCoordinates {
            latitude,
            longitude,
        } = DomainError::invalid_coordinates(91.0, 10.0);
        assert!((latitude - 91.0).abs() < f64::EPSILON);
        assert!((longitude - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_coordinates_error_message() {
        let err = DomainError::invalid_coordinates(91.0, 10.0);
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid coordinates (91, 10)"));
        assert!(msg.contains("-90 to 90"));
    }
}
