//! Bus stop entities

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoPoint;

/// A bus stop as published by the transit authority
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusStop {
    /// Unique five-digit stop code (e.g. "01012")
    pub code: String,
    /// Road the stop is located on
    pub road_name: String,
    /// Human-readable description (usually a nearby landmark)
    pub description: String,
    /// Stop position
    pub location: GeoPoint,
}

impl BusStop {
    /// Create a stop with only a code and location
    #[must_use]
    pub fn new(code: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            code: code.into(),
            road_name: String::new(),
            description: String::new(),
            location,
        }
    }

    /// Set the road name
    #[must_use]
    pub fn with_road_name(mut self, road_name: impl Into<String>) -> Self {
        self.road_name = road_name.into();
        self
    }

    /// Set the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl fmt::Display for BusStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.description.is_empty(), self.road_name.is_empty()) {
            (true, true) => write!(f, "{}", self.code),
            (false, true) => write!(f, "{} {}", self.code, self.description),
            (true, false) => write!(f, "{} ({})", self.code, self.road_name),
            (false, false) => write!(f, "{} {} ({})", self.code, self.description, self.road_name),
        }
    }
}

/// A bus stop annotated with its distance from a query point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedBusStop {
    /// The ranked stop, unchanged
    pub stop: BusStop,
    /// Great-circle distance from the query point in kilometres
    pub distance_km: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop() -> BusStop {
        BusStop::new("01012", GeoPoint::new_unchecked(1.2968, 103.8525))
    }

    #[test]
    fn display_code_only() {
        assert_eq!(stop().to_string(), "01012");
    }

    #[test]
    fn display_with_description_and_road() {
        let stop = stop()
            .with_description("Hotel Grand Pacific")
            .with_road_name("Victoria St");
        assert_eq!(stop.to_string(), "01012 Hotel Grand Pacific (Victoria St)");
    }

    #[test]
    fn display_with_road_only() {
        let stop = stop().with_road_name("Victoria St");
        assert_eq!(stop.to_string(), "01012 (Victoria St)");
    }
}
