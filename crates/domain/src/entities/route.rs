//! Bus route waypoints and derived travel estimates

use serde::{Deserialize, Serialize};

/// One (service, stop) waypoint on a bus route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    /// Code of the stop served at this waypoint
    pub bus_stop_code: String,
    /// Service number (e.g. "10", "NR7")
    pub service_no: String,
    /// Chainage: kilometres travelled from the route origin to this stop
    pub distance_along_route: f64,
    /// Operator code (e.g. "SBST")
    #[serde(default)]
    pub operator: String,
    /// Route direction (1 or 2)
    #[serde(default = "default_direction")]
    pub direction: u8,
    /// Position of the stop within the route
    #[serde(default)]
    pub stop_sequence: u32,
}

const fn default_direction() -> u8 {
    1
}

impl RouteRecord {
    /// Create a waypoint with default pass-through fields
    #[must_use]
    pub fn new(
        bus_stop_code: impl Into<String>,
        service_no: impl Into<String>,
        distance_along_route: f64,
    ) -> Self {
        Self {
            bus_stop_code: bus_stop_code.into(),
            service_no: service_no.into(),
            distance_along_route,
            operator: String::new(),
            direction: default_direction(),
            stop_sequence: 0,
        }
    }
}

/// Estimated travel on one service between two stops
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelEstimate {
    /// Service shared by both stops
    pub service_no: String,
    /// Chainage difference in kilometres
    pub distance_km: f64,
    /// Estimated travel time in minutes
    pub estimated_minutes: f64,
}
