//! Route-overlap travel time estimation
//!
//! Estimates how long a direct bus ride between two stops takes, for every
//! service that calls at both. Distances are chainage differences along the
//! route, not straight-line distances between the stops.

use std::collections::{HashMap, HashSet};

use domain::{RouteRecord, TravelEstimate};
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Assumed average bus speed in kilometres per minute (30 km/h)
pub const DEFAULT_SPEED_KM_PER_MIN: f64 = 0.5;

/// Tunables for travel time estimation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelTimeOptions {
    speed_km_per_min: f64,
}

impl Default for TravelTimeOptions {
    fn default() -> Self {
        Self {
            speed_km_per_min: DEFAULT_SPEED_KM_PER_MIN,
        }
    }
}

impl TravelTimeOptions {
    /// Create options with a custom average speed
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` unless the speed is finite and positive.
    pub fn new(speed_km_per_min: f64) -> Result<Self, ApplicationError> {
        if !speed_km_per_min.is_finite() || speed_km_per_min <= 0.0 {
            return Err(ApplicationError::invalid_argument(format!(
                "speed must be a positive number of km/min, got {speed_km_per_min}"
            )));
        }
        Ok(Self { speed_km_per_min })
    }

    /// Average speed in kilometres per minute
    #[must_use]
    pub const fn speed_km_per_min(&self) -> f64 {
        self.speed_km_per_min
    }

    /// Minutes needed to cover `distance_km` at the configured speed
    #[must_use]
    pub fn minutes_for(&self, distance_km: f64) -> f64 {
        distance_km / self.speed_km_per_min
    }
}

/// Estimate travel between `from_stop` and `to_stop` on every shared service
///
/// A service is shared when it has a route record at both stops. When a
/// service has several records at the same stop the first one wins. Results
/// follow the order in which services first appear among `from_stop`'s
/// records. No shared service, or an unknown stop code, yields an empty vec.
#[must_use]
pub fn estimate_travel_time(
    all_routes: &[RouteRecord],
    from_stop: &str,
    to_stop: &str,
    options: &TravelTimeOptions,
) -> Vec<TravelEstimate> {
    let mut to_chainage: HashMap<&str, f64> = HashMap::new();
    for record in all_routes.iter().filter(|r| r.bus_stop_code == to_stop) {
        to_chainage
            .entry(record.service_no.as_str())
            .or_insert(record.distance_along_route);
    }

    let mut seen: HashSet<&str> = HashSet::new();
    all_routes
        .iter()
        .filter(|r| r.bus_stop_code == from_stop)
        .filter(|r| seen.insert(r.service_no.as_str()))
        .filter_map(|from| {
            let to = to_chainage.get(from.service_no.as_str())?;
            let distance_km = (from.distance_along_route - to).abs();
            Some(TravelEstimate {
                service_no: from.service_no.clone(),
                distance_km,
                estimated_minutes: options.minutes_for(distance_km),
            })
        })
        .collect()
}
