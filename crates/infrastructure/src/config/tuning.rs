//! Ranking and estimation tunables

use application::{
    error::ApplicationError,
    services::{DEFAULT_NEAREST_LIMIT, DEFAULT_SPEED_KM_PER_MIN, RankingOptions, TravelTimeOptions},
};
use serde::{Deserialize, Serialize};

/// `[nearest]` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearestConfig {
    /// Stops returned when `--limit` is not given
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

const fn default_limit() -> usize {
    DEFAULT_NEAREST_LIMIT
}

impl Default for NearestConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
        }
    }
}

impl NearestConfig {
    /// Validated ranking options
    pub fn ranking_options(&self) -> Result<RankingOptions, ApplicationError> {
        RankingOptions::new(self.default_limit).map_err(|e| {
            ApplicationError::Configuration(format!("nearest.default_limit: {e}"))
        })
    }
}

/// `[travel_time]` section
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelTimeConfig {
    /// Average bus speed in km per minute
    #[serde(default = "default_speed")]
    pub speed_km_per_min: f64,
}

const fn default_speed() -> f64 {
    DEFAULT_SPEED_KM_PER_MIN
}

impl Default for TravelTimeConfig {
    fn default() -> Self {
        Self {
            speed_km_per_min: default_speed(),
        }
    }
}

impl TravelTimeConfig {
    /// Validated travel time options
    pub fn travel_time_options(&self) -> Result<TravelTimeOptions, ApplicationError> {
        TravelTimeOptions::new(self.speed_km_per_min).map_err(|e| {
            ApplicationError::Configuration(format!("travel_time.speed_km_per_min: {e}"))
        })
    }
}
