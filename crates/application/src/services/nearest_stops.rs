//! Nearest bus stop ranking
//!
//! Pure functions that rank an in-memory list of stops by great-circle
//! distance from a query point.

use std::cmp::Ordering;

use domain::{BusStop, GeoPoint, RankedBusStop, distance};
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// Number of stops returned when the caller does not ask for a specific limit
pub const DEFAULT_NEAREST_LIMIT: usize = 5;

/// Tunables for nearest-stop ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingOptions {
    limit: usize,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_NEAREST_LIMIT,
        }
    }
}

impl RankingOptions {
    /// Create ranking options with a custom result limit
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `limit` is zero.
    pub fn new(limit: usize) -> Result<Self, ApplicationError> {
        validate_limit(limit)?;
        Ok(Self { limit })
    }

    /// Maximum number of stops to return
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }
}

fn validate_limit(limit: usize) -> Result<(), ApplicationError> {
    if limit == 0 {
        return Err(ApplicationError::invalid_argument(
            "limit must be at least 1",
        ));
    }
    Ok(())
}

/// Reject query points outside the valid coordinate ranges
pub(crate) fn validate_query(query: &GeoPoint) -> Result<(), ApplicationError> {
    if !query.is_valid() {
        return Err(ApplicationError::invalid_argument(format!(
            "query point ({query}) is outside the valid coordinate ranges"
        )));
    }
    Ok(())
}

/// Ascending distance order with every NaN last, whatever its sign bit
fn by_distance(a: f64, b: f64) -> Ordering {
    a.is_nan().cmp(&b.is_nan()).then(a.total_cmp(&b))
}

/// Rank `stops` by distance from `query`, nearest first, keeping at most `limit`
///
/// Stops at equal distance keep their input order. An empty input yields an
/// empty result; a limit larger than the input returns every stop.
///
/// # Errors
///
/// Returns `InvalidArgument` if `limit` is zero or `query` lies outside the
/// valid coordinate ranges.
pub fn nearest(
    stops: &[BusStop],
    query: &GeoPoint,
    limit: usize,
) -> Result<Vec<RankedBusStop>, ApplicationError> {
    validate_limit(limit)?;
    validate_query(query)?;

    let mut distances: Vec<(usize, f64)> = stops
        .iter()
        .enumerate()
        .map(|(index, stop)| (index, distance(query, &stop.location)))
        .collect();

    // sort_by is stable, so equal distances keep input order
    distances.sort_by(|a, b| by_distance(a.1, b.1));
    distances.truncate(limit);

    Ok(distances
        .into_iter()
        .map(|(index, distance_km)| RankedBusStop {
            stop: stops[index].clone(),
            distance_km,
        })
        .collect())
}
