//! Geographic point value object

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Mean Earth radius used by the Haversine formula, in kilometres
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A geographic point with latitude and longitude in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees (-90 to 90)
    latitude: f64,
    /// Longitude in degrees (-180 to 180)
    longitude: f64,
}

impl GeoPoint {
    /// Create a new point with validation
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` if latitude is not in [-90, 90]
    /// or longitude is not in [-180, 180] (NaN is never in range).
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        let point = Self::new_unchecked(latitude, longitude);
        if !point.is_valid() {
            return Err(DomainError::invalid_coordinates(latitude, longitude));
        }
        Ok(point)
    }

    /// Create a point without validation (for trusted sources such as API data)
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Get the latitude
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Get the longitude
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Whether both coordinates are inside their valid ranges
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance to another point in kilometres
    ///
    /// Uses the Haversine formula. Coordinates are not validated; NaN inputs
    /// yield NaN.
    #[must_use]
    pub fn distance_km(&self, other: &Self) -> f64 {
        let lat1_rad = self.latitude.to_radians();
        let lat2_rad = other.latitude.to_radians();
        let delta_lat = (other.latitude - self.latitude).to_radians();
        let delta_lon = (other.longitude - self.longitude).to_radians();

        let a = (lat1_rad.cos() * lat2_rad.cos()).mul_add(
            (delta_lon / 2.0).sin().powi(2),
            (delta_lat / 2.0).sin().powi(2),
        )
        // rounding can leave `a` slightly above 1 for near-antipodal pairs
        .clamp(0.0, 1.0);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }
}

/// Great-circle distance between two points in kilometres
///
/// Free-function form of [`GeoPoint::distance_km`].
#[must_use]
pub fn distance(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    p1.distance_km(p2)
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Well-known reference points
impl GeoPoint {
    /// Singapore city centre
    #[must_use]
    pub const fn singapore() -> Self {
        Self::new_unchecked(1.3521, 103.8198)
    }

    /// Singapore Changi Airport area
    #[must_use]
    pub const fn changi() -> Self {
        Self::new_unchecked(1.3644, 103.9915)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinates() {
        let point = GeoPoint::new(1.3521, 103.8198).expect("valid coordinates");
        assert!((point.latitude() - 1.3521).abs() < f64::EPSILON);
        assert!((point.longitude() - 103.8198).abs() < f64::EPSILON);
    }

    #[test]
    fn test_boundary_coordinates() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
        assert!(GeoPoint::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn test_invalid_latitude() {
        assert!(GeoPoint::new(91.0, 0.0).is_err());
        assert!(GeoPoint::new(-91.0, 0.0).is_err());
    }

    #[test]
    fn test_invalid_longitude() {
        assert!(GeoPoint::new(0.0, 181.0).is_err());
        assert!(GeoPoint::new(0.0, -181.0).is_err());
    }

    #[test]
    fn test_nan_is_invalid() {
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(!GeoPoint::new_unchecked(0.0, f64::NAN).is_valid());
    }

    #[test]
    fn test_display() {
        let point = GeoPoint::new(1.3521, 103.8198).expect("valid");
        assert_eq!(point.to_string(), "1.352100, 103.819800");
    }

    #[test]
    fn test_distance_same_point() {
        let point = GeoPoint::singapore();
        assert!(point.distance_km(&point).abs() < f64::EPSILON);
    }

    #[test]
    fn test_distance_city_to_changi() {
        let distance = distance(&GeoPoint::singapore(), &GeoPoint::changi());
        assert!((distance - 19.2).abs() < 0.5, "got {distance}");
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = GeoPoint::singapore();
        let b = GeoPoint::changi();
        let d1 = a.distance_km(&b);
        let d2 = b.distance_km(&a);
        assert!((d1 - d2).abs() <= d1 * 1e-9);
    }

    #[test]
    fn test_distance_quarter_meridian() {
        let equator = GeoPoint::new_unchecked(0.0, 0.0);
        let pole = GeoPoint::new_unchecked(90.0, 0.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2;
        assert!((equator.distance_km(&pole) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_distance_antipodes_is_never_nan() {
        for step in 0..=1800 {
            let lat = -90.0 + f64::from(step) * 0.1;
            let a = GeoPoint::new_unchecked(lat, -131.4);
            let b = GeoPoint::new_unchecked(-lat, 48.6);
            let d = a.distance_km(&b);
            assert!(!d.is_nan(), "NaN distance between {a} and {b}");
            assert!(d <= EARTH_RADIUS_KM * std::f64::consts::PI);
        }
    }

    #[test]
    fn test_distance_nan_propagates() {
        let a = GeoPoint::new_unchecked(f64::NAN, 0.0);
        assert!(a.distance_km(&GeoPoint::singapore()).is_nan());
    }

    #[test]
    fn test_serialization() {
        let point = GeoPoint::new(1.3521, 103.8198).expect("valid");
        let json = serde_json::to_string(&point).expect("serialize");
        assert!(json.contains("1.3521"));
        assert!(json.contains("103.8198"));

        let deserialized: GeoPoint = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(point, deserialized);
    }
}
