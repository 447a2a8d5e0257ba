//! Car park availability entity

use serde::{Deserialize, Serialize};

use crate::value_objects::GeoPoint;

/// Available lots at one car park for one lot type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarParkAvailability {
    /// Car park identifier
    pub car_park_id: String,
    /// Area name (may be empty)
    pub area: String,
    /// Development or building name
    pub development: String,
    /// Car park position, when published
    pub location: Option<GeoPoint>,
    /// Number of lots currently available
    pub available_lots: u32,
    /// "C" cars, "H" heavy vehicles, "Y" motorcycles
    pub lot_type: String,
    /// Operating agency ("HDB", "LTA", "URA")
    pub agency: String,
}

impl CarParkAvailability {
    /// Human-readable lot type
    #[must_use]
    pub fn lot_type_label(&self) -> &str {
        match self.lot_type.as_str() {
            "C" => "Cars",
            "H" => "Heavy Vehicles",
            "Y" => "Motorcycles",
            other => other,
        }
    }
}
