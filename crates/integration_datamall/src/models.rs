//! DataMall response models
//!
//! Typed representations of the JSON documents returned by the DataMall
//! OData endpoints. Field names follow the API's PascalCase wire format.

use serde::{Deserialize, Serialize};

/// One page of an OData collection (`{ "value": [...] }`)
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ODataPage<T> {
    #[serde(default = "Vec::new")]
    pub(crate) value: Vec<T>,
}

/// A bus stop record from `/BusStops`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusStopRecord {
    /// Five-digit stop code
    pub bus_stop_code: String,
    /// Road the stop is on
    #[serde(default)]
    pub road_name: String,
    /// Landmark description
    #[serde(default)]
    pub description: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// A route waypoint from `/BusRoutes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusRouteRecord {
    /// Service number
    pub service_no: String,
    /// Operator code
    #[serde(default)]
    pub operator: String,
    /// Route direction (1 or 2)
    #[serde(default = "default_direction")]
    pub direction: u8,
    /// Position of the stop within the route
    #[serde(default)]
    pub stop_sequence: u32,
    /// Stop code
    pub bus_stop_code: String,
    /// Kilometres from the route origin (occasionally null)
    #[serde(default)]
    pub distance: Option<f64>,
}

const fn default_direction() -> u8 {
    1
}

/// Response of `/BusArrivalv2`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BusArrivalResponse {
    /// Stop the predictions refer to
    pub bus_stop_code: String,
    /// Services in operation at the stop
    #[serde(default)]
    pub services: Vec<ArrivalService>,
}

/// Arrival predictions for one service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArrivalService {
    /// Service number
    pub service_no: String,
    /// Operator code
    #[serde(default)]
    pub operator: String,
    /// Next bus
    #[serde(default)]
    pub next_bus: NextBusInfo,
    /// Second bus
    #[serde(default, rename = "NextBus2")]
    pub next_bus2: NextBusInfo,
    /// Third bus
    #[serde(default, rename = "NextBus3")]
    pub next_bus3: NextBusInfo,
}

impl ArrivalService {
    /// The three prediction slots, nearest first
    #[must_use]
    pub fn buses(&self) -> [&NextBusInfo; 3] {
        [&self.next_bus, &self.next_bus2, &self.next_bus3]
    }
}

/// One prediction slot; every field is an empty string when no bus is expected
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NextBusInfo {
    /// RFC 3339 arrival estimate, or empty
    pub estimated_arrival: String,
    /// "SEA", "SDA", "LSD" or empty
    pub load: String,
    /// "WAB" or empty
    pub feature: String,
    /// "SD", "DD", "BD" or empty
    #[serde(rename = "Type")]
    pub bus_type: String,
}

impl NextBusInfo {
    /// Whether the slot carries no prediction
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.estimated_arrival.trim().is_empty()
    }
}

/// A car park record from `/CarParkAvailabilityv2`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CarParkRecord {
    /// Car park identifier
    #[serde(rename = "CarParkID")]
    pub car_park_id: String,
    /// Area name
    #[serde(default)]
    pub area: String,
    /// Development name
    #[serde(default)]
    pub development: String,
    /// "lat lon" separated by a space, or empty
    #[serde(default)]
    pub location: String,
    /// Available lots
    #[serde(default)]
    pub available_lots: u32,
    /// "C", "H" or "Y"
    #[serde(default)]
    pub lot_type: String,
    /// "HDB", "LTA" or "URA"
    #[serde(default)]
    pub agency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bus_stop_page() {
        let json = r#"{
            "odata.metadata": "http://datamall2.mytransport.sg/ltaodataservice/$metadata#BusStops",
            "value": [{
                "BusStopCode": "01012",
                "RoadName": "Victoria St",
                "Description": "Hotel Grand Pacific",
                "Latitude": 1.29684825487647,
                "Longitude": 103.85253591654006
            }]
        }"#;
        let page: ODataPage<BusStopRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(page.value.len(), 1);
        assert_eq!(page.value[0].bus_stop_code, "01012");
        assert_eq!(page.value[0].road_name, "Victoria St");
    }

    #[test]
    fn test_bus_route_with_null_distance() {
        let json = r#"{
            "ServiceNo": "10",
            "Operator": "SBST",
            "Direction": 2,
            "StopSequence": 7,
            "BusStopCode": "75009",
            "Distance": null,
            "WD_FirstBus": "0500",
            "WD_LastBus": "2300"
        }"#;
        let route: BusRouteRecord = serde_json::from_str(json).unwrap();
        assert_eq!(route.direction, 2);
        assert_eq!(route.stop_sequence, 7);
        assert!(route.distance.is_none());
    }

    #[test]
    fn test_arrival_with_empty_slots() {
        let json = r#"{
            "BusStopCode": "83139",
            "Services": [{
                "ServiceNo": "15",
                "Operator": "GAS",
                "NextBus": {
                    "OriginCode": "77009",
                    "DestinationCode": "77131",
                    "EstimatedArrival": "2026-10-17T08:12:30+08:00",
                    "Monitored": 1,
                    "Latitude": "1.3168",
                    "Longitude": "103.9065",
                    "VisitNumber": "1",
                    "Load": "SEA",
                    "Feature": "WAB",
                    "Type": "DD"
                },
                "NextBus2": {
                    "OriginCode": "", "DestinationCode": "", "EstimatedArrival": "",
                    "Latitude": "", "Longitude": "", "VisitNumber": "",
                    "Load": "", "Feature": "", "Type": ""
                }
            }]
        }"#;
        let arrival: BusArrivalResponse = serde_json::from_str(json).unwrap();
        let service = &arrival.services[0];
        assert_eq!(service.next_bus.bus_type, "DD");
        assert!(!service.next_bus.is_empty());
        assert!(service.next_bus2.is_empty());
        assert!(service.next_bus3.is_empty());
        assert_eq!(service.buses().len(), 3);
    }

    #[test]
    fn test_car_park_record() {
        let json = r#"{
            "CarParkID": "1",
            "Area": "Marina",
            "Development": "Suntec City",
            "Location": "1.29375 103.85718",
            "AvailableLots": 1133,
            "LotType": "C",
            "Agency": "LTA"
        }"#;
        let car_park: CarParkRecord = serde_json::from_str(json).unwrap();
        assert_eq!(car_park.car_park_id, "1");
        assert_eq!(car_park.available_lots, 1133);
        assert_eq!(car_park.location, "1.29375 103.85718");
    }
}
