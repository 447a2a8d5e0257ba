//! Real-time bus arrival entities

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Arrival predictions for the services calling at one stop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusArrival {
    /// Stop the predictions refer to
    pub bus_stop_code: String,
    /// One entry per service in operation at the stop
    pub services: Vec<ServiceArrival>,
}

impl BusArrival {
    /// Look up the predictions for one service
    #[must_use]
    pub fn service(&self, service_no: &str) -> Option<&ServiceArrival> {
        self.services.iter().find(|s| s.service_no == service_no)
    }
}

/// Arrival predictions for a single service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceArrival {
    /// Service number
    pub service_no: String,
    /// Operator code
    pub operator: String,
    /// Up to three upcoming buses, nearest first
    pub next_buses: Vec<NextBus>,
}

impl ServiceArrival {
    /// The n-th upcoming bus (0-based)
    #[must_use]
    pub fn nth_bus(&self, index: usize) -> Option<&NextBus> {
        self.next_buses.get(index)
    }
}

/// Prediction for one upcoming bus
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextBus {
    /// Estimated arrival time (None when no prediction is available)
    pub estimated_arrival: Option<DateTime<FixedOffset>>,
    /// Crowding level: "SEA" (seats), "SDA" (standing), "LSD" (limited standing)
    pub load: Option<String>,
    /// "WAB" when wheelchair accessible
    pub feature: Option<String>,
    /// "SD" single deck, "DD" double deck, "BD" bendy
    pub bus_type: Option<String>,
}
