//! Transit data port
//!
//! Defines how the application obtains bus stops, routes, arrivals, and car
//! park availability. Adapters in the infrastructure layer implement this port
//! against the remote open-data API; the computations in
//! [`crate::services`] only ever see the already-fetched collections.

use async_trait::async_trait;
use domain::{BusArrival, BusStop, CarParkAvailability, RouteRecord};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for fetching transit datasets
///
/// Methods fail with [`ApplicationError::DataUnavailable`] for transient
/// upstream failures, [`ApplicationError::NotAuthorized`] when the account key
/// is rejected and [`ApplicationError::ExternalService`] for unusable
/// responses. An empty collection is a valid answer, not an error.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TransitDataPort: Send + Sync {
    /// Fetch every bus stop in the network
    async fn fetch_bus_stops(&self) -> Result<Vec<BusStop>, ApplicationError>;

    /// Fetch every (service, stop) waypoint of every bus route
    async fn fetch_bus_routes(&self) -> Result<Vec<RouteRecord>, ApplicationError>;

    /// Fetch real-time arrival predictions at a stop, optionally for one service
    async fn fetch_bus_arrival(
        &self,
        bus_stop_code: &str,
        service_no: Option<String>,
    ) -> Result<BusArrival, ApplicationError>;

    /// Fetch current car park availability
    async fn fetch_car_park_availability(
        &self,
    ) -> Result<Vec<CarParkAvailability>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn TransitDataPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn TransitDataPort>();
    }
}
