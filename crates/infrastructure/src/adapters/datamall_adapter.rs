//! DataMall adapter - Implements TransitDataPort using integration_datamall

use std::sync::Arc;

use application::{error::ApplicationError, ports::TransitDataPort};
use async_trait::async_trait;
use chrono::DateTime;
use domain::{
    BusArrival, BusStop, CarParkAvailability, GeoPoint, NextBus, RouteRecord, ServiceArrival,
};
use integration_datamall::{
    ArrivalService, BusArrivalResponse, BusRouteRecord, BusStopRecord, CarParkRecord,
    DataMallClient, DataMallConfig, DataMallError, HttpDataMallClient, NextBusInfo,
};
use tracing::{debug, instrument, warn};

/// Adapter for LTA DataMall
pub struct DataMallAdapter {
    client: Arc<dyn DataMallClient>,
}

impl std::fmt::Debug for DataMallAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataMallAdapter")
            .field("client", &"DataMallClient")
            .finish()
    }
}

impl DataMallAdapter {
    /// Wrap an existing client
    pub fn new(client: Arc<dyn DataMallClient>) -> Self {
        Self { client }
    }

    /// Build an adapter backed by [`HttpDataMallClient`]
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if the client cannot be built.
    pub fn from_config(config: &DataMallConfig) -> Result<Self, ApplicationError> {
        let client = HttpDataMallClient::new(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self::new(Arc::new(client)))
    }

    /// Map a client error, keeping transient failures apart from permanent ones
    fn map_error(what: &str, error: &DataMallError) -> ApplicationError {
        let message = format!("Failed to fetch {what}: {error}");
        match error {
            DataMallError::Unauthorized { .. } => ApplicationError::NotAuthorized(message),
            e if e.is_retryable() => ApplicationError::DataUnavailable(message),
            _ => ApplicationError::ExternalService(message),
        }
    }

    fn convert_bus_stop(record: BusStopRecord) -> BusStop {
        BusStop::new(
            record.bus_stop_code,
            GeoPoint::new_unchecked(record.latitude, record.longitude),
        )
        .with_road_name(record.road_name)
        .with_description(record.description)
    }

    fn convert_route(record: BusRouteRecord) -> RouteRecord {
        RouteRecord {
            distance_along_route: record.distance.unwrap_or(0.0),
            operator: record.operator,
            direction: record.direction,
            stop_sequence: record.stop_sequence,
            ..RouteRecord::new(record.bus_stop_code, record.service_no, 0.0)
        }
    }

    fn convert_arrival(response: BusArrivalResponse) -> BusArrival {
        BusArrival {
            bus_stop_code: response.bus_stop_code,
            services: response
                .services
                .into_iter()
                .map(Self::convert_service)
                .collect(),
        }
    }

    fn convert_service(service: ArrivalService) -> ServiceArrival {
        let next_buses = service
            .buses()
            .into_iter()
            .map(Self::convert_next_bus)
            .collect();
        ServiceArrival {
            service_no: service.service_no,
            operator: service.operator,
            next_buses,
        }
    }

    fn convert_next_bus(info: &NextBusInfo) -> NextBus {
        let estimated_arrival = if info.is_empty() {
            None
        } else {
            DateTime::parse_from_rfc3339(info.estimated_arrival.trim())
                .inspect_err(|e| {
                    warn!(value = %info.estimated_arrival, error = %e, "Unparsable EstimatedArrival");
                })
                .ok()
        };

        NextBus {
            estimated_arrival,
            load: non_empty(&info.load),
            feature: non_empty(&info.feature),
            bus_type: non_empty(&info.bus_type),
        }
    }

    fn convert_car_park(record: CarParkRecord) -> CarParkAvailability {
        CarParkAvailability {
            location: parse_location(&record.location),
            car_park_id: record.car_park_id,
            area: record.area,
            development: record.development,
            available_lots: record.available_lots,
            lot_type: record.lot_type,
            agency: record.agency,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Parse a `"lat lon"` pair; anything else yields `None`
fn parse_location(value: &str) -> Option<GeoPoint> {
    let mut parts = value.split_whitespace();
    let latitude = parts.next()?.parse().ok()?;
    let longitude = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    GeoPoint::new(latitude, longitude).ok()
}

#[async_trait]
impl TransitDataPort for DataMallAdapter {
    #[instrument(skip(self))]
    async fn fetch_bus_stops(&self) -> Result<Vec<BusStop>, ApplicationError> {
        let records = self
            .client
            .get_bus_stops()
            .await
            .map_err(|e| Self::map_error("bus stops", &e))?;

        debug!(count = records.len(), "Converting bus stops");
        Ok(records.into_iter().map(Self::convert_bus_stop).collect())
    }

    #[instrument(skip(self))]
    async fn fetch_bus_routes(&self) -> Result<Vec<RouteRecord>, ApplicationError> {
        let records = self
            .client
            .get_bus_routes()
            .await
            .map_err(|e| Self::map_error("bus routes", &e))?;

        let missing = records.iter().filter(|r| r.distance.is_none()).count();
        if missing > 0 {
            debug!(missing, "Route records without distance treated as 0.0");
        }
        Ok(records.into_iter().map(Self::convert_route).collect())
    }

    #[instrument(skip(self))]
    async fn fetch_bus_arrival(
        &self,
        bus_stop_code: &str,
        service_no: Option<String>,
    ) -> Result<BusArrival, ApplicationError> {
        let response = self
            .client
            .get_bus_arrival(bus_stop_code, service_no.as_deref())
            .await
            .map_err(|e| Self::map_error("bus arrival", &e))?;

        Ok(Self::convert_arrival(response))
    }

    #[instrument(skip(self))]
    async fn fetch_car_park_availability(
        &self,
    ) -> Result<Vec<CarParkAvailability>, ApplicationError> {
        let records = self
            .client
            .get_car_park_availability()
            .await
            .map_err(|e| Self::map_error("car park availability", &e))?;

        Ok(records.into_iter().map(Self::convert_car_park).collect())
    }
}
