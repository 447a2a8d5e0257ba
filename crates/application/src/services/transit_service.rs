//! Transit service
//!
//! Fetches datasets through the [`TransitDataPort`] and hands them to the
//! pure ranking and estimation functions.

use std::{fmt, sync::Arc};

use domain::{BusArrival, CarParkAvailability, GeoPoint, RankedBusStop, TravelEstimate};
use tracing::{debug, info, instrument};

use crate::{
    error::ApplicationError,
    ports::TransitDataPort,
    services::{
        RankingOptions, TravelTimeOptions, estimate_travel_time, nearest,
        nearest_stops::validate_query,
    },
};

/// Use cases of the command-line client
pub struct TransitService {
    data_port: Arc<dyn TransitDataPort>,
    ranking: RankingOptions,
    travel_time: TravelTimeOptions,
}

impl fmt::Debug for TransitService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitService")
            .field("ranking", &self.ranking)
            .field("travel_time", &self.travel_time)
            .finish_non_exhaustive()
    }
}

impl TransitService {
    /// Create a new transit service with default tunables
    pub fn new(data_port: Arc<dyn TransitDataPort>) -> Self {
        Self {
            data_port,
            ranking: RankingOptions::default(),
            travel_time: TravelTimeOptions::default(),
        }
    }

    /// Override the ranking options
    #[must_use]
    pub fn with_ranking(mut self, ranking: RankingOptions) -> Self {
        self.ranking = ranking;
        self
    }

    /// Override the travel time options
    #[must_use]
    pub fn with_travel_time(mut self, travel_time: TravelTimeOptions) -> Self {
        self.travel_time = travel_time;
        self
    }

    /// Bus stops nearest to `query`
    ///
    /// `limit` falls back to the configured default when `None`. Arguments are
    /// checked before any data is fetched.
    #[instrument(skip(self))]
    pub async fn nearest_bus_stops(
        &self,
        query: GeoPoint,
        limit: Option<usize>,
    ) -> Result<Vec<RankedBusStop>, ApplicationError> {
        let limit = match limit {
            Some(limit) => RankingOptions::new(limit)?.limit(),
            None => self.ranking.limit(),
        };
        validate_query(&query)?;

        let stops = self.data_port.fetch_bus_stops().await?;
        debug!(count = stops.len(), "Fetched bus stops");

        let ranked = nearest(&stops, &query, limit)?;
        info!(returned = ranked.len(), "Ranked nearest bus stops");
        Ok(ranked)
    }

    /// Travel estimates for every service shared by two stops
    #[instrument(skip(self))]
    pub async fn bus_travel_time(
        &self,
        from_stop: &str,
        to_stop: &str,
    ) -> Result<Vec<TravelEstimate>, ApplicationError> {
        require_stop_code(from_stop)?;
        require_stop_code(to_stop)?;

        let routes = self.data_port.fetch_bus_routes().await?;
        debug!(count = routes.len(), "Fetched bus routes");

        let estimates = estimate_travel_time(&routes, from_stop, to_stop, &self.travel_time);
        info!(services = estimates.len(), "Estimated travel time");
        Ok(estimates)
    }

    /// Real-time arrivals at a stop, optionally for one service
    #[instrument(skip(self))]
    pub async fn bus_arrival(
        &self,
        bus_stop_code: &str,
        service_no: Option<&str>,
    ) -> Result<BusArrival, ApplicationError> {
        require_stop_code(bus_stop_code)?;
        if service_no.is_some_and(|s| s.trim().is_empty()) {
            return Err(ApplicationError::invalid_argument(
                "service number must not be empty",
            ));
        }

        self.data_port
            .fetch_bus_arrival(bus_stop_code, service_no.map(str::to_string))
            .await
    }

    /// Current car park availability
    #[instrument(skip(self))]
    pub async fn parking_availability(
        &self,
    ) -> Result<Vec<CarParkAvailability>, ApplicationError> {
        let car_parks = self.data_port.fetch_car_park_availability().await?;
        info!(count = car_parks.len(), "Fetched car park availability");
        Ok(car_parks)
    }
}

fn require_stop_code(code: &str) -> Result<(), ApplicationError> {
    if code.trim().is_empty() {
        return Err(ApplicationError::invalid_argument(
            "bus stop code must not be empty",
        ));
    }
    Ok(())
}
