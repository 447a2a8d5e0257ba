//! DataMall HTTP client
//!
//! Talks to the LTA DataMall OData endpoints with the account key attached to
//! every request.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderName, HeaderValue},
};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::config::DataMallConfig;
use crate::error::DataMallError;
use crate::models::{BusArrivalResponse, BusRouteRecord, BusStopRecord, CarParkRecord, ODataPage};

/// Credential header expected by every DataMall endpoint
const ACCOUNT_KEY: HeaderName = HeaderName::from_static("accountkey");

/// Trait for DataMall clients
#[async_trait]
pub trait DataMallClient: Send + Sync {
    /// Every bus stop in the network
    async fn get_bus_stops(&self) -> Result<Vec<BusStopRecord>, DataMallError>;

    /// Every (service, stop) waypoint of every bus route
    async fn get_bus_routes(&self) -> Result<Vec<BusRouteRecord>, DataMallError>;

    /// Real-time arrivals at a stop, optionally restricted to one service
    async fn get_bus_arrival(
        &self,
        bus_stop_code: &str,
        service_no: Option<&str>,
    ) -> Result<BusArrivalResponse, DataMallError>;

    /// Available lots for every car park
    async fn get_car_park_availability(&self) -> Result<Vec<CarParkRecord>, DataMallError>;
}

/// reqwest-based DataMall client
#[derive(Debug)]
pub struct HttpDataMallClient {
    client: Client,
    config: DataMallConfig,
}

impl HttpDataMallClient {
    /// Create a new DataMall client
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if the configuration is invalid or the
    /// account key is not a valid header value, `ConnectionFailed` if the
    /// HTTP client cannot be initialized.
    pub fn new(config: &DataMallConfig) -> Result<Self, DataMallError> {
        config.validate().map_err(DataMallError::ConfigurationError)?;

        let api_key = config.api_key.as_ref().ok_or_else(|| {
            DataMallError::ConfigurationError("api_key is required".to_string())
        })?;
        let mut account_key = HeaderValue::from_str(api_key.expose_secret()).map_err(|_| {
            DataMallError::ConfigurationError(
                "api_key contains characters not allowed in an HTTP header".to_string(),
            )
        })?;
        account_key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCOUNT_KEY, account_key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("lta-cli/", env!("CARGO_PKG_VERSION")))
            .default_headers(headers)
            .build()
            .map_err(|e| DataMallError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
        })
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.config.base_url.trim_end_matches('/'))
    }

    /// Issue a GET and return the body of a successful response
    async fn get_body(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<String, DataMallError> {
        let url = self.endpoint_url(endpoint);
        debug!(%url, ?params, "DataMall request");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DataMallError::Timeout {
                        timeout_secs: self.config.timeout_secs,
                    }
                } else {
                    DataMallError::ConnectionFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(DataMallError::Unauthorized {
                status: status.as_u16(),
            });
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(DataMallError::RateLimitExceeded {
                retry_after_secs: response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse().ok()),
            });
        }

        if !status.is_success() {
            return Err(DataMallError::RequestFailed(format!("HTTP {status}")));
        }

        response
            .text()
            .await
            .map_err(|e| DataMallError::ParseError(e.to_string()))
    }

    /// Fetch a whole OData collection, following `$skip` page by page
    async fn get_collection<T>(&self, endpoint: &str) -> Result<Vec<T>, DataMallError>
    where
        T: DeserializeOwned + Send,
    {
        let mut records = Vec::new();

        for page in 0..self.config.max_pages {
            let skip = page * self.config.page_size;
            let body = self
                .get_body(endpoint, &[("$skip", skip.to_string())])
                .await?;
            let batch: Vec<T> = Self::parse_page(&body)?;
            let fetched = batch.len();
            records.extend(batch);

            debug!(endpoint, skip, fetched, "Fetched page");
            if fetched < self.config.page_size {
                return Ok(records);
            }
        }

        warn!(
            endpoint,
            max_pages = self.config.max_pages,
            total = records.len(),
            "Stopped paging at the configured page limit; result may be incomplete"
        );
        Ok(records)
    }

    /// Parse one `{ "value": [...] }` page
    fn parse_page<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, DataMallError> {
        let page: ODataPage<T> =
            serde_json::from_str(body).map_err(|e| DataMallError::ParseError(e.to_string()))?;
        Ok(page.value)
    }

    /// Parse a bus arrival document
    fn parse_arrival(body: &str) -> Result<BusArrivalResponse, DataMallError> {
        serde_json::from_str(body).map_err(|e| DataMallError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl DataMallClient for HttpDataMallClient {
    #[instrument(skip(self))]
    async fn get_bus_stops(&self) -> Result<Vec<BusStopRecord>, DataMallError> {
        let stops = self.get_collection("BusStops").await?;
        debug!(count = stops.len(), "Bus stops fetched");
        Ok(stops)
    }

    #[instrument(skip(self))]
    async fn get_bus_routes(&self) -> Result<Vec<BusRouteRecord>, DataMallError> {
        let routes = self.get_collection("BusRoutes").await?;
        debug!(count = routes.len(), "Bus routes fetched");
        Ok(routes)
    }

    #[instrument(skip(self))]
    async fn get_bus_arrival(
        &self,
        bus_stop_code: &str,
        service_no: Option<&str>,
    ) -> Result<BusArrivalResponse, DataMallError> {
        let mut params = vec![("BusStopCode", bus_stop_code.to_string())];
        if let Some(service_no) = service_no {
            params.push(("ServiceNo", service_no.to_string()));
        }

        let body = self.get_body("BusArrivalv2", &params).await?;
        let arrival = Self::parse_arrival(&body)?;

        if arrival.services.is_empty() {
            warn!("No services in operation at this stop");
        }
        Ok(arrival)
    }

    #[instrument(skip(self))]
    async fn get_car_park_availability(&self) -> Result<Vec<CarParkRecord>, DataMallError> {
        let car_parks = self.get_collection("CarParkAvailabilityv2").await?;
        debug!(count = car_parks.len(), "Car parks fetched");
        Ok(car_parks)
    }
}
