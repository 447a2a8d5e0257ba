//! LTA DataMall integration for lta-cli
//!
//! Client for the Singapore Land Transport Authority
//! [DataMall](https://datamall.lta.gov.sg) open-data API. Every request carries
//! the static `AccountKey` credential from [`DataMallConfig`].
//!
//! # Architecture
//!
//! [`DataMallClient`] defines the interface for the four datasets the CLI
//! uses, implemented by [`HttpDataMallClient`]. Collection endpoints are paged
//! by the API in blocks of 500 records; the client follows `$skip` until the
//! dataset is exhausted. Response types in [`models`] mirror the wire format
//! and are converted to domain entities by the infrastructure layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_datamall::{DataMallClient, DataMallConfig, HttpDataMallClient};
//!
//! let config = DataMallConfig::with_api_key("my-account-key");
//! let client = HttpDataMallClient::new(&config)?;
//!
//! let arrival = client.get_bus_arrival("83139", Some("15")).await?;
//! ```

mod client;
mod config;
mod error;
pub mod models;

pub use client::{DataMallClient, HttpDataMallClient};
pub use config::{DATAMALL_PAGE_SIZE, DataMallConfig};
pub use error::DataMallError;
pub use models::{
    ArrivalService, BusArrivalResponse, BusRouteRecord, BusStopRecord, CarParkRecord, NextBusInfo,
};
