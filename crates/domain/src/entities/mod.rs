//! Entities - Transit records fetched for a single command invocation

mod bus_arrival;
mod bus_stop;
mod car_park;
mod route;

pub use bus_arrival::{BusArrival, NextBus, ServiceArrival};
pub use bus_stop::{BusStop, RankedBusStop};
pub use car_park::CarParkAvailability;
pub use route::{RouteRecord, TravelEstimate};
