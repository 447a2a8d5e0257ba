//! Application services - Use case implementations

mod nearest_stops;
mod transit_service;
mod travel_time;

pub use nearest_stops::{DEFAULT_NEAREST_LIMIT, RankingOptions, nearest};
pub use transit_service::TransitService;
pub use travel_time::{DEFAULT_SPEED_KM_PER_MIN, TravelTimeOptions, estimate_travel_time};
