//! Plain-text rendering of command results

use std::fmt::{Display, Write};

use application::ApplicationError;
use chrono::TimeZone;
use domain::{BusArrival, CarParkAvailability, NextBus, RankedBusStop, TravelEstimate};

/// Printed when two stops share no service
pub const NO_DIRECT_SERVICE: &str = "No direct bus service found between the two bus stops.";

/// Printed when the stop dataset is empty
pub const NO_BUS_STOPS: &str = "No bus stops found.";

/// Printed after a failure that may clear up on its own
pub const RETRY_HINT: &str = "DataMall may be temporarily unavailable; retrying the command may help.";

/// Printed after DataMall rejects the account key
pub const ACCOUNT_KEY_HINT: &str =
    "Check the DataMall account key (datamall.api_key or LTA_DATAMALL__API_KEY).";

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn arrival_line<Tz>(label: &str, bus: Option<&NextBus>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match bus.and_then(|b| b.estimated_arrival) {
        Some(at) => format!(
            "{label}: {}",
            at.with_timezone(tz).format(TIME_FORMAT)
        ),
        None => format!("{label}: Not available"),
    }
}

/// Next two arrivals of one service, rendered in `tz`
pub fn format_bus_arrival<Tz>(
    arrival: &BusArrival,
    bus_stop_code: &str,
    service_no: &str,
    tz: &Tz,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    let _ = writeln!(out, "Bus Service No: {service_no}");
    let _ = writeln!(out, "Bus Stop Code: {bus_stop_code}");

    let Some(service) = arrival.service(service_no) else {
        let _ = writeln!(
            out,
            "Service {service_no} is not in operation at this bus stop."
        );
        return out;
    };

    out.push_str(&arrival_line("Next Bus Arrival", service.nth_bus(0), tz));
    out.push('\n');
    out.push_str(&arrival_line("Next Bus 2 Arrival", service.nth_bus(1), tz));
    out.push('\n');
    out
}

/// Table of car park availability
pub fn format_parking_availability(car_parks: &[CarParkAvailability]) -> String {
    if car_parks.is_empty() {
        return "No car park information available.\n".to_string();
    }

    let width = car_parks
        .iter()
        .map(|c| c.development.chars().count())
        .max()
        .unwrap_or(0)
        .max("Development".len());

    let mut out = String::from("Parking Availability:\n");
    let _ = writeln!(
        out,
        "{:<width$}  {:<12}  {:<14}  {:>9}  {}",
        "Development", "Area", "Lot Type", "Available", "Agency"
    );
    for car_park in car_parks {
        let _ = writeln!(
            out,
            "{:<width$}  {:<12}  {:<14}  {:>9}  {}",
            car_park.development,
            car_park.area,
            car_park.lot_type_label(),
            car_park.available_lots,
            car_park.agency
        );
    }
    out
}

/// One block per shared service, or the no-direct-service message
pub fn format_travel_times(from_stop: &str, to_stop: &str, estimates: &[TravelEstimate]) -> String {
    if estimates.is_empty() {
        return format!("{NO_DIRECT_SERVICE}\n");
    }

    let mut out = format!("Travel time between bus stops {from_stop} and {to_stop}:\n");
    for estimate in estimates {
        let _ = writeln!(out, "Bus Service No: {}", estimate.service_no);
        let _ = writeln!(out, "Distance: {:.2} km", estimate.distance_km);
        let _ = writeln!(
            out,
            "Estimated Time: {:.2} minutes",
            estimate.estimated_minutes
        );
        out.push('\n');
    }
    out
}

/// Ranked stops, nearest first
pub fn format_nearest_stops(ranked: &[RankedBusStop]) -> String {
    if ranked.is_empty() {
        return format!("{NO_BUS_STOPS}\n");
    }

    let mut out = String::from("Nearest Bus Stops:\n");
    for (position, entry) in ranked.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {} - {:.3} km",
            position + 1,
            entry.stop,
            entry.distance_km
        );
    }
    out
}

/// Follow-up advice for a failed command, if any applies
pub fn failure_hint(error: &anyhow::Error) -> Option<&'static str> {
    match error.downcast_ref::<ApplicationError>()? {
        ApplicationError::NotAuthorized(_) => Some(ACCOUNT_KEY_HINT),
        e if e.is_retryable() => Some(RETRY_HINT),
        _ => None,
    }
}
