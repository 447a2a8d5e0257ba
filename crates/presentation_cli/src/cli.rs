//! Command-line arguments

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Singapore LTA DataMall command-line client
#[derive(Debug, Parser)]
#[command(name = "lta-cli")]
#[command(author, version, about = "Singapore LTA DataMall command-line client", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to ./lta-cli.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get bus arrival information
    BusArrival {
        /// Bus stop code
        #[arg(long, alias = "busStopCode")]
        bus_stop_code: String,

        /// Service number
        #[arg(long, alias = "serviceNo")]
        service_no: String,
    },

    /// Get parking availability information
    ParkingAvailability,

    /// Estimate travel time between two bus stops
    BusTravelTime {
        /// Origin bus stop code
        #[arg(long, alias = "fromBusStopCode")]
        from_bus_stop_code: String,

        /// Destination bus stop code
        #[arg(long, alias = "toBusStopCode")]
        to_bus_stop_code: String,

        /// Average bus speed in km per minute (overrides the configured value)
        #[arg(long)]
        speed: Option<f64>,
    },

    /// Find the nearest bus stops to a latitude and longitude
    NearestBusStops {
        /// Latitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        latitude: f64,

        /// Longitude in degrees
        #[arg(long, allow_negative_numbers = true)]
        longitude: f64,

        /// Number of nearest bus stops to display (defaults to the configured value)
        #[arg(long)]
        limit: Option<usize>,
    },
}

/// Determine log filter override from verbosity count
///
/// `None` leaves the configured filter in place.
pub const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}
