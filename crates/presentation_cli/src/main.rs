//! lta-cli
//!
//! Command-line client for Singapore's LTA DataMall: bus arrivals, car park
//! availability, stop-to-stop travel time and nearest bus stops.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::{process::ExitCode, sync::Arc};

use anyhow::Context;
use application::{TransitService, TravelTimeOptions};
use chrono::Local;
use clap::Parser;
use domain::GeoPoint;
use infrastructure::{AppConfig, DataMallAdapter, init_logging};
use presentation_cli::{Cli, Commands, log_filter_from_verbosity, output};
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:?}");
            if let Some(hint) = output::failure_hint(&error) {
                eprintln!("\n{hint}");
            }
            ExitCode::FAILURE
        },
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config =
        AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    init_logging(&config.logging, log_filter_from_verbosity(cli.verbose))?;
    config.validate()?;
    info!(environment = %config.environment, "Starting lta-cli");

    let adapter = DataMallAdapter::from_config(&config.datamall)?;
    let service = TransitService::new(Arc::new(adapter))
        .with_ranking(config.nearest.ranking_options()?)
        .with_travel_time(config.travel_time.travel_time_options()?);

    match cli.command {
        Commands::BusArrival {
            bus_stop_code,
            service_no,
        } => {
            let arrival = service
                .bus_arrival(&bus_stop_code, Some(service_no.as_str()))
                .await
                .context("Error fetching bus arrival")?;

            print!(
                "{}",
                output::format_bus_arrival(&arrival, &bus_stop_code, &service_no, &Local)
            );
        },

        Commands::ParkingAvailability => {
            let car_parks = service
                .parking_availability()
                .await
                .context("Error fetching parking availability")?;

            print!("{}", output::format_parking_availability(&car_parks));
        },

        Commands::BusTravelTime {
            from_bus_stop_code,
            to_bus_stop_code,
            speed,
        } => {
            let service = match speed {
                Some(speed) => service.with_travel_time(TravelTimeOptions::new(speed)?),
                None => service,
            };

            let estimates = service
                .bus_travel_time(&from_bus_stop_code, &to_bus_stop_code)
                .await
                .context("Error estimating travel time between bus stops")?;

            print!(
                "{}",
                output::format_travel_times(&from_bus_stop_code, &to_bus_stop_code, &estimates)
            );
        },

        Commands::NearestBusStops {
            latitude,
            longitude,
            limit,
        } => {
            let query = GeoPoint::new(latitude, longitude)?;
            let ranked = service
                .nearest_bus_stops(query, limit)
                .await
                .context("Error fetching nearest bus stops")?;

            print!("{}", output::format_nearest_stops(&ranked));
        },
    }

    Ok(())
}
