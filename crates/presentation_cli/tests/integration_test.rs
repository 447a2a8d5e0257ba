//! Integration tests for CLI
//!
//! These tests verify argument parsing without contacting DataMall.

#![allow(clippy::panic)] // Allow panic! in tests for clear failure messages

use std::ffi::OsString;
use std::path::Path;

use clap::Parser;
use presentation_cli::{Cli, Commands};

fn parse_args(args: &[&str]) -> Result<Cli, clap::Error> {
    let os_args: Vec<OsString> = args.iter().map(OsString::from).collect();
    Cli::try_parse_from(os_args)
}

#[test]
fn cli_parses_bus_arrival() {
    let cli = parse_args(&[
        "lta-cli",
        "bus-arrival",
        "--bus-stop-code",
        "83139",
        "--service-no",
        "15",
    ])
    .unwrap();

    if let Commands::BusArrival {
        bus_stop_code,
        service_no,
    } = cli.command
    {
        assert_eq!(bus_stop_code, "83139");
        assert_eq!(service_no, "15");
    } else {
        panic!("Expected BusArrival command");
    }
}

#[test]
fn cli_accepts_camel_case_aliases() {
    let cli = parse_args(&[
        "lta-cli",
        "bus-arrival",
        "--busStopCode",
        "83139",
        "--serviceNo",
        "15",
    ])
    .unwrap();
    assert!(matches!(cli.command, Commands::BusArrival { .. }));
}

#[test]
fn cli_bus_arrival_requires_service_no() {
    let result = parse_args(&["lta-cli", "bus-arrival", "--bus-stop-code", "83139"]);
    assert!(result.is_err());
}

#[test]
fn cli_parses_parking_availability() {
    let cli = parse_args(&["lta-cli", "parking-availability"]).unwrap();
    assert!(matches!(cli.command, Commands::ParkingAvailability));
}

#[test]
fn cli_parses_bus_travel_time() {
    let cli = parse_args(&[
        "lta-cli",
        "bus-travel-time",
        "--from-bus-stop-code",
        "75009",
        "--to-bus-stop-code",
        "76059",
    ])
    .unwrap();

    if let Commands::BusTravelTime {
        from_bus_stop_code,
        to_bus_stop_code,
        speed,
    } = cli.command
    {
        assert_eq!(from_bus_stop_code, "75009");
        assert_eq!(to_bus_stop_code, "76059");
        assert!(speed.is_none());
    } else {
        panic!("Expected BusTravelTime command");
    }
}

#[test]
fn cli_parses_bus_travel_time_speed() {
    let cli = parse_args(&[
        "lta-cli",
        "bus-travel-time",
        "--from-bus-stop-code",
        "A",
        "--to-bus-stop-code",
        "B",
        "--speed",
        "0.4",
    ])
    .unwrap();

    if let Commands::BusTravelTime { speed, .. } = cli.command {
        assert!((speed.unwrap() - 0.4).abs() < f64::EPSILON);
    } else {
        panic!("Expected BusTravelTime command");
    }
}

#[test]
fn cli_parses_nearest_bus_stops_with_default_limit() {
    let cli = parse_args(&[
        "lta-cli",
        "nearest-bus-stops",
        "--latitude",
        "1.3521",
        "--longitude",
        "103.8198",
    ])
    .unwrap();

    if let Commands::NearestBusStops {
        latitude,
        longitude,
        limit,
    } = cli.command
    {
        assert!((latitude - 1.3521).abs() < f64::EPSILON);
        assert!((longitude - 103.8198).abs() < f64::EPSILON);
        assert!(limit.is_none());
    } else {
        panic!("Expected NearestBusStops command");
    }
}

#[test]
fn cli_parses_negative_coordinates_and_limit() {
    let cli = parse_args(&[
        "lta-cli",
        "nearest-bus-stops",
        "--latitude",
        "-33.8688",
        "--longitude",
        "-151.2093",
        "--limit",
        "3",
    ])
    .unwrap();

    if let Commands::NearestBusStops {
        latitude, limit, ..
    } = cli.command
    {
        assert!(latitude < 0.0);
        assert_eq!(limit, Some(3));
    } else {
        panic!("Expected NearestBusStops command");
    }
}

#[test]
fn cli_rejects_negative_limit() {
    let result = parse_args(&[
        "lta-cli",
        "nearest-bus-stops",
        "--latitude",
        "1.35",
        "--longitude",
        "103.8",
        "--limit",
        "-1",
    ]);
    assert!(result.is_err());
}

#[test]
fn cli_rejects_non_numeric_latitude() {
    let result = parse_args(&[
        "lta-cli",
        "nearest-bus-stops",
        "--latitude",
        "north",
        "--longitude",
        "103.8",
    ]);
    assert!(result.is_err());
}

#[test]
fn cli_verbose_flag_counts() {
    let cli = parse_args(&["lta-cli", "-vvv", "parking-availability"]).unwrap();
    assert_eq!(cli.verbose, 3);
}

#[test]
fn cli_global_flags_after_subcommand() {
    let cli = parse_args(&[
        "lta-cli",
        "parking-availability",
        "-v",
        "--config",
        "/etc/lta-cli.toml",
    ])
    .unwrap();
    assert_eq!(cli.verbose, 1);
    assert_eq!(cli.config.as_deref(), Some(Path::new("/etc/lta-cli.toml")));
}

#[test]
fn cli_requires_subcommand() {
    assert!(parse_args(&["lta-cli"]).is_err());
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(parse_args(&["lta-cli", "train-arrival"]).is_err());
}

#[test]
fn cli_help_is_error_kind_display_help() {
    let err = parse_args(&["lta-cli", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn cli_version_is_error_kind_display_version() {
    let err = parse_args(&["lta-cli", "--version"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
}
