//! Tests for CLI argument parsing and configuration layering
//!
//! Defaults, then the JSON config file, then CLI flags and topic environment
//! variables, each overriding the previous layer.

use clap::Parser;
use journey_telemetry_simulator::types::config::CliArgs;
use journey_telemetry_simulator::types::{DriftMode, Location, SimulationConfig};
use std::io::Write;
use tempfile::Builder;

/// Test that no arguments yield the defaults
#[test]
fn test_no_arguments_use_defaults() {
    let cli_args = CliArgs::try_parse_from(["test"]).unwrap();
    assert!(cli_args.config.is_none());
    assert!(cli_args.seed.is_none());
    assert!(!cli_args.verbose);
    assert!(!cli_args.dry_run);

    let config = SimulationConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config.seed, 42);
    assert_eq!(config.tick_interval_ms, 3000);
    assert_eq!(config.max_ticks, None);
    assert_eq!(config.drift_mode, DriftMode::Stationary);
}

/// Test journey arguments parsing
#[test]
fn test_journey_arguments() {
    let args = vec![
        "test",
        "--device-id", "Vehicle-999",
        "--camera-id", "cam-7",
        "--seed", "1234",
        "--tick-interval-ms", "0",
        "--max-ticks", "25",
        "--drift", "toward-destination",
        "--verbose",
    ];

    let cli_args = CliArgs::try_parse_from(args).unwrap();
    assert_eq!(cli_args.drift, Some(DriftMode::TowardDestination));
    assert!(cli_args.verbose);

    let config = SimulationConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config.device_id, "Vehicle-999");
    assert_eq!(config.camera_id, "cam-7");
    assert_eq!(config.seed, 1234);
    assert_eq!(config.tick_interval_ms, 0);
    assert_eq!(config.max_ticks, Some(25));
    config.validate().unwrap();
}

/// Test invalid drift mode is rejected by the parser
#[test]
fn test_invalid_drift_argument() {
    let result = CliArgs::try_parse_from(["test", "--drift", "sideways"]);
    assert!(result.is_err());
}

/// Test zero max ticks parses but fails validation
#[test]
fn test_zero_max_ticks_fails_validation() {
    let cli_args = CliArgs::try_parse_from(["test", "--max-ticks", "0"]).unwrap();
    let config = SimulationConfig::from_cli_args(cli_args).unwrap();
    assert!(config.validate().is_err(), "Zero max ticks should fail validation");
}

/// Test topic flags
#[test]
fn test_topic_flags() {
    let args = vec![
        "test",
        "--vehicle-topic", "city.vehicles",
        "--emergency-topic", "city.emergencies",
    ];
    let config = SimulationConfig::from_cli_args(CliArgs::try_parse_from(args).unwrap()).unwrap();

    assert_eq!(config.topics.vehicle, "city.vehicles");
    assert_eq!(config.topics.emergency, "city.emergencies");
    assert_eq!(config.topics.gps, "gps_data");
}

/// Test topic environment variable
#[test]
fn test_topic_environment_variable() {
    std::env::set_var("TRAFFIC_TOPIC", "env.traffic");
    let cli_args = CliArgs::try_parse_from(["test"]);
    std::env::remove_var("TRAFFIC_TOPIC");

    let config = SimulationConfig::from_cli_args(cli_args.unwrap()).unwrap();
    assert_eq!(config.topics.traffic, "env.traffic");
}

/// Test config file with CLI overrides
#[test]
fn test_config_file_with_overrides() {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"{{
            "device_id": "File-Vehicle",
            "seed": 7,
            "origin": [45.0, 9.5],
            "destination": [45.1, 9.4],
            "drift_mode": "toward-destination",
            "topics": {{ "gps": "file.gps" }}
        }}"#
    )
    .unwrap();

    let path = file.path().to_str().unwrap().to_string();
    let args = vec!["test", "--config", path.as_str(), "--seed", "99"];
    let config = SimulationConfig::from_cli_args(CliArgs::try_parse_from(args).unwrap()).unwrap();

    assert_eq!(config.device_id, "File-Vehicle");
    assert_eq!(config.seed, 99);
    assert_eq!(config.origin, Location::new(45.0, 9.5));
    assert_eq!(config.destination, Location::new(45.1, 9.4));
    assert_eq!(config.drift_mode, DriftMode::TowardDestination);
    assert_eq!(config.topics.gps, "file.gps");
    assert_eq!(config.topics.vehicle, "vehicle_data");
    config.validate().unwrap();
}

/// Test missing config file
#[test]
fn test_missing_config_file() {
    let args = vec!["test", "--config", "/definitely/not/here.json"];
    let result = SimulationConfig::from_cli_args(CliArgs::try_parse_from(args).unwrap());
    assert!(result.is_err());
}

/// Test special flags
#[test]
fn test_special_flags() {
    let args = vec!["test", "--dry-run", "--print-config", "--json-logs", "--log-dir", "/tmp/logs", "-d"];
    let cli_args = CliArgs::try_parse_from(args).unwrap();

    assert!(cli_args.dry_run);
    assert!(cli_args.print_config);
    assert!(cli_args.json_logs);
    assert!(cli_args.debug);
    assert_eq!(cli_args.log_dir.as_deref(), Some("/tmp/logs"));
}
