//! Configuration structures for the journey simulator
//!
//! This module contains the simulation configuration structure and validation logic
//! used to control the route, cadence and publish topics of a journey.

use super::{DriftMode, Location, RecordKind, MILANO, TORINO};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default values of the journey parameters
pub mod defaults {
    /// Device identifier of the simulated vehicle
    pub const DEVICE_ID: &str = "Vehicle-123";

    /// Identifier of the traffic camera reporting along the route
    pub const CAMERA_ID: &str = "camera123";

    /// Seed of the deterministic random sequence
    pub const SEED: u64 = 42;

    /// Smallest simulated clock advance per tick, in seconds
    pub const MIN_CLOCK_STEP_SECS: u32 = 30;

    /// Largest simulated clock advance per tick, in seconds
    pub const MAX_CLOCK_STEP_SECS: u32 = 60;

    /// Maximum absolute random jitter applied to each axis per tick, in degrees
    pub const POSITION_JITTER: f64 = 0.0005;

    /// Largest accepted position jitter, in degrees
    pub const MAX_POSITION_JITTER: f64 = 1.0;

    /// Number of ticks the straight-line drift divides the route into
    pub const DRIFT_STEPS: u32 = 100;

    /// Real time slept between ticks, in milliseconds
    pub const TICK_INTERVAL_MS: u64 = 3_000;

    /// Topic receiving vehicle records
    pub const VEHICLE_TOPIC: &str = "vehicle_data";

    /// Topic receiving GPS records
    pub const GPS_TOPIC: &str = "gps_data";

    /// Topic receiving traffic camera records
    pub const TRAFFIC_TOPIC: &str = "traffic_data";

    /// Topic receiving weather records
    pub const WEATHER_TOPIC: &str = "weather_data";

    /// Topic receiving emergency incident records
    pub const EMERGENCY_TOPIC: &str = "emergency_data";
}

/// Topic name per record kind
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TopicConfig {
    /// Topic for vehicle records
    pub vehicle: String,
    /// Topic for GPS records
    pub gps: String,
    /// Topic for traffic camera records
    pub traffic: String,
    /// Topic for weather records
    pub weather: String,
    /// Topic for emergency incident records
    pub emergency: String,
}

impl Default for TopicConfig {
    fn default() -> Self {
        Self {
            vehicle: defaults::VEHICLE_TOPIC.to_string(),
            gps: defaults::GPS_TOPIC.to_string(),
            traffic: defaults::TRAFFIC_TOPIC.to_string(),
            weather: defaults::WEATHER_TOPIC.to_string(),
            emergency: defaults::EMERGENCY_TOPIC.to_string(),
        }
    }
}

impl TopicConfig {
    /// Topic a record of the given kind is published to
    pub fn topic_for(&self, kind: RecordKind) -> &str {
        match kind {
            RecordKind::Vehicle => &self.vehicle,
            RecordKind::Gps => &self.gps,
            RecordKind::TrafficCamera => &self.traffic,
            RecordKind::Weather => &self.weather,
            RecordKind::EmergencyIncident => &self.emergency,
        }
    }
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "journey-telemetry-simulator",
    version,
    about = "Journey Telemetry Simulator - Generates correlated smart-city telemetry for one vehicle",
    long_about = "Simulates a single vehicle driving from Torino to Milano and publishes one vehicle, GPS, traffic camera, weather and emergency incident record per tick. Records are written as JSON lines (topic, key, value) to stdout.

EXAMPLES:
    # Run with default settings (3 second ticks until interrupted)
    journey-telemetry-simulator

    # Use a configuration file
    journey-telemetry-simulator --config journey.json

    # Fast run that actually reaches Milano
    journey-telemetry-simulator --drift toward-destination --tick-interval-ms 0

    # Generate configuration template
    journey-telemetry-simulator --print-config > journey.json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments and topic environment variables (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Device identifier of the simulated vehicle
    #[arg(long, help = "Device identifier of the simulated vehicle")]
    pub device_id: Option<String>,

    /// Traffic camera identifier
    #[arg(long, help = "Traffic camera identifier")]
    pub camera_id: Option<String>,

    /// Random seed for reproducible results
    #[arg(long, help = "Random seed for reproducible results")]
    pub seed: Option<u64>,

    /// Real time between ticks
    #[arg(
        long,
        help = "Milliseconds slept between ticks",
        long_help = "Real time slept between two ticks, in milliseconds. 0 runs the journey as fast as possible. Default: 3000"
    )]
    pub tick_interval_ms: Option<u64>,

    /// Stop after this many ticks even if the destination was not reached
    #[arg(long, help = "Stop after this many ticks")]
    pub max_ticks: Option<u64>,

    /// How the vehicle drifts toward the destination
    #[arg(
        long,
        help = "Position drift mode (stationary or toward-destination)",
        long_help = "stationary reproduces the legacy zero increment where only jitter moves the vehicle; toward-destination interpolates from origin to destination. Default: stationary"
    )]
    pub drift: Option<DriftMode>,

    /// Topic for vehicle records
    #[arg(long, env = "VEHICLE_TOPIC", help = "Topic for vehicle records")]
    pub vehicle_topic: Option<String>,

    /// Topic for GPS records
    #[arg(long, env = "GPS_TOPIC", help = "Topic for GPS records")]
    pub gps_topic: Option<String>,

    /// Topic for traffic camera records
    #[arg(long, env = "TRAFFIC_TOPIC", help = "Topic for traffic camera records")]
    pub traffic_topic: Option<String>,

    /// Topic for weather records
    #[arg(long, env = "WEATHER_TOPIC", help = "Topic for weather records")]
    pub weather_topic: Option<String>,

    /// Topic for emergency incident records
    #[arg(long, env = "EMERGENCY_TOPIC", help = "Topic for emergency incident records")]
    pub emergency_topic: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Emit logs as JSON
    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    /// Also write logs to daily rolling files in this directory
    #[arg(long, help = "Directory for rolling log files")]
    pub log_dir: Option<String>,

    /// Dry run mode - validate configuration without running simulation
    #[arg(long, help = "Validate configuration without running simulation")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Device identifier of the simulated vehicle
    pub device_id: Option<String>,

    /// Traffic camera identifier
    pub camera_id: Option<String>,

    /// Journey origin
    pub origin: Option<Location>,

    /// Journey destination
    pub destination: Option<Location>,

    /// Random seed for reproducible results
    pub seed: Option<u64>,

    /// Simulated start time (defaults to the wall clock at startup)
    pub start_time: Option<DateTime<Utc>>,

    /// Smallest simulated clock advance per tick, in seconds
    pub min_clock_step_secs: Option<u32>,

    /// Largest simulated clock advance per tick, in seconds
    pub max_clock_step_secs: Option<u32>,

    /// Maximum absolute jitter per axis per tick, in degrees
    pub position_jitter: Option<f64>,

    /// Position drift mode
    pub drift_mode: Option<DriftMode>,

    /// Number of ticks the straight-line drift divides the route into
    pub drift_steps: Option<u32>,

    /// Real time slept between ticks, in milliseconds
    pub tick_interval_ms: Option<u64>,

    /// Upper bound on the number of ticks
    pub max_ticks: Option<u64>,

    /// Topic names (missing entries fall back to defaults)
    pub topics: Option<TopicConfig>,
}

/// Configuration for a simulated journey
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationConfig {
    /// Device identifier of the simulated vehicle, constant for the journey
    pub device_id: String,

    /// Traffic camera identifier carried by traffic records
    pub camera_id: String,

    /// Journey origin
    pub origin: Location,

    /// Journey destination
    pub destination: Location,

    /// Seed of the deterministic random sequence
    pub seed: u64,

    /// Simulated start time (None uses the wall clock at startup)
    pub start_time: Option<DateTime<Utc>>,

    /// Smallest simulated clock advance per tick, in seconds
    pub min_clock_step_secs: u32,

    /// Largest simulated clock advance per tick, in seconds
    pub max_clock_step_secs: u32,

    /// Maximum absolute jitter per axis per tick, in degrees
    pub position_jitter: f64,

    /// Position drift mode
    pub drift_mode: DriftMode,

    /// Number of ticks the straight-line drift divides the route into
    pub drift_steps: u32,

    /// Real time slept between ticks, in milliseconds
    pub tick_interval_ms: u64,

    /// Upper bound on the number of ticks (None runs until arrival or interrupt)
    pub max_ticks: Option<u64>,

    /// Topic names per record kind
    pub topics: TopicConfig,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for simulation configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Device identifier is empty
    #[error("Device id must not be empty")]
    EmptyDeviceId,

    /// Camera identifier is empty
    #[error("Camera id must not be empty")]
    EmptyCameraId,

    /// Clock step range is invalid
    #[error("Invalid clock step range: min ({0}) must be > 0 and <= max ({1})")]
    InvalidClockStep(u32, u32),

    /// Jitter is negative, not finite or above [`defaults::MAX_POSITION_JITTER`]
    #[error("Position jitter must be between 0 and 1 degree, got {0}")]
    InvalidJitter(f64),

    /// Drift steps is zero
    #[error("Drift steps must be greater than 0")]
    InvalidDriftSteps,

    /// A topic name is empty
    #[error("Topic for {0} records must not be empty")]
    EmptyTopic(RecordKind),

    /// A route endpoint is out of range
    #[error("Invalid {field} coordinate: {location}")]
    InvalidCoordinate {
        /// Which endpoint is invalid
        field: String,
        /// The offending location
        location: Location,
    },

    /// Max ticks is zero
    #[error("Max ticks must be greater than 0 when set")]
    InvalidMaxTicks,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            device_id: defaults::DEVICE_ID.to_string(),
            camera_id: defaults::CAMERA_ID.to_string(),
            origin: TORINO,
            destination: MILANO,
            seed: defaults::SEED,
            start_time: None,
            min_clock_step_secs: defaults::MIN_CLOCK_STEP_SECS,
            max_clock_step_secs: defaults::MAX_CLOCK_STEP_SECS,
            position_jitter: defaults::POSITION_JITTER,
            drift_mode: DriftMode::default(),
            drift_steps: defaults::DRIFT_STEPS,
            tick_interval_ms: defaults::TICK_INTERVAL_MS,
            max_ticks: None,
            topics: TopicConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            device_id: config_file.device_id.unwrap_or(defaults.device_id),
            camera_id: config_file.camera_id.unwrap_or(defaults.camera_id),
            origin: config_file.origin.unwrap_or(defaults.origin),
            destination: config_file.destination.unwrap_or(defaults.destination),
            seed: config_file.seed.unwrap_or(defaults.seed),
            start_time: config_file.start_time.or(defaults.start_time),
            min_clock_step_secs: config_file
                .min_clock_step_secs
                .unwrap_or(defaults.min_clock_step_secs),
            max_clock_step_secs: config_file
                .max_clock_step_secs
                .unwrap_or(defaults.max_clock_step_secs),
            position_jitter: config_file.position_jitter.unwrap_or(defaults.position_jitter),
            drift_mode: config_file.drift_mode.unwrap_or(defaults.drift_mode),
            drift_steps: config_file.drift_steps.unwrap_or(defaults.drift_steps),
            tick_interval_ms: config_file.tick_interval_ms.unwrap_or(defaults.tick_interval_ms),
            max_ticks: config_file.max_ticks.or(defaults.max_ticks),
            topics: config_file.topics.unwrap_or(defaults.topics),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.device_id {
            config.device_id = value;
        }
        if let Some(value) = args.camera_id {
            config.camera_id = value;
        }
        if let Some(value) = args.seed {
            config.seed = value;
        }
        if let Some(value) = args.tick_interval_ms {
            config.tick_interval_ms = value;
        }
        if let Some(value) = args.max_ticks {
            config.max_ticks = Some(value);
        }
        if let Some(value) = args.drift {
            config.drift_mode = value;
        }
        if let Some(value) = args.vehicle_topic {
            config.topics.vehicle = value;
        }
        if let Some(value) = args.gps_topic {
            config.topics.gps = value;
        }
        if let Some(value) = args.traffic_topic {
            config.topics.traffic = value;
        }
        if let Some(value) = args.weather_topic {
            config.topics.weather = value;
        }
        if let Some(value) = args.emergency_topic {
            config.topics.emergency = value;
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.device_id.trim().is_empty() {
            return Err(ConfigValidationError::EmptyDeviceId);
        }

        if self.camera_id.trim().is_empty() {
            return Err(ConfigValidationError::EmptyCameraId);
        }

        // Zero-second steps would break strict timestamp ordering
        if self.min_clock_step_secs == 0 || self.min_clock_step_secs > self.max_clock_step_secs {
            return Err(ConfigValidationError::InvalidClockStep(
                self.min_clock_step_secs,
                self.max_clock_step_secs,
            ));
        }

        if !(0.0..=defaults::MAX_POSITION_JITTER).contains(&self.position_jitter) {
            return Err(ConfigValidationError::InvalidJitter(self.position_jitter));
        }

        if self.drift_steps == 0 {
            return Err(ConfigValidationError::InvalidDriftSteps);
        }

        if self.max_ticks == Some(0) {
            return Err(ConfigValidationError::InvalidMaxTicks);
        }

        self.validate_location("origin", self.origin)?;
        self.validate_location("destination", self.destination)?;

        for kind in RecordKind::ALL {
            if self.topics.topic_for(kind).trim().is_empty() {
                return Err(ConfigValidationError::EmptyTopic(kind));
            }
        }

        Ok(())
    }

    /// Helper method to validate route endpoints
    fn validate_location(&self, field: &str, location: Location) -> Result<(), ConfigValidationError> {
        if !location.is_valid() {
            return Err(ConfigValidationError::InvalidCoordinate {
                field: field.to_string(),
                location,
            });
        }
        Ok(())
    }

    /// Get the clock step range as a tuple of seconds
    pub fn clock_step_range(&self) -> (u32, u32) {
        (self.min_clock_step_secs, self.max_clock_step_secs)
    }

    /// Real time slept between ticks
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn empty_args() -> CliArgs {
        CliArgs {
            config: None,
            device_id: None,
            camera_id: None,
            seed: None,
            tick_interval_ms: None,
            max_ticks: None,
            drift: None,
            vehicle_topic: None,
            gps_topic: None,
            traffic_topic: None,
            weather_topic: None,
            emergency_topic: None,
            verbose: false,
            debug: false,
            json_logs: false,
            log_dir: None,
            dry_run: false,
            print_config: false,
        }
    }

    #[test]
    fn test_simulation_config_default() {
        let config = SimulationConfig::default();

        assert_eq!(config.device_id, "Vehicle-123");
        assert_eq!(config.camera_id, "camera123");
        assert_eq!(config.origin, TORINO);
        assert_eq!(config.destination, MILANO);
        assert_eq!(config.seed, 42);
        assert!(config.start_time.is_none());
        assert_eq!(config.clock_step_range(), (30, 60));
        assert_eq!(config.position_jitter, 0.0005);
        assert_eq!(config.drift_mode, DriftMode::Stationary);
        assert_eq!(config.drift_steps, 100);
        assert_eq!(config.tick_interval(), Duration::from_secs(3));
        assert!(config.max_ticks.is_none());
        assert_eq!(config.topics.vehicle, "vehicle_data");
        assert_eq!(config.topics.emergency, "emergency_data");
    }

    #[test]
    fn test_cli_parsing() {
        let args = vec![
            "test",
            "--device-id",
            "Vehicle-9",
            "--drift",
            "toward-destination",
            "--tick-interval-ms",
            "0",
            "--max-ticks",
            "25",
        ];
        let cli_args = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(cli_args.device_id.as_deref(), Some("Vehicle-9"));
        assert_eq!(cli_args.drift, Some(DriftMode::TowardDestination));
        assert_eq!(cli_args.tick_interval_ms, Some(0));
        assert_eq!(cli_args.max_ticks, Some(25));

        let bad = CliArgs::try_parse_from(vec!["test", "--drift", "sideways"]);
        assert!(bad.is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let mut args = empty_args();
        args.seed = Some(7);
        args.camera_id = Some("camera-A4".to_string());
        args.weather_topic = Some("weather_raw".to_string());

        let config = SimulationConfig::from_cli_args(args).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.camera_id, "camera-A4");
        assert_eq!(config.topics.weather, "weather_raw");
        assert_eq!(config.topics.gps, "gps_data");
    }

    #[test]
    fn test_config_file_loading() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(
            file,
            r#"{{
                "device_id": "Vehicle-55",
                "destination": [45.2, 7.7],
                "drift_mode": "toward-destination",
                "topics": {{ "gps": "gps_v2" }}
            }}"#
        )
        .unwrap();

        let config = SimulationConfig::from_file(file.path()).unwrap();
        assert_eq!(config.device_id, "Vehicle-55");
        assert_eq!(config.destination, Location::new(45.2, 7.7));
        assert_eq!(config.drift_mode, DriftMode::TowardDestination);
        assert_eq!(config.topics.gps, "gps_v2");
        // Partial topic tables keep the remaining defaults
        assert_eq!(config.topics.vehicle, "vehicle_data");
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_cli_overrides_config_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{ "seed": 11, "max_ticks": 5 }}"#).unwrap();

        let mut args = empty_args();
        args.config = Some(file.path().display().to_string());
        args.seed = Some(12);

        let config = SimulationConfig::from_cli_args(args).unwrap();
        assert_eq!(config.seed, 12);
        assert_eq!(config.max_ticks, Some(5));
    }

    #[test]
    fn test_config_file_errors() {
        let result = SimulationConfig::from_file("/definitely/not/here.json");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));

        let file = NamedTempFile::new().unwrap();
        let result = SimulationConfig::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));

        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, "{{ not json").unwrap();
        let result = SimulationConfig::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::JsonError(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journey.json");

        let config = SimulationConfig {
            device_id: "Vehicle-77".to_string(),
            max_ticks: Some(3),
            ..Default::default()
        };
        config.save_to_file(&path).unwrap();

        let reloaded = SimulationConfig::from_file(&path).unwrap();
        assert_eq!(reloaded.device_id, "Vehicle-77");
        assert_eq!(reloaded.max_ticks, Some(3));
        assert_eq!(reloaded.topics, config.topics);
        assert!((reloaded.destination.latitude - config.destination.latitude).abs() < 1e-9);
    }

    #[test]
    fn test_simulation_config_validation_success() {
        assert!(SimulationConfig::default().validate().is_ok());
    }

    #[test]
    fn test_simulation_config_validation_failures() {
        let config = SimulationConfig { device_id: "  ".to_string(), ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::EmptyDeviceId)));

        let config = SimulationConfig { camera_id: String::new(), ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::EmptyCameraId)));

        let config = SimulationConfig { min_clock_step_secs: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidClockStep(0, 60))));

        let config = SimulationConfig {
            min_clock_step_secs: 61,
            max_clock_step_secs: 60,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidClockStep(61, 60))));

        let config = SimulationConfig { position_jitter: -0.1, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidJitter(_))));

        let config = SimulationConfig { drift_steps: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidDriftSteps)));

        let config = SimulationConfig { max_ticks: Some(0), ..Default::default() };
        assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidMaxTicks)));

        let config = SimulationConfig { origin: Location::new(95.0, 0.0), ..Default::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidCoordinate { .. })
        ));

        let mut config = SimulationConfig::default();
        config.topics.traffic = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyTopic(RecordKind::TrafficCamera))
        ));
    }

    #[test]
    fn test_topic_lookup() {
        let topics = TopicConfig::default();
        assert_eq!(topics.topic_for(RecordKind::Vehicle), "vehicle_data");
        assert_eq!(topics.topic_for(RecordKind::Gps), "gps_data");
        assert_eq!(topics.topic_for(RecordKind::TrafficCamera), "traffic_data");
        assert_eq!(topics.topic_for(RecordKind::Weather), "weather_data");
        assert_eq!(topics.topic_for(RecordKind::EmergencyIncident), "emergency_data");
    }

    #[test]
    fn test_print_json_round_trips() {
        let config = SimulationConfig::default();
        let json = config.print_json().unwrap();
        assert!(json.contains("\"device_id\": \"Vehicle-123\""));

        let back: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.device_id, config.device_id);
        assert_eq!(back.drift_mode, config.drift_mode);
        assert_eq!(back.clock_step_range(), config.clock_step_range());
    }

    #[test]
    fn test_jitter_upper_bound() {
        for jitter in [1e308, 1.5, f64::INFINITY, f64::NAN] {
            let config = SimulationConfig { position_jitter: jitter, ..Default::default() };
            assert!(matches!(config.validate(), Err(ConfigValidationError::InvalidJitter(_))));
        }

        for jitter in [0.0, defaults::POSITION_JITTER, defaults::MAX_POSITION_JITTER] {
            let config = SimulationConfig { position_jitter: jitter, ..Default::default() };
            assert!(config.validate().is_ok());
        }
    }
}
