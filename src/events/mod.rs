//! Telemetry record generation
//!
//! This module holds the five record kinds produced on every tick and the
//! generator that fills them with seeded random values.
//!
//! # Overview
//!
//! - **Records**: `VehicleRecord`, `GpsRecord`, `TrafficCameraRecord`,
//!   `WeatherRecord`, `EmergencyIncidentRecord`, bundled per tick as `TickRecords`
//! - **EventGenerator**: Owns the seeded random sequence and builds records
//!
//! # Usage Example
//!
//! ```rust
//! use journey_telemetry_simulator::events::*;
//! use journey_telemetry_simulator::simulation::JourneyState;
//! use journey_telemetry_simulator::types::SimulationConfig;
//!
//! let config = SimulationConfig::default();
//! let mut state = JourneyState::from_config(&config);
//! let mut generator = EventGenerator::new(config.seed);
//!
//! let tick = generator.generate_tick(&mut state, &config.device_id, &config.camera_id).unwrap();
//! assert!(tick.is_correlated());
//! assert_eq!(tick.weather.timestamp, tick.vehicle.timestamp);
//! ```

pub mod generator;
pub mod records;

// Re-export all public types for convenience
pub use generator::*;
pub use records::*;
