//! Journey Telemetry Simulator
//!
//! A synthetic telemetry generator that simulates one vehicle's journey between
//! two fixed points and emits five correlated event streams per tick: vehicle,
//! GPS, traffic camera, weather and emergency incident.
//!
//! # Overview
//!
//! The data is meant for exercising downstream stream-processing pipelines. Every
//! tick advances a simulated clock by 30 to 60 seconds and moves the vehicle a
//! little; all five records of that tick share its timestamp and location. Values
//! come from a single seeded random number generator, so a seed reproduces a run.
//!
//! ## Key Features
//!
//! - **Correlated Streams**: Five record kinds per tick sharing time and place
//! - **Reproducible Runs**: One seeded RNG with a fixed draw order
//! - **Narrow Publish Interface**: `publish(topic, key, value)` plus `flush()`
//! - **Arrival Detection**: Stops once the vehicle passes the destination
//! - **Configurable Simulation**: JSON config file, CLI flags and topic environment variables
//!
//! ## Quick Start
//!
//! ```rust
//! use journey_telemetry_simulator::*;
//!
//! let config = SimulationConfig {
//!     tick_interval_ms: 0,
//!     max_ticks: Some(10),
//!     ..Default::default()
//! };
//!
//! let mut journey = Journey::new(config, InMemoryPublisher::new())?;
//! let outcome = journey.run()?;
//!
//! println!("Journey {}: {}", outcome, journey.statistics().compact_summary());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, enums, coordinates and configuration
//! - [`events`]: Telemetry records and their generator
//! - [`publish`]: The publish interface and its in-crate sinks
//! - [`simulation`]: Journey loop, state, termination, statistics and logging
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │ Simulation  │    │   Events    │    │   Publish   │
//! │             │    │             │    │             │
//! │ Journey     │───►│ Generator   │    │ Publisher   │
//! │ State       │    │ Records     │    │ JSON lines  │
//! │ Arrival     │────┼─────────────┼───►│ In-memory   │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!        │                  │
//!        ▼                  ▼
//! ┌───────────────────────────────┐
//! │             Types             │
//! │ Identifiers  Enums  Location  │
//! │ Config                        │
//! └───────────────────────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod events;
pub mod publish;
pub mod simulation;

pub mod types;

// Core types and identifiers
pub use types::{
    // Configuration
    ConfigValidationError,
    DriftMode,
    // Identifiers
    IncidentId,
    // Enums
    IncidentStatus,
    IncidentType,
    Location,
    RecordId,
    RecordKind,
    SimulationConfig,
    TopicConfig,
    WeatherCondition,
};

// Event types and functionality
pub use events::{
    EmergencyIncidentRecord, EventGenerator, GpsRecord, TelemetryRecord, TickRecords,
    TrafficCameraRecord, VehicleRecord, WeatherRecord,
};

// Publishing
pub use publish::{InMemoryPublisher, JsonLinesPublisher, PublishError, Publisher};

// Simulation types and functionality
pub use simulation::{
    ArrivalCondition, Journey, JourneyOutcome, JourneyState, JourneyStatistics, SimulationError,
    StopSignal, TerminationCondition,
};
