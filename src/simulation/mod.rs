//! Simulation orchestration and control
//!
//! This module contains the journey loop, its clock and position state, the
//! termination condition, statistics collection, logging and error handling.
//!
//! # Overview
//!
//! - **Journey**: Drives ticks, publishes records, checks for arrival
//! - **JourneyState**: The simulated clock and vehicle position
//! - **ArrivalCondition**: Decides when the vehicle has reached its destination
//! - **JourneyStatistics**: Counts ticks, records and publish failures
//! - **SimulationError**: Error handling for simulation operations
//!
//! # Usage Example
//!
//! ```rust
//! use journey_telemetry_simulator::publish::InMemoryPublisher;
//! use journey_telemetry_simulator::simulation::*;
//! use journey_telemetry_simulator::types::*;
//!
//! let config = SimulationConfig {
//!     tick_interval_ms: 0,
//!     max_ticks: Some(3),
//!     ..Default::default()
//! };
//!
//! let mut journey = Journey::new(config, InMemoryPublisher::new()).unwrap();
//! let outcome = journey.run().unwrap();
//! assert_eq!(outcome, JourneyOutcome::TickLimitReached { ticks: 3 });
//! ```

pub mod clock;
pub mod error;
pub mod journey;
pub mod logging;
pub mod position;
pub mod state;
pub mod statistics;
pub mod termination;

// Re-export all public types for convenience
pub use clock::*;
pub use error::*;
pub use journey::*;
pub use logging::*;
pub use position::*;
pub use state::*;
pub use statistics::*;
pub use termination::*;
