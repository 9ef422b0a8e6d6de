//! Core types and identifiers for the journey simulator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the simulation system.
//!
//! # Overview
//!
//! - **Identifiers**: UUID-based unique identifiers for records and incidents
//! - **Enums**: Enumerated record field values, record kinds, drift modes
//! - **Geo**: The [`Location`] coordinate pair and the default route endpoints
//! - **Configuration**: Simulation configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use journey_telemetry_simulator::types::*;
//!
//! let record_id = RecordId::new();
//! assert_eq!(record_id.to_string().len(), 36);
//!
//! let config = SimulationConfig {
//!     device_id: "Vehicle-7".to_string(),
//!     drift_mode: DriftMode::TowardDestination,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! assert_eq!(config.origin, TORINO);
//! ```

pub mod config;
pub mod enums;
pub mod geo;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use geo::*;
pub use identifiers::*;
