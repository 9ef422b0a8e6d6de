//! Enumeration types for the journey simulator
//!
//! This module contains the enumerated field values carried by the generated
//! records, the record kinds themselves, and the position drift modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Weather condition reported by a weather record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    /// Clear sky
    Sunny,
    /// Overcast
    Cloudy,
    /// Rain
    Rainy,
    /// Snow
    Snowy,
}

impl WeatherCondition {
    /// Every condition, in draw order
    pub const ALL: [WeatherCondition; 4] = [
        WeatherCondition::Sunny,
        WeatherCondition::Cloudy,
        WeatherCondition::Rainy,
        WeatherCondition::Snowy,
    ];
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeatherCondition::Sunny => write!(f, "sunny"),
            WeatherCondition::Cloudy => write!(f, "cloudy"),
            WeatherCondition::Rainy => write!(f, "rainy"),
            WeatherCondition::Snowy => write!(f, "snowy"),
        }
    }
}

/// Kind of emergency incident
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncidentType {
    /// Road accident
    Accident,
    /// Fire
    Fire,
    /// Medical emergency
    Medical,
    /// No incident
    None,
}

impl IncidentType {
    /// Every incident type, in draw order
    pub const ALL: [IncidentType; 4] =
        [IncidentType::Accident, IncidentType::Fire, IncidentType::Medical, IncidentType::None];
}

impl fmt::Display for IncidentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncidentType::Accident => write!(f, "Accident"),
            IncidentType::Fire => write!(f, "Fire"),
            IncidentType::Medical => write!(f, "Medical"),
            IncidentType::None => write!(f, "None"),
        }
    }
}

/// Lifecycle status of an emergency incident
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncidentStatus {
    /// Incident still in progress
    Active,
    /// Incident closed
    Resolved,
}

impl IncidentStatus {
    /// Every status, in draw order
    pub const ALL: [IncidentStatus; 2] = [IncidentStatus::Active, IncidentStatus::Resolved];
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncidentStatus::Active => write!(f, "Active"),
            IncidentStatus::Resolved => write!(f, "Resolved"),
        }
    }
}

/// The five record kinds produced on every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    /// Vehicle position and metadata
    Vehicle,
    /// GPS reading
    Gps,
    /// Traffic camera snapshot
    TrafficCamera,
    /// Weather observation
    Weather,
    /// Emergency incident report
    EmergencyIncident,
}

impl RecordKind {
    /// Every kind, in publish order
    pub const ALL: [RecordKind; 5] = [
        RecordKind::Vehicle,
        RecordKind::Gps,
        RecordKind::TrafficCamera,
        RecordKind::Weather,
        RecordKind::EmergencyIncident,
    ];
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Vehicle => write!(f, "Vehicle"),
            RecordKind::Gps => write!(f, "GPS"),
            RecordKind::TrafficCamera => write!(f, "Traffic Camera"),
            RecordKind::Weather => write!(f, "Weather"),
            RecordKind::EmergencyIncident => write!(f, "Emergency Incident"),
        }
    }
}

/// How the fixed per-axis position increment is derived
///
/// `Stationary` reproduces the legacy generator, whose increment was computed as
/// destination minus destination and is therefore always zero: only the random
/// jitter moves the vehicle. `TowardDestination` uses destination minus origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum DriftMode {
    /// Zero increment, jitter only
    #[default]
    Stationary,
    /// Straight-line interpolation from origin to destination
    TowardDestination,
}

impl fmt::Display for DriftMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriftMode::Stationary => write!(f, "stationary"),
            DriftMode::TowardDestination => write!(f, "toward-destination"),
        }
    }
}

impl FromStr for DriftMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "stationary" | "none" | "legacy" => Ok(DriftMode::Stationary),
            "toward-destination" | "towarddestination" | "toward_destination" | "linear" => {
                Ok(DriftMode::TowardDestination)
            }
            _ => Err(format!("Unknown drift mode: {}", s)),
        }
    }
}
