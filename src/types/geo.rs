//! Geographic coordinates
//!
//! A [`Location`] is a latitude/longitude pair in degrees. It serializes as a
//! two-element array `[latitude, longitude]`, the shape downstream consumers of
//! the telemetry topics expect.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the map, in floating point degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Location {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// Torino, the default journey origin
pub const TORINO: Location = Location { latitude: 45.116177, longitude: 7.742615 };

/// Milano, the default journey destination
pub const MILANO: Location = Location { latitude: 45.464664, longitude: 9.188540 };

impl Location {
    /// Create a location from latitude and longitude
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Whether both coordinates are finite and inside the valid degree ranges
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Per-axis difference `other - self`
    pub fn delta_to(&self, other: &Location) -> (f64, f64) {
        (other.latitude - self.latitude, other.longitude - self.longitude)
    }
}

impl Default for Location {
    fn default() -> Self {
        TORINO
    }
}

impl From<(f64, f64)> for Location {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self { latitude, longitude }
    }
}

impl From<Location> for (f64, f64) {
    fn from(location: Location) -> Self {
        (location.latitude, location.longitude)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}
