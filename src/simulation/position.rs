//! Simulated vehicle position
//!
//! Movement is a fixed per-axis increment plus independent uniform jitter on each
//! axis. There is no routing: the vehicle travels on a straight line (or, with the
//! legacy zero increment, random-walks around the origin).

use rand::Rng;
use tracing::{debug, info, warn};

use crate::types::{DriftMode, Location};

/// Per-axis movement applied on every tick, in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Increment {
    /// Latitude delta per tick
    pub latitude: f64,
    /// Longitude delta per tick
    pub longitude: f64,
}

impl Increment {
    /// No drift at all
    pub const ZERO: Increment = Increment { latitude: 0.0, longitude: 0.0 };

    /// Derive the per-tick increment for a route split into `steps` ticks
    pub fn for_route(mode: DriftMode, origin: Location, destination: Location, steps: u32) -> Self {
        let steps = f64::from(steps.max(1));
        match mode {
            DriftMode::Stationary => {
                // Legacy behavior: destination minus destination
                let (dlat, dlon) = destination.delta_to(&destination);
                Self { latitude: dlat / steps, longitude: dlon / steps }
            }
            DriftMode::TowardDestination => {
                let (dlat, dlon) = origin.delta_to(&destination);
                Self { latitude: dlat / steps, longitude: dlon / steps }
            }
        }
    }

    /// Whether this increment moves the vehicle at all
    pub fn is_zero(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }
}

/// Current location of the simulated vehicle
#[derive(Debug, Clone)]
pub struct VehiclePosition {
    /// Where the vehicle currently is
    current: Location,
    /// Fixed drift applied each tick
    increment: Increment,
    /// Maximum absolute jitter per axis
    jitter: f64,
}

impl VehiclePosition {
    /// Create a position at `origin`
    pub fn new(origin: Location, increment: Increment, jitter: f64) -> Self {
        if increment.is_zero() {
            warn!("Position increment is zero; only random jitter will move the vehicle");
        }
        info!(%origin, lat_increment = increment.latitude, lon_increment = increment.longitude, jitter, "Initializing vehicle position");
        Self { current: origin, increment, jitter: jitter.abs() }
    }

    /// Current location
    pub fn current(&self) -> Location {
        self.current
    }

    /// Fixed per-tick increment
    pub fn increment(&self) -> Increment {
        self.increment
    }

    /// Maximum absolute jitter per axis
    pub fn jitter(&self) -> f64 {
        self.jitter
    }

    /// Apply one tick of movement and return the new location
    ///
    /// Jitter is drawn for latitude first, then longitude.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) -> Location {
        self.current.latitude += self.increment.latitude;
        self.current.longitude += self.increment.longitude;

        if self.jitter > 0.0 {
            self.current.latitude += rng.gen_range(-self.jitter..=self.jitter);
            self.current.longitude += rng.gen_range(-self.jitter..=self.jitter);
        }

        debug!(location = %self.current, "Advanced vehicle position");
        self.current
    }
}
