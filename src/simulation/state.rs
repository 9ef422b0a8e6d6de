//! Clock and position state of a journey
//!
//! All mutable simulation state lives in one [`JourneyState`] value owned by the
//! journey loop and passed explicitly to the generators that need it.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::simulation::{Increment, SimulationClock, SimulationResult, VehiclePosition};
use crate::types::{Location, SimulationConfig};

/// Simulated time and vehicle location, advanced once per tick
#[derive(Debug, Clone)]
pub struct JourneyState {
    clock: SimulationClock,
    position: VehiclePosition,
}

impl JourneyState {
    /// Create state from explicit parts
    pub fn new(clock: SimulationClock, position: VehiclePosition) -> Self {
        Self { clock, position }
    }

    /// Build the initial state described by a configuration
    ///
    /// The clock starts at `config.start_time`, or the wall clock when unset.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let start = config.start_time.unwrap_or_else(Utc::now);
        let (min_step, max_step) = config.clock_step_range();
        let clock = SimulationClock::starting_at(start, min_step, max_step);

        let increment = Increment::for_route(
            config.drift_mode,
            config.origin,
            config.destination,
            config.drift_steps,
        );
        let position = VehiclePosition::new(config.origin, increment, config.position_jitter);

        Self { clock, position }
    }

    /// Advance the clock and return the new timestamp
    pub fn advance_clock<R: Rng>(&mut self, rng: &mut R) -> SimulationResult<DateTime<Utc>> {
        self.clock.advance(rng)
    }

    /// Advance the position and return the new location
    pub fn advance_position<R: Rng>(&mut self, rng: &mut R) -> Location {
        self.position.advance(rng)
    }

    /// Current simulated time
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Current vehicle location
    pub fn location(&self) -> Location {
        self.position.current()
    }

    /// The vehicle position model
    pub fn position(&self) -> &VehiclePosition {
        &self.position
    }
}
