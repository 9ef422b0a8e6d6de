//! Simulated time
//!
//! The simulation clock starts at the wall-clock time the journey begins and moves
//! forward by a random whole number of seconds on every tick. It never moves back
//! and is never reset mid-journey.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::{debug, info};

use crate::simulation::{SimulationError, SimulationResult};

/// Simulated "current time" of a journey
#[derive(Debug, Clone)]
pub struct SimulationClock {
    /// Current simulated timestamp
    current: DateTime<Utc>,
    /// Smallest advance per tick, in seconds
    min_step_secs: u32,
    /// Largest advance per tick, in seconds
    max_step_secs: u32,
}

impl SimulationClock {
    /// Create a clock starting at `start`, advancing by `[min_step_secs, max_step_secs]` per tick
    ///
    /// Bounds are expected to be validated by the caller; they are normalized here so
    /// that a step is always at least one second and `min <= max`.
    pub fn starting_at(start: DateTime<Utc>, min_step_secs: u32, max_step_secs: u32) -> Self {
        let min_step_secs = min_step_secs.max(1);
        let max_step_secs = max_step_secs.max(min_step_secs);
        info!(%start, min_step_secs, max_step_secs, "Initializing simulation clock");
        Self { current: start, min_step_secs, max_step_secs }
    }

    /// Current simulated time
    pub fn now(&self) -> DateTime<Utc> {
        self.current
    }

    /// Step bounds as `(min, max)` seconds
    pub fn step_range(&self) -> (u32, u32) {
        (self.min_step_secs, self.max_step_secs)
    }

    /// Advance by a uniformly random whole number of seconds and return the new time
    ///
    /// Fails without moving the clock when the new time is out of range.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) -> SimulationResult<DateTime<Utc>> {
        let step = rng.gen_range(self.min_step_secs..=self.max_step_secs);
        let next = self
            .current
            .checked_add_signed(Duration::seconds(i64::from(step)))
            .ok_or_else(|| {
                SimulationError::event_generation_error(format!(
                    "simulation clock overflowed advancing {} by {} seconds",
                    self.current, step
                ))
            })?;

        self.current = next;
        debug!(step_secs = step, now = %self.current, "Advanced simulation clock");
        Ok(self.current)
    }
}
