//! Journey termination conditions
//!
//! The loop asks its [`TerminationCondition`] after generating each tick whether
//! the vehicle has arrived. The default [`ArrivalCondition`] compares against the
//! destination with a north-west test: latitude at or above the
//! destination and longitude at or below it.

use crate::simulation::Increment;
use crate::types::Location;

/// Decides whether a location ends the journey
pub trait TerminationCondition {
    /// Whether the vehicle at `location` has arrived
    fn is_met(&self, location: Location) -> bool;
}

impl<F> TerminationCondition for F
where
    F: Fn(Location) -> bool,
{
    fn is_met(&self, location: Location) -> bool {
        self(location)
    }
}

/// Arrival at a destination: `lat >= dest.lat && lon <= dest.lon`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrivalCondition {
    destination: Location,
}

impl ArrivalCondition {
    /// Arrival at `destination`
    pub fn new(destination: Location) -> Self {
        Self { destination }
    }

    /// The destination checked against
    pub fn destination(&self) -> Location {
        self.destination
    }

    /// Worst-case number of ticks until arrival
    ///
    /// Returns `None` unless, on each axis, the drift toward the arrival region
    /// is at least as large as the maximum jitter; otherwise jitter alone can keep
    /// the vehicle out forever. Once inside, worst-case movement never leaves the
    /// region, so the bound is the slower of the two axes and at least one tick.
    pub fn tick_bound(&self, origin: Location, increment: Increment, jitter: f64) -> Option<u64> {
        let jitter = jitter.abs();

        // Latitude has to grow up to the destination
        let lat_ticks = Self::axis_ticks(
            self.destination.latitude - origin.latitude,
            increment.latitude - jitter,
        )?;
        // Longitude has to shrink down to the destination
        let lon_ticks = Self::axis_ticks(
            origin.longitude - self.destination.longitude,
            -increment.longitude - jitter,
        )?;

        Some(lat_ticks.max(lon_ticks).max(1))
    }

    fn axis_ticks(gap: f64, progress: f64) -> Option<u64> {
        if !gap.is_finite() || !progress.is_finite() || progress < 0.0 {
            return None;
        }
        if gap <= 0.0 {
            return Some(1);
        }
        if progress == 0.0 {
            return None;
        }
        Some((gap / progress).ceil() as u64)
    }
}

impl TerminationCondition for ArrivalCondition {
    fn is_met(&self, location: Location) -> bool {
        location.latitude >= self.destination.latitude
            && location.longitude <= self.destination.longitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MILANO, TORINO};

    #[test]
    fn test_arrival_comparison() {
        let arrival = ArrivalCondition::new(Location::new(45.0, 9.0));

        assert!(arrival.is_met(Location::new(45.0, 9.0)));
        assert!(arrival.is_met(Location::new(45.5, 8.5)));
        assert!(!arrival.is_met(Location::new(44.9, 8.5)));
        assert!(!arrival.is_met(Location::new(45.5, 9.1)));
    }

    #[test]
    fn test_torino_is_not_milano() {
        let arrival = ArrivalCondition::new(MILANO);
        assert!(!arrival.is_met(TORINO));
        assert_eq!(arrival.destination(), MILANO);
    }

    #[test]
    fn test_tick_bound_north_west_route() {
        let arrival = ArrivalCondition::new(Location::new(45.1, 9.4));
        let increment = Increment { latitude: 0.001, longitude: -0.001 };

        let bound = arrival.tick_bound(Location::new(45.0, 9.5), increment, 0.0005).unwrap();
        // 0.1 degrees at a worst-case 0.0005 per tick
        assert!((199..=201).contains(&bound));

        let exact = arrival.tick_bound(Location::new(45.0, 9.5), increment, 0.0).unwrap();
        assert!((99..=101).contains(&exact));
    }

    #[test]
    fn test_tick_bound_unbounded_cases() {
        let arrival = ArrivalCondition::new(MILANO);

        // Zero drift never guarantees arrival
        assert!(arrival.tick_bound(TORINO, Increment::ZERO, 0.0005).is_none());

        // Torino to Milano heads east, away from the longitude condition
        let east = Increment::for_route(
            crate::types::DriftMode::TowardDestination,
            TORINO,
            MILANO,
            100,
        );
        assert!(arrival.tick_bound(TORINO, east, 0.0005).is_none());
    }

    #[test]
    fn test_tick_bound_already_arrived() {
        let arrival = ArrivalCondition::new(Location::new(45.0, 9.0));
        let bound = arrival.tick_bound(Location::new(46.0, 8.0), Increment::ZERO, 0.0);
        assert_eq!(bound, Some(1));
    }

    #[test]
    fn test_closure_condition() {
        let north_of_45 = |location: Location| location.latitude > 45.0;
        assert!(north_of_45.is_met(Location::new(45.1, 0.0)));
        assert!(!north_of_45.is_met(Location::new(44.9, 0.0)));
    }
}
