//! Statistics collection and reporting
//!
//! Counts what a journey produced: ticks, records accepted per stream and publish
//! failures, plus the simulated and wall-clock span of the run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::simulation::JourneyOutcome;
use crate::types::{Location, RecordKind};

/// Counters for one journey run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JourneyStatistics {
    /// Ticks whose records were handed to the publisher
    pub ticks_published: u64,
    /// Vehicle records accepted by the publisher
    pub vehicle_records: u64,
    /// GPS records accepted by the publisher
    pub gps_records: u64,
    /// Traffic camera records accepted by the publisher
    pub traffic_records: u64,
    /// Weather records accepted by the publisher
    pub weather_records: u64,
    /// Emergency incident records accepted by the publisher
    pub emergency_records: u64,
    /// Publishes or flushes that failed
    pub publish_failures: u64,

    /// Simulated time the journey started at
    pub simulated_start: Option<DateTime<Utc>>,
    /// Simulated time of the last generated tick
    pub simulated_end: Option<DateTime<Utc>>,
    /// Vehicle location at the last generated tick
    pub final_location: Option<Location>,
    /// How the journey ended, once it has
    pub outcome: Option<JourneyOutcome>,
    /// Wall-clock time the run took
    pub wall_duration: Duration,
}

impl JourneyStatistics {
    /// Statistics for a journey starting at `start`
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self { simulated_start: Some(start), ..Default::default() }
    }

    /// Count one accepted record
    pub fn record_published(&mut self, kind: RecordKind) {
        match kind {
            RecordKind::Vehicle => self.vehicle_records += 1,
            RecordKind::Gps => self.gps_records += 1,
            RecordKind::TrafficCamera => self.traffic_records += 1,
            RecordKind::Weather => self.weather_records += 1,
            RecordKind::EmergencyIncident => self.emergency_records += 1,
        }
    }

    /// Count one failed publish or flush
    pub fn record_failure(&mut self) {
        self.publish_failures += 1;
    }

    /// Note the timestamp and location of a generated tick
    pub fn record_tick(&mut self, timestamp: DateTime<Utc>, location: Location) {
        self.simulated_end = Some(timestamp);
        self.final_location = Some(location);
    }

    /// Accepted records of one kind
    pub fn published(&self, kind: RecordKind) -> u64 {
        match kind {
            RecordKind::Vehicle => self.vehicle_records,
            RecordKind::Gps => self.gps_records,
            RecordKind::TrafficCamera => self.traffic_records,
            RecordKind::Weather => self.weather_records,
            RecordKind::EmergencyIncident => self.emergency_records,
        }
    }

    /// Accepted records over all kinds
    pub fn total_published(&self) -> u64 {
        RecordKind::ALL.iter().map(|kind| self.published(*kind)).sum()
    }

    /// Simulated time covered by the journey
    pub fn simulated_span(&self) -> Option<chrono::Duration> {
        match (self.simulated_start, self.simulated_end) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// One-line summary for logs
    pub fn compact_summary(&self) -> String {
        format!(
            "{} ticks, {} records published, {} failures",
            self.ticks_published,
            self.total_published(),
            self.publish_failures
        )
    }

    /// Multi-line report printed at the end of a run
    pub fn summary(&self) -> String {
        let mut output = String::new();

        output.push_str("Journey Simulation Complete\n");
        output.push_str("===========================\n\n");

        match self.outcome {
            Some(outcome) => output.push_str(&format!("Outcome: {}\n", outcome)),
            None => output.push_str("Outcome: running\n"),
        }
        output.push_str(&format!("Ticks Published: {}\n", self.ticks_published));
        output.push_str(&format!(
            "Wall Duration: {:.2} seconds\n",
            self.wall_duration.as_secs_f64()
        ));
        if let Some(span) = self.simulated_span() {
            output.push_str(&format!("Simulated Time: {} seconds\n", span.num_seconds()));
        }
        if let Some(location) = self.final_location {
            output.push_str(&format!("Final Location: {}\n", location));
        }

        output.push_str("\nRecords Published:\n");
        for kind in RecordKind::ALL {
            output.push_str(&format!("   {}: {}\n", kind, self.published(kind)));
        }
        output.push_str(&format!("   Total: {}\n", self.total_published()));
        output.push_str(&format!("   Failures: {}\n", self.publish_failures));

        output
    }
}

impl fmt::Display for JourneyStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}
