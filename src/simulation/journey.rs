//! The journey loop
//!
//! [`Journey`] drives the simulation one tick at a time: generate the five
//! correlated records, check for arrival, publish, then sleep. It owns the
//! journey state, the generator and the publisher, so nothing about a run lives
//! outside this value.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tracing::field::display;
use tracing::{debug, error, info, instrument, warn};

use crate::events::{EventGenerator, TelemetryRecord, TickRecords};
use crate::publish::Publisher;
use crate::sim_event;
use crate::simulation::{
    ArrivalCondition, JourneyState, JourneyStatistics, SimulationResult, TerminationCondition,
};
use crate::types::SimulationConfig;

/// Cooperative stop request shared with a signal handler
///
/// Clones share the same flag. The loop checks it between ticks and while
/// sleeping, so a stop requested mid-tick takes effect after that tick's
/// publishes and a stop during the sleep ends it early.
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Arc<AtomicBool>);

impl StopSignal {
    /// A signal that has not been triggered
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the journey to stop
    pub fn trigger(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether a stop has been requested
    pub fn is_triggered(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Sleep for `duration` in short slices, returning early once triggered
    ///
    /// Returns whether the signal was triggered.
    pub fn sleep(&self, duration: Duration) -> bool {
        let deadline = Instant::now() + duration;
        loop {
            if self.is_triggered() {
                return true;
            }
            let now = Instant::now();
            if now >= deadline {
                return false;
            }
            thread::sleep((deadline - now).min(STOP_POLL_INTERVAL));
        }
    }
}

/// Longest uninterrupted sleep between stop checks
const STOP_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// How a journey ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JourneyOutcome {
    /// The termination condition was met on tick `ticks`; that tick was not published
    Arrived {
        /// Ticks generated, including the arrival tick
        ticks: u64,
    },
    /// The stop signal was observed after `ticks` published ticks
    Interrupted {
        /// Ticks published
        ticks: u64,
    },
    /// The configured tick limit was reached
    TickLimitReached {
        /// Ticks published
        ticks: u64,
    },
}

impl JourneyOutcome {
    /// Tick count carried by the outcome
    pub fn ticks(&self) -> u64 {
        match self {
            JourneyOutcome::Arrived { ticks }
            | JourneyOutcome::Interrupted { ticks }
            | JourneyOutcome::TickLimitReached { ticks } => *ticks,
        }
    }

    /// Whether the vehicle reached its destination
    pub fn is_arrival(&self) -> bool {
        matches!(self, JourneyOutcome::Arrived { .. })
    }
}

impl fmt::Display for JourneyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JourneyOutcome::Arrived { ticks } => write!(f, "arrived after {} ticks", ticks),
            JourneyOutcome::Interrupted { ticks } => write!(f, "interrupted after {} ticks", ticks),
            JourneyOutcome::TickLimitReached { ticks } => {
                write!(f, "tick limit reached after {} ticks", ticks)
            }
        }
    }
}

/// A single vehicle journey publishing through `P` until `C` is met
#[derive(Debug)]
pub struct Journey<P, C = ArrivalCondition> {
    config: SimulationConfig,
    state: JourneyState,
    generator: EventGenerator,
    publisher: P,
    condition: C,
    stop: StopSignal,
    statistics: JourneyStatistics,
}

impl<P: Publisher> Journey<P, ArrivalCondition> {
    /// Create a journey that ends on arrival at the configured destination
    pub fn new(config: SimulationConfig, publisher: P) -> SimulationResult<Self> {
        let condition = ArrivalCondition::new(config.destination);
        Self::with_condition(config, publisher, condition)
    }
}

impl<P: Publisher, C: TerminationCondition> Journey<P, C> {
    /// Create a journey with a custom termination condition
    #[instrument(skip_all, fields(device_id = %config.device_id, seed = config.seed))]
    pub fn with_condition(config: SimulationConfig, publisher: P, condition: C) -> SimulationResult<Self> {
        config.validate()?;

        info!(
            "Initializing journey from {} to {} ({} drift)",
            config.origin, config.destination, config.drift_mode
        );
        info!("Using deterministic seed: {}", config.seed);

        let state = JourneyState::from_config(&config);
        let statistics = JourneyStatistics::starting_at(state.now());
        let generator = EventGenerator::new(config.seed);

        Ok(Self {
            config,
            state,
            generator,
            publisher,
            condition,
            stop: StopSignal::new(),
            statistics,
        })
    }

    /// Use an existing stop signal, typically one shared with a Ctrl-C handler
    pub fn with_stop_signal(mut self, stop: StopSignal) -> Self {
        self.stop = stop;
        self
    }

    /// A handle that stops this journey when triggered
    pub fn stop_signal(&self) -> StopSignal {
        self.stop.clone()
    }

    /// The configuration this journey runs with
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Current clock and position state
    pub fn state(&self) -> &JourneyState {
        &self.state
    }

    /// Statistics collected so far
    pub fn statistics(&self) -> &JourneyStatistics {
        &self.statistics
    }

    /// The publisher records are written to
    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Take the publisher back, ending the journey
    pub fn into_publisher(self) -> P {
        self.publisher
    }

    /// Run ticks until arrival, interruption or the tick limit
    ///
    /// Publish failures are logged and counted; any other error ends the run.
    pub fn run(&mut self) -> SimulationResult<JourneyOutcome> {
        let started = Instant::now();
        let interval = self.config.tick_interval();
        let mut published_ticks: u64 = 0;

        sim_event!(
            info,
            "Journey started",
            origin = display(self.config.origin),
            destination = display(self.config.destination)
        );

        let outcome = loop {
            if self.stop.is_triggered() {
                warn!("Simulation ended by the user");
                break JourneyOutcome::Interrupted { ticks: published_ticks };
            }

            let tick = published_ticks + 1;
            let records = self
                .generator
                .generate_tick(&mut self.state, &self.config.device_id, &self.config.camera_id)
                .map_err(|e| {
                    error!(tick, error = %e, "Failed to generate tick");
                    e
                })?;
            self.statistics.record_tick(records.timestamp(), records.location());

            if self.condition.is_met(records.location()) {
                warn!(location = %records.location(), tick, "Vehicle has reached the destination");
                break JourneyOutcome::Arrived { ticks: tick };
            }

            self.publish_tick(&records)?;
            published_ticks = tick;
            self.statistics.ticks_published = published_ticks;

            if let Some(max_ticks) = self.config.max_ticks {
                if published_ticks >= max_ticks {
                    warn!(max_ticks, "Tick limit reached before arrival");
                    break JourneyOutcome::TickLimitReached { ticks: published_ticks };
                }
            }

            if !interval.is_zero() {
                self.stop.sleep(interval);
            }
        };

        self.statistics.outcome = Some(outcome);
        self.statistics.wall_duration = started.elapsed();
        sim_event!(
            info,
            "Journey finished",
            outcome = display(outcome),
            summary = self.statistics.compact_summary().as_str()
        );

        Ok(outcome)
    }

    /// Publish the five records of a tick in stream order
    fn publish_tick(&mut self, records: &TickRecords) -> SimulationResult<()> {
        self.publish_record(&records.vehicle)?;
        self.publish_record(&records.gps)?;
        self.publish_record(&records.traffic)?;
        self.publish_record(&records.weather)?;
        self.publish_record(&records.emergency)?;
        debug!(timestamp = %records.timestamp(), "Tick published");
        Ok(())
    }

    /// Publish one record and wait for its acknowledgment
    fn publish_record<R: TelemetryRecord>(&mut self, record: &R) -> SimulationResult<()> {
        let topic = self.config.topics.topic_for(R::KIND);
        let key = record.record_id().to_string();
        let value = serde_json::to_vec(record)?;

        let result = self
            .publisher
            .publish(topic, &key, &value)
            .and_then(|()| self.publisher.flush());

        match result {
            Ok(()) => self.statistics.record_published(R::KIND),
            Err(error) => {
                warn!(topic, key = %key, error = %error, "Failed to publish record");
                self.statistics.record_failure();
            }
        }
        Ok(())
    }
}
