//! Event generation logic
//!
//! [`EventGenerator`] owns the journey's single seeded random sequence. Every random
//! field of every record is drawn from it in a fixed order, so a run with a fixed
//! seed and tick count reproduces the same values. Identifiers come from UUIDv4 and
//! do not consume that sequence.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

use crate::events::records::{vehicle_profile, INCIDENT_DESCRIPTION, SNAPSHOT_PLACEHOLDER};
use crate::events::{
    EmergencyIncidentRecord, GpsRecord, TickRecords, TrafficCameraRecord, VehicleRecord,
    WeatherRecord,
};
use crate::simulation::{JourneyState, SimulationResult};
use crate::types::{
    IncidentId, IncidentStatus, IncidentType, Location, RecordId, WeatherCondition,
};

/// Creates the records of each tick from one deterministic random sequence
#[derive(Debug)]
pub struct EventGenerator {
    /// Seed the sequence was started from
    seed: u64,
    /// The journey's random sequence
    rng: StdRng,
}

impl EventGenerator {
    /// Create a generator seeded with `seed`
    pub fn new(seed: u64) -> Self {
        info!("Initializing event generator with seed {}", seed);
        Self { seed, rng: StdRng::seed_from_u64(seed) }
    }

    /// Seed of the random sequence
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate the vehicle record, advancing position then clock
    ///
    /// This is the only generator that moves the journey forward; the other four
    /// reuse the timestamp and location it returns.
    pub fn generate_vehicle(
        &mut self,
        state: &mut JourneyState,
        device_id: &str,
    ) -> SimulationResult<VehicleRecord> {
        let location = state.advance_position(&mut self.rng);
        let timestamp = state.advance_clock(&mut self.rng)?;

        Ok(VehicleRecord {
            id: RecordId::new(),
            device_id: device_id.to_string(),
            timestamp,
            location,
            speed: self.rng.gen_range(10.0..=100.0),
            direction: vehicle_profile::DIRECTION.to_string(),
            make: vehicle_profile::MAKE.to_string(),
            model: vehicle_profile::MODEL.to_string(),
            year: vehicle_profile::YEAR.to_string(),
            fuel_type: vehicle_profile::FUEL_TYPE.to_string(),
        })
    }

    /// Generate a GPS record for a private vehicle
    pub fn generate_gps(&mut self, device_id: &str, timestamp: DateTime<Utc>) -> GpsRecord {
        self.generate_gps_for(device_id, timestamp, vehicle_profile::DEFAULT_VEHICLE_TYPE)
    }

    /// Generate a GPS record with an explicit vehicle type
    pub fn generate_gps_for(
        &mut self,
        device_id: &str,
        timestamp: DateTime<Utc>,
        vehicle_type: &str,
    ) -> GpsRecord {
        GpsRecord {
            id: RecordId::new(),
            device_id: device_id.to_string(),
            timestamp,
            speed: self.rng.gen_range(0.0..=100.0),
            direction: vehicle_profile::DIRECTION.to_string(),
            vehicle_type: vehicle_type.to_string(),
        }
    }

    /// Generate a traffic camera record; draws nothing from the random sequence
    pub fn generate_traffic_camera(
        &self,
        device_id: &str,
        timestamp: DateTime<Utc>,
        location: Location,
        camera_id: &str,
    ) -> TrafficCameraRecord {
        TrafficCameraRecord {
            id: RecordId::new(),
            device_id: device_id.to_string(),
            camera_id: camera_id.to_string(),
            timestamp,
            location,
            snapshot: SNAPSHOT_PLACEHOLDER.to_string(),
        }
    }

    /// Generate a weather record
    pub fn generate_weather(
        &mut self,
        device_id: &str,
        timestamp: DateTime<Utc>,
        location: Location,
    ) -> WeatherRecord {
        let temperature = self.rng.gen_range(-10.0..=45.0);
        let weather_condition = self.pick(&WeatherCondition::ALL);
        let precipitation = self.rng.gen_range(0.0..=25.0);
        let wind_speed = self.rng.gen_range(0.0..=50.0);
        let humidity = self.rng.gen_range(0.0..=100.0);
        let air_quality_index = self.rng.gen_range(0.0..=500.0);

        WeatherRecord {
            id: RecordId::new(),
            device_id: device_id.to_string(),
            timestamp,
            location,
            temperature,
            weather_condition,
            precipitation,
            wind_speed,
            humidity,
            air_quality_index,
        }
    }

    /// Generate an emergency incident record with its own incident identity
    pub fn generate_emergency_incident(
        &mut self,
        device_id: &str,
        timestamp: DateTime<Utc>,
        location: Location,
    ) -> EmergencyIncidentRecord {
        let incident_type = self.pick(&IncidentType::ALL);
        let status = self.pick(&IncidentStatus::ALL);

        EmergencyIncidentRecord {
            id: RecordId::new(),
            device_id: device_id.to_string(),
            timestamp,
            location,
            incident_id: IncidentId::new(),
            incident_type,
            status,
            description: INCIDENT_DESCRIPTION.to_string(),
        }
    }

    /// Generate the five correlated records of one tick
    #[instrument(skip(self, state))]
    pub fn generate_tick(
        &mut self,
        state: &mut JourneyState,
        device_id: &str,
        camera_id: &str,
    ) -> SimulationResult<TickRecords> {
        let vehicle = self.generate_vehicle(state, device_id)?;
        let timestamp = vehicle.timestamp;
        let location = vehicle.location;

        let gps = self.generate_gps(device_id, timestamp);
        let traffic = self.generate_traffic_camera(device_id, timestamp, location, camera_id);
        let weather = self.generate_weather(device_id, timestamp, location);
        let emergency = self.generate_emergency_incident(device_id, timestamp, location);

        debug!(%timestamp, %location, "Generated tick records");
        Ok(TickRecords { vehicle, gps, traffic, weather, emergency })
    }

    /// Uniform choice from a non-empty fixed set
    fn pick<T: Copy, const N: usize>(&mut self, values: &[T; N]) -> T {
        values[self.rng.gen_range(0..N)]
    }
}
