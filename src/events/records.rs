//! Telemetry record structures
//!
//! One record of each kind is produced per tick. Records are immutable values:
//! created, published, then dropped. Field names on the wire follow the topics'
//! established JSON schema, including the `deviceId` / `deviceID` spelling split
//! between vehicle and the other streams.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::types::{
    IncidentId, IncidentStatus, IncidentType, Location, RecordId, RecordKind, WeatherCondition,
};

/// Fixed metadata of the simulated vehicle
pub mod vehicle_profile {
    /// Heading reported by vehicle and GPS records
    pub const DIRECTION: &str = "North-East";
    /// Vehicle manufacturer
    pub const MAKE: &str = "VW";
    /// Vehicle model
    pub const MODEL: &str = "Taigo";
    /// Model year
    pub const YEAR: &str = "2024";
    /// Fuel type
    pub const FUEL_TYPE: &str = "Hybrid";
    /// Vehicle type reported by GPS records unless told otherwise
    pub const DEFAULT_VEHICLE_TYPE: &str = "private";
}

/// Placeholder traffic camera payload
pub const SNAPSHOT_PLACEHOLDER: &str = "Base64Encoded";

/// Placeholder incident description
pub const INCIDENT_DESCRIPTION: &str = "Description of the incident";

/// Common view over the five record kinds
pub trait TelemetryRecord: Serialize + Debug {
    /// Which stream this record belongs to
    const KIND: RecordKind;

    /// Unique identifier, also used as the publish key
    fn record_id(&self) -> RecordId;

    /// Device that produced the record
    fn device_id(&self) -> &str;

    /// Tick timestamp
    fn timestamp(&self) -> DateTime<Utc>;

    /// Tick location, for the kinds that carry one
    fn location(&self) -> Option<Location>;
}

/// Vehicle position and static vehicle metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// Record identifier
    pub id: RecordId,
    /// Device identifier
    #[serde(rename = "deviceId")]
    pub device_id: String,
    /// Tick timestamp
    pub timestamp: DateTime<Utc>,
    /// Tick location
    pub location: Location,
    /// Speed in km/h, within [10, 100]
    pub speed: f64,
    /// Heading
    pub direction: String,
    /// Manufacturer
    pub make: String,
    /// Model
    pub model: String,
    /// Model year
    pub year: String,
    /// Fuel type
    #[serde(rename = "fuelType")]
    pub fuel_type: String,
}

/// GPS reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpsRecord {
    /// Record identifier
    pub id: RecordId,
    /// Device identifier
    #[serde(rename = "deviceID")]
    pub device_id: String,
    /// Tick timestamp
    pub timestamp: DateTime<Utc>,
    /// Speed in km/h, within [0, 100]
    pub speed: f64,
    /// Heading
    pub direction: String,
    /// Vehicle category
    #[serde(rename = "vehicleType")]
    pub vehicle_type: String,
}

/// Traffic camera snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrafficCameraRecord {
    /// Record identifier
    pub id: RecordId,
    /// Device identifier
    #[serde(rename = "deviceID")]
    pub device_id: String,
    /// Camera identifier
    pub camera_id: String,
    /// Tick timestamp
    pub timestamp: DateTime<Utc>,
    /// Tick location
    pub location: Location,
    /// Encoded snapshot
    pub snapshot: String,
}

/// Weather observation at the vehicle location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRecord {
    /// Record identifier
    pub id: RecordId,
    /// Device identifier
    #[serde(rename = "deviceID")]
    pub device_id: String,
    /// Tick timestamp
    pub timestamp: DateTime<Utc>,
    /// Tick location
    pub location: Location,
    /// Temperature in °C, within [-10, 45]
    pub temperature: f64,
    /// Sky condition
    pub weather_condition: WeatherCondition,
    /// Precipitation, within [0, 25]
    pub precipitation: f64,
    /// Wind speed, within [0, 50]
    pub wind_speed: f64,
    /// Relative humidity, within [0, 100]
    pub humidity: f64,
    /// Air quality index, within [0, 500]
    pub air_quality_index: f64,
}

/// Emergency incident report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyIncidentRecord {
    /// Record identifier
    pub id: RecordId,
    /// Device identifier
    #[serde(rename = "deviceID")]
    pub device_id: String,
    /// Tick timestamp
    pub timestamp: DateTime<Utc>,
    /// Tick location
    pub location: Location,
    /// Identity of the incident itself, distinct from `id`
    #[serde(rename = "incidentId")]
    pub incident_id: IncidentId,
    /// Incident kind
    #[serde(rename = "type")]
    pub incident_type: IncidentType,
    /// Incident status
    pub status: IncidentStatus,
    /// Free-text description
    pub description: String,
}

macro_rules! impl_located_record {
    ($record:ty, $kind:expr) => {
        impl TelemetryRecord for $record {
            const KIND: RecordKind = $kind;

            fn record_id(&self) -> RecordId {
                self.id
            }

            fn device_id(&self) -> &str {
                &self.device_id
            }

            fn timestamp(&self) -> DateTime<Utc> {
                self.timestamp
            }

            fn location(&self) -> Option<Location> {
                Some(self.location)
            }
        }
    };
}

impl_located_record!(VehicleRecord, RecordKind::Vehicle);
impl_located_record!(TrafficCameraRecord, RecordKind::TrafficCamera);
impl_located_record!(WeatherRecord, RecordKind::Weather);
impl_located_record!(EmergencyIncidentRecord, RecordKind::EmergencyIncident);

impl TelemetryRecord for GpsRecord {
    const KIND: RecordKind = RecordKind::Gps;

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn device_id(&self) -> &str {
        &self.device_id
    }

    fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    fn location(&self) -> Option<Location> {
        None
    }
}

/// The five correlated records of one tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickRecords {
    /// Vehicle record, the source of the tick's timestamp and location
    pub vehicle: VehicleRecord,
    /// GPS record
    pub gps: GpsRecord,
    /// Traffic camera record
    pub traffic: TrafficCameraRecord,
    /// Weather record
    pub weather: WeatherRecord,
    /// Emergency incident record
    pub emergency: EmergencyIncidentRecord,
}

impl TickRecords {
    /// Shared tick timestamp
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.vehicle.timestamp
    }

    /// Shared tick location
    pub fn location(&self) -> Location {
        self.vehicle.location
    }

    /// Whether all five records agree on device, timestamp and (where carried) location
    pub fn is_correlated(&self) -> bool {
        let device = self.vehicle.device_id();
        let timestamp = self.vehicle.timestamp();
        let location = self.vehicle.location();

        let same = |d: &str, t: DateTime<Utc>, l: Option<Location>| {
            d == device && t == timestamp && (l.is_none() || l == location)
        };

        same(self.gps.device_id(), self.gps.timestamp(), self.gps.location())
            && same(self.traffic.device_id(), self.traffic.timestamp(), self.traffic.location())
            && same(self.weather.device_id(), self.weather.timestamp(), self.weather.location())
            && same(
                self.emergency.device_id(),
                self.emergency.timestamp(),
                self.emergency.location(),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_weather() -> WeatherRecord {
        WeatherRecord {
            id: RecordId::new(),
            device_id: "Vehicle-123".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 8, 10, 0, 0).unwrap(),
            location: Location::new(45.2, 7.8),
            temperature: 21.5,
            weather_condition: WeatherCondition::Rainy,
            precipitation: 3.0,
            wind_speed: 12.0,
            humidity: 80.0,
            air_quality_index: 42.0,
        }
    }

    #[test]
    fn test_weather_wire_field_names() {
        let value = serde_json::to_value(sample_weather()).unwrap();
        let object = value.as_object().unwrap();

        for field in [
            "id",
            "deviceID",
            "timestamp",
            "location",
            "temperature",
            "weatherCondition",
            "precipitation",
            "windSpeed",
            "humidity",
            "airQualityIndex",
        ] {
            assert!(object.contains_key(field), "missing field {}", field);
        }
        assert_eq!(object["weatherCondition"], "rainy");
        assert_eq!(object["location"], serde_json::json!([45.2, 7.8]));
    }

    #[test]
    fn test_emergency_wire_field_names() {
        let record = EmergencyIncidentRecord {
            id: RecordId::new(),
            device_id: "Vehicle-123".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 8, 10, 0, 0).unwrap(),
            location: Location::new(45.2, 7.8),
            incident_id: IncidentId::new(),
            incident_type: IncidentType::Fire,
            status: IncidentStatus::Active,
            description: INCIDENT_DESCRIPTION.to_string(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "Fire");
        assert_eq!(value["status"], "Active");
        assert_eq!(value["incidentId"], record.incident_id.to_string());
        assert_eq!(value["id"], record.id.to_string());
        assert_eq!(EmergencyIncidentRecord::KIND, RecordKind::EmergencyIncident);
    }

    #[test]
    fn test_gps_has_no_location() {
        let record = GpsRecord {
            id: RecordId::new(),
            device_id: "Vehicle-123".to_string(),
            timestamp: Utc::now(),
            speed: 50.0,
            direction: vehicle_profile::DIRECTION.to_string(),
            vehicle_type: vehicle_profile::DEFAULT_VEHICLE_TYPE.to_string(),
        };

        assert!(record.location().is_none());
        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("location").is_none());
        assert_eq!(value["vehicleType"], "private");
    }
}
