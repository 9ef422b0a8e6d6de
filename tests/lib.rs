// Integration tests test your crate's public API. They only have access to items
// in your crate that are marked pub. See the Cargo Targets page of the Cargo Book
// for more information.
//
//   https://doc.rust-lang.org/cargo/reference/cargo-targets.html#integration-tests
//

use journey_telemetry_simulator::*;



// Configuration surface
mod cli_argument_parsing_tests;

#[test]
fn test_core_id_types() {
    let record_id = RecordId::new();
    let incident_id = IncidentId::new();

    // Test that IDs are unique
    assert_ne!(record_id, RecordId::new());
    assert_ne!(incident_id, IncidentId::new());

    // Canonical hyphenated form
    assert_eq!(record_id.to_string().len(), 36);
    assert_eq!(incident_id.to_string().matches('-').count(), 4);
}

#[test]
fn test_default_configuration_is_valid() {
    let config = SimulationConfig::default();
    config.validate().unwrap();

    assert_eq!(config.device_id, "Vehicle-123");
    assert_eq!(config.camera_id, "camera123");
    assert_eq!(config.drift_mode, DriftMode::Stationary);
    assert_eq!(config.topics.topic_for(RecordKind::Vehicle), "vehicle_data");
}
