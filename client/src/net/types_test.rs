use super::*;
use canvas::task::{DetectorState, TaskType};

#[test]
fn station_deserializes_nested_locations() {
    let raw = r#"{
        "id": 3,
        "name": "Line 1 / Station A",
        "locations": [
            {
                "id": 10,
                "name": "Bench",
                "hasSnapshot": true,
                "detector": { "id": 7, "name": "cam-7", "macAddress": "aa:bb", "state": "Streaming, Monitoring, Bogus" },
                "ongoingTask": {
                    "id": 1,
                    "name": "Kit check",
                    "type": "QA",
                    "job": { "id": 2, "name": "Night shift" },
                    "steps": [],
                    "maxOrderNum": 0
                }
            },
            { "id": 11, "name": "Shelf" }
        ]
    }"#;
    let station: Station = serde_json::from_str(raw).unwrap();
    assert_eq!(station.locations.len(), 2);

    let bench = &station.locations[0];
    assert!(bench.has_snapshot);
    let detector = bench.detector.as_ref().unwrap();
    assert_eq!(detector.state, vec![DetectorState::Streaming, DetectorState::Monitoring]);
    assert_eq!(bench.ongoing_task.as_ref().and_then(|t| t.task_type), Some(TaskType::Qa));

    let shelf = &station.locations[1];
    assert!(shelf.detector.is_none());
    assert!(shelf.ongoing_task.is_none());
    assert!(!shelf.has_snapshot);
}

#[test]
fn station_without_locations_is_empty() {
    let station: Station = serde_json::from_str(r#"{"id": 1, "name": "s"}"#).unwrap();
    assert!(station.locations.is_empty());
}

#[test]
fn null_locations_read_as_empty() {
    let station: Station = serde_json::from_str(r#"{"id": 1, "name": "s", "locations": null}"#).unwrap();
    assert!(station.locations.is_empty());
}

#[test]
fn malformed_task_keeps_location() {
    let raw = r#"{
        "id": 1,
        "name": "s",
        "locations": [
            {
                "id": 10,
                "name": "Bench",
                "detector": { "id": 7, "name": "cam-7", "state": "Streaming" },
                "ongoingTask": { "steps": [{ "object": "not a rect" }] }
            }
        ]
    }"#;
    let station: Station = serde_json::from_str(raw).unwrap();
    let bench = &station.locations[0];
    assert!(bench.ongoing_task.is_none());
    assert_eq!(bench.detector.as_ref().map(|d| d.id), Some(7));
}

#[test]
fn partial_task_keeps_step_geometry() {
    let raw = r#"{
        "id": 10,
        "name": "Bench",
        "ongoingTask": { "steps": [{ "object": { "x": 1, "y": 2, "width": 3, "height": 4 } }] }
    }"#;
    let location: Location = serde_json::from_str(raw).unwrap();
    let task = location.ongoing_task.unwrap();
    assert_eq!(task.steps[0].object.rect(), canvas::geom::Rect::new(1.0, 2.0, 3.0, 4.0));
}
