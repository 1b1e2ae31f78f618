#![allow(clippy::float_cmp)]

use super::*;
use canvas::task::DetectorState;

fn detector(id: i64) -> Detector {
    Detector { id, name: format!("cam-{id}"), mac_address: String::new(), state: vec![DetectorState::Streaming] }
}

fn location(id: i64, detector: Option<Detector>) -> Location {
    Location { id, name: format!("loc-{id}"), detector, has_snapshot: false, ongoing_task: None }
}

fn station(locations: Vec<Location>) -> Station {
    Station { id: 1, name: "station".into(), locations }
}

// =============================================================
// apply_station / select_location
// =============================================================

#[test]
fn apply_station_selects_first_location() {
    let mut state = DashboardState { loading: true, error: Some("old".into()), ..Default::default() };
    state.apply_station(station(vec![location(5, None), location(6, None)]));
    assert_eq!(state.selected_location, Some(5));
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn apply_station_keeps_surviving_selection() {
    let mut state = DashboardState::default();
    state.apply_station(station(vec![location(5, None), location(6, None)]));
    assert!(state.select_location(6));
    state.apply_station(station(vec![location(5, None), location(6, None)]));
    assert_eq!(state.selected_location, Some(6));
}

#[test]
fn apply_station_drops_vanished_selection() {
    let mut state = DashboardState::default();
    state.apply_station(station(vec![location(5, None), location(6, None)]));
    state.select_location(6);
    state.apply_station(station(vec![location(7, None)]));
    assert_eq!(state.selected_location, Some(7));
}

#[test]
fn select_unknown_location_is_rejected() {
    let mut state = DashboardState::default();
    state.apply_station(station(vec![location(5, None)]));
    assert!(!state.select_location(99));
    assert!(!state.select_location(5));
    assert_eq!(state.selected_location, Some(5));
}

#[test]
fn selecting_resets_fps() {
    let mut state = DashboardState::default();
    state.apply_station(station(vec![location(5, None), location(6, None)]));
    state.stream_fps = Some(24.0);
    state.select_location(6);
    assert!(state.stream_fps.is_none());
}

#[test]
fn apply_error_stops_loading() {
    let mut state = DashboardState { loading: true, ..Default::default() };
    state.apply_error("boom".into());
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("boom"));
}

// =============================================================
// Derived values
// =============================================================

#[test]
fn source_is_live_only_while_playing_with_detector() {
    let config = StreamConfig::default();
    let mut state = DashboardState::default();
    state.apply_station(station(vec![location(5, Some(detector(7)))]));

    assert!(!state.source(&config).is_live());
    state.playing = true;
    assert_eq!(state.source(&config).url(), "/api/v1/detectors/7/stream");
}

#[test]
fn source_without_detector_is_placeholder() {
    let config = StreamConfig::default();
    let mut state = DashboardState { playing: true, ..Default::default() };
    state.apply_station(station(vec![location(5, None)]));
    assert_eq!(state.source(&config), StreamSource::Placeholder(config.placeholder_url.clone()));
}

#[test]
fn fps_label_rounds() {
    let mut state = DashboardState::default();
    assert_eq!(state.fps_label(), "-- fps");
    state.stream_fps = Some(29.6);
    assert_eq!(state.fps_label(), "30 fps");
}

#[test]
fn detector_status_lists_states() {
    let mut state = DashboardState::default();
    assert_eq!(state.detector_status(), "No detector");

    let mut d = detector(1);
    d.state.push(DetectorState::Monitoring);
    state.apply_station(station(vec![location(5, Some(d))]));
    assert_eq!(state.detector_status(), "Streaming, Monitoring");
}

#[test]
fn detector_status_without_states_is_unknown() {
    let mut state = DashboardState::default();
    let mut d = detector(1);
    d.state.clear();
    state.apply_station(station(vec![location(5, Some(d))]));
    assert_eq!(state.detector_status(), "Unknown");
}

// =============================================================
// station_id_from_query
// =============================================================

#[test]
fn station_id_parses_from_query() {
    assert_eq!(station_id_from_query("?station=3"), Some(3));
    assert_eq!(station_id_from_query("?a=1&station=42&b=2"), Some(42));
}

#[test]
fn station_id_missing_or_invalid_is_none() {
    assert_eq!(station_id_from_query(""), None);
    assert_eq!(station_id_from_query("?station=abc"), None);
    assert_eq!(station_id_from_query("?other=1"), None);
}
