use super::*;

#[test]
fn station_endpoint_uses_same_origin_by_default() {
    assert_eq!(station_endpoint(&StreamConfig::default(), 4), "/api/v1/stations/4");
}

#[test]
fn station_endpoint_prefixes_backend() {
    let config = StreamConfig::from_vars(Some("https://station.local/"), None).unwrap();
    assert_eq!(station_endpoint(&config, 12), "https://station.local/api/v1/stations/12");
}

#[test]
fn station_request_failed_message_formats_status() {
    assert_eq!(station_request_failed_message(503), "station request failed: 503");
}
