//! REST helpers for the station backend.
//!
//! Browser builds (`csr`) issue real requests through `gloo-net`. Native
//! builds return an error so the state and view-model code can be compiled
//! and tested without a network stack.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use canvas::config::StreamConfig;

use super::types::Station;

fn station_endpoint(config: &StreamConfig, station_id: i64) -> String {
    format!("{}/api/v1/stations/{station_id}", config.backend_base)
}

#[cfg(any(test, feature = "csr"))]
fn station_request_failed_message(status: u16) -> String {
    format!("station request failed: {status}")
}

/// Fetch a station with its locations, detectors and ongoing tasks.
///
/// # Errors
///
/// Returns an error string if the request fails, the backend answers with a
/// non-success status, or the body does not parse.
pub async fn fetch_station(config: &StreamConfig, station_id: i64) -> Result<Station, String> {
    let url = station_endpoint(config, station_id);
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !(200..300).contains(&resp.status()) {
            return Err(station_request_failed_message(resp.status()));
        }
        resp.json::<Station>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(format!("not available outside the browser: {url}"))
    }
}
