//! Dashboard state: the loaded station, the location being watched, and
//! playback.
//!
//! Held in an `RwSignal` and provided through context. The stream view reads
//! the selected location's detector and ongoing task from here each time they
//! change and forwards them to the render loop.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use canvas::config::{StreamConfig, StreamSource};
use canvas::task::{Detector, OngoingTask};

use crate::net::types::{Location, Station};

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub station: Option<Station>,
    pub selected_location: Option<i64>,
    pub playing: bool,
    pub show_fps: bool,
    pub stream_fps: Option<f64>,
    pub loading: bool,
    pub error: Option<String>,
}

impl DashboardState {
    /// Store a freshly fetched station.
    ///
    /// The current selection survives a refresh if the location still
    /// exists; otherwise the first location is selected.
    pub fn apply_station(&mut self, station: Station) {
        let keep = self
            .selected_location
            .filter(|id| station.locations.iter().any(|l| l.id == *id));
        self.selected_location = keep.or_else(|| station.locations.first().map(|l| l.id));
        self.station = Some(station);
        self.loading = false;
        self.error = None;
    }

    pub fn apply_error(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Select a location by id. Returns whether the selection changed.
    pub fn select_location(&mut self, id: i64) -> bool {
        let exists = self
            .station
            .as_ref()
            .is_some_and(|s| s.locations.iter().any(|l| l.id == id));
        if !exists || self.selected_location == Some(id) {
            return false;
        }
        self.selected_location = Some(id);
        self.stream_fps = None;
        true
    }

    #[must_use]
    pub fn location(&self) -> Option<&Location> {
        let id = self.selected_location?;
        self.station.as_ref()?.locations.iter().find(|l| l.id == id)
    }

    #[must_use]
    pub fn detector(&self) -> Option<&Detector> {
        self.location()?.detector.as_ref()
    }

    #[must_use]
    pub fn ongoing_task(&self) -> Option<&OngoingTask> {
        self.location()?.ongoing_task.as_ref()
    }

    #[must_use]
    pub fn source(&self, config: &StreamConfig) -> StreamSource {
        StreamSource::resolve(config, self.playing, self.detector())
    }

    #[must_use]
    pub fn fps_label(&self) -> String {
        match self.stream_fps {
            Some(fps) => format!("{} fps", fps.round()),
            None => "-- fps".to_owned(),
        }
    }

    /// Detector states for display, e.g. `"Streaming, Monitoring"`.
    #[must_use]
    pub fn detector_status(&self) -> String {
        match self.detector() {
            Some(d) if !d.state.is_empty() => d
                .state
                .iter()
                .map(|s| format!("{s:?}"))
                .collect::<Vec<_>>()
                .join(", "),
            Some(_) => "Unknown".to_owned(),
            None => "No detector".to_owned(),
        }
    }
}

/// Station id from a query string such as `?station=3&x=1`.
#[must_use]
pub fn station_id_from_query(search: &str) -> Option<i64> {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("station="))
        .and_then(|v| match v.parse() {
            Ok(id) => Some(id),
            Err(_) => None,
        })
}
