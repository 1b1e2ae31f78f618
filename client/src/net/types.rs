//! Station hierarchy as returned by the backend.
//!
//! Only the leaves the dashboard renders are modeled: a station and its
//! locations. Detector and task payloads reuse the `canvas` types so the
//! stream view can consume them without conversion.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use canvas::task::{Detector, OngoingTask, null_as_empty};
use serde::{Deserialize, Deserializer, Serialize};

/// A work position within a station, optionally watched by a detector.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub detector: Option<Detector>,
    #[serde(default)]
    pub has_snapshot: bool,
    #[serde(default, deserialize_with = "task_or_none")]
    pub ongoing_task: Option<OngoingTask>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub locations: Vec<Location>,
}

/// A malformed task snapshot drops the overlay, not the whole station.
fn task_or_none<'de, D>(deserializer: D) -> Result<Option<OngoingTask>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<serde_json::Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    match serde_json::from_value(raw) {
        Ok(task) => Ok(Some(task)),
        Err(_) => Ok(None),
    }
}
