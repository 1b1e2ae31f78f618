//! Task snapshot and detector types as delivered by the station backend.
//!
//! The render loop treats an [`OngoingTask`] as an immutable per-frame
//! snapshot: it reads step geometry for the overlay and nothing else. The
//! remaining fields are carried so the consuming view can show task progress
//! next to the stream without a second model.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::geom::Rect;

/// Detection state of a tracked object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectState {
    Present,
    Missing,
    Uncertain,
    UnknownObject,
}

impl ObjectState {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Missing => "Missing",
            Self::Uncertain => "Uncertain",
            Self::UnknownObject => "UnknownObject",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskType {
    ToolKit,
    ItemKit,
    #[serde(rename = "QA")]
    Qa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskInstanceState {
    Completed,
    Abandoned,
    InProgress,
    Paused,
}

/// A physical object with its region in stream space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskObject {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl TaskObject {
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// One expected object-state transition.
///
/// Only `object` is required; the overlay reads nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub order_num: Option<i64>,
    #[serde(default)]
    pub ex_init_state: Option<ObjectState>,
    #[serde(default)]
    pub ex_subs_state: Option<ObjectState>,
    pub object: TaskObject,
}

impl Step {
    /// Short operator-facing verb for this step.
    ///
    /// `Present -> Missing` reads as "remove", `Missing -> Present` as
    /// "replace"; any other pair is spelled out, with `?` for an unknown side.
    #[must_use]
    pub fn action_label(&self) -> String {
        match (self.ex_init_state, self.ex_subs_state) {
            (Some(ObjectState::Present), Some(ObjectState::Missing)) => "remove".to_owned(),
            (Some(ObjectState::Missing), Some(ObjectState::Present)) => "replace".to_owned(),
            (init, subs) => format!("{} -> {}", state_str(init), state_str(subs)),
        }
    }
}

fn state_str(state: Option<ObjectState>) -> &'static str {
    state.map_or("?", ObjectState::as_str)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskEvent {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub failure_reason: Option<String>,
    pub step: Step,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OngoingTaskInstance {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub state: Option<TaskInstanceState>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub events: Vec<TaskEvent>,
    #[serde(default)]
    pub current_order_num: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub current_order_num_remaining_steps: Vec<Step>,
}

/// The task currently running at a location.
///
/// Every field is optional on the wire. A partial snapshot still yields
/// whatever step geometry it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OngoingTask {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub task_type: Option<TaskType>,
    #[serde(default)]
    pub job: Option<Job>,
    #[serde(default)]
    pub ongoing_instance: Option<OngoingTaskInstance>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub steps: Vec<Step>,
    #[serde(default)]
    pub max_order_num: i64,
}

impl OngoingTask {
    /// Steps still due at the current order number; empty without an instance.
    #[must_use]
    pub fn remaining_steps(&self) -> &[Step] {
        self.ongoing_instance
            .as_ref()
            .map_or(&[], |inst| inst.current_order_num_remaining_steps.as_slice())
    }
}

/// Deserialize a list that the backend may send as `null`.
///
/// # Errors
///
/// Fails only if the value is neither `null` nor a list of `T`.
pub fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================
// Detector
// =============================================================

/// Operating state reported by a detector. A detector may be in several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectorState {
    Off,
    Standby,
    Streaming,
    Monitoring,
    Locating,
}

impl DetectorState {
    fn parse(token: &str) -> Option<Self> {
        match token {
            "Off" => Some(Self::Off),
            "Standby" => Some(Self::Standby),
            "Streaming" => Some(Self::Streaming),
            "Monitoring" => Some(Self::Monitoring),
            "Locating" => Some(Self::Locating),
            _ => None,
        }
    }
}

/// Parse the backend's comma-separated state list, dropping unknown tokens.
#[must_use]
pub fn parse_detector_state(raw: &str) -> Vec<DetectorState> {
    raw.split(',')
        .map(str::trim)
        .filter_map(DetectorState::parse)
        .collect()
}

/// A detector as the backend reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detector {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub mac_address: String,
    #[serde(serialize_with = "serialize_state", deserialize_with = "deserialize_state", default)]
    pub state: Vec<DetectorState>,
}

impl Detector {
    #[must_use]
    pub fn has_state(&self, state: DetectorState) -> bool {
        self.state.contains(&state)
    }
}

fn serialize_state<S>(state: &[DetectorState], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let joined = state
        .iter()
        .map(|s| format!("{s:?}"))
        .collect::<Vec<_>>()
        .join(",");
    serializer.serialize_str(&joined)
}

fn deserialize_state<'de, D>(deserializer: D) -> Result<Vec<DetectorState>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(parse_detector_state(&raw))
}
