//! Template model: named regions of interest in stream space.
//!
//! A template comes from one of two feeds. The editor supplies templates that
//! are still being defined and carry no presence signal. The live detection
//! feed supplies the same regions with a `present` flag attached. On the wire
//! both share one JSON shape and differ only by whether `present` exists;
//! here that difference is resolved once, at deserialization, into
//! [`Presence`].

#[cfg(test)]
#[path = "template_test.rs"]
mod template_test;

use serde::{Deserialize, Serialize};

use crate::geom::Rect;

/// Error returned when a wire template violates the model's invariants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TemplateError {
    /// Width or height was negative.
    #[error("template '{name}' has negative size {width}x{height}")]
    NegativeSize { name: String, width: f64, height: f64 },
}

/// Whether a template carries a live presence signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Presence {
    /// Definition-time template with no detection attached.
    #[default]
    Untracked,
    /// Live template; `present` reports whether the object was detected.
    Tracked { present: bool },
}

impl Presence {
    #[must_use]
    pub fn is_tracked(self) -> bool {
        matches!(self, Self::Tracked { .. })
    }
}

/// A labeled axis-aligned region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WireTemplate", into = "WireTemplate")]
pub struct Template {
    pub name: String,
    pub rect: Rect,
    pub presence: Presence,
}

impl Template {
    /// Build a template without a presence signal.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NegativeSize`] if `rect` has a negative side.
    pub fn untracked(name: impl Into<String>, rect: Rect) -> Result<Self, TemplateError> {
        Self::with_presence(name.into(), rect, Presence::Untracked)
    }

    /// Build a template reporting live presence.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NegativeSize`] if `rect` has a negative side.
    pub fn tracked(name: impl Into<String>, rect: Rect, present: bool) -> Result<Self, TemplateError> {
        Self::with_presence(name.into(), rect, Presence::Tracked { present })
    }

    fn with_presence(name: String, rect: Rect, presence: Presence) -> Result<Self, TemplateError> {
        if rect.width < 0.0 || rect.height < 0.0 {
            return Err(TemplateError::NegativeSize { name, width: rect.width, height: rect.height });
        }
        Ok(Self { name, rect, presence })
    }
}

/// JSON shape shared by the editor and the detection feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WireTemplate {
    name: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    present: Option<bool>,
}

impl TryFrom<WireTemplate> for Template {
    type Error = TemplateError;

    fn try_from(wire: WireTemplate) -> Result<Self, Self::Error> {
        let rect = Rect::new(wire.x, wire.y, wire.width, wire.height);
        let presence = match wire.present {
            Some(present) => Presence::Tracked { present },
            None => Presence::Untracked,
        };
        Self::with_presence(wire.name, rect, presence)
    }
}

impl From<Template> for WireTemplate {
    fn from(t: Template) -> Self {
        let present = match t.presence {
            Presence::Tracked { present } => Some(present),
            Presence::Untracked => None,
        };
        Self { name: t.name, x: t.rect.x, y: t.rect.y, width: t.rect.width, height: t.rect.height, present }
    }
}
