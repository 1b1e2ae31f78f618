//! Stream configuration and source selection.
//!
//! The render loop never fetches anything itself. It only needs a URL the
//! platform can load as an image. [`StreamSource::resolve`] picks that URL:
//! the detector stream while playing, the placeholder otherwise.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::task::Detector;

pub const DEFAULT_PLACEHOLDER_URL: &str = "https://via.placeholder.com/640x360";

/// Error returned by [`StreamConfig::from_vars`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Backend base was neither absolute http(s) nor a root-relative path.
    #[error("invalid backend url '{0}' (expected http://, https:// or a path starting with /)")]
    InvalidBackendUrl(String),
}

/// Where the stream comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConfig {
    /// Backend origin without a trailing slash. Empty means same origin.
    pub backend_base: String,
    /// Image shown while nothing is streaming.
    pub placeholder_url: String,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self { backend_base: String::new(), placeholder_url: DEFAULT_PLACEHOLDER_URL.to_owned() }
    }
}

impl StreamConfig {
    /// Build config from optional raw values, typically baked in at build time.
    ///
    /// - `backend`: backend origin; absent or blank means same origin
    /// - `placeholder`: placeholder image URL; default [`DEFAULT_PLACEHOLDER_URL`]
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBackendUrl`] for a non-empty backend that
    /// is not `http://`, `https://` or root-relative.
    pub fn from_vars(backend: Option<&str>, placeholder: Option<&str>) -> Result<Self, ConfigError> {
        let backend_base = backend.unwrap_or("").trim().trim_end_matches('/').to_owned();
        if !backend_base.is_empty() && !is_supported_base(&backend_base) {
            return Err(ConfigError::InvalidBackendUrl(backend_base));
        }

        let placeholder_url = placeholder
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_PLACEHOLDER_URL)
            .to_owned();

        Ok(Self { backend_base, placeholder_url })
    }

    /// Stream endpoint for a detector.
    #[must_use]
    pub fn stream_url(&self, detector_id: i64) -> String {
        format!("{}/api/v1/detectors/{detector_id}/stream", self.backend_base)
    }
}

fn is_supported_base(base: &str) -> bool {
    base.starts_with("http://") || base.starts_with("https://") || base.starts_with('/')
}

/// The image URL the render loop should load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamSource {
    /// Live MJPEG-style stream from a detector.
    Detector { id: i64, url: String },
    /// Static stand-in while paused or unconfigured.
    Placeholder(String),
}

impl StreamSource {
    /// Pick the source for the current playback state.
    ///
    /// Falls back to the placeholder when not playing or when no detector is
    /// configured (absent, or id 0 before it has been assigned); this is a
    /// normal state, not an error.
    #[must_use]
    pub fn resolve(config: &StreamConfig, playing: bool, detector: Option<&Detector>) -> Self {
        match detector {
            Some(d) if playing && d.id != 0 => Self::Detector { id: d.id, url: config.stream_url(d.id) },
            _ => Self::Placeholder(config.placeholder_url.clone()),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            Self::Detector { url, .. } => url,
            Self::Placeholder(url) => url,
        }
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Detector { .. })
    }
}
