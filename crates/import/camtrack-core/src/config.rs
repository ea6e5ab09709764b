//! Import configuration.

use serde::{Deserialize, Serialize};

use crate::convert::IDENTITY_SCALE;
use crate::error::ImportError;

/// Frame rate used when the composite's own rate is not requested.
pub const DEFAULT_FPS: u32 = 60;

/// Name of the host object that receives the curves.
pub const DEFAULT_TARGET_NAME: &str = "Camera";

/// Where the import frame rate comes from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameRateSource {
    /// Always use this rate, whatever the composite says.
    Fixed(u32),
    /// Read `FrameRate` from the composite's AudioVideoSettings.
    Document,
}

impl Default for FrameRateSource {
    fn default() -> Self {
        FrameRateSource::Fixed(DEFAULT_FPS)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub frame_rate: FrameRateSource,
    /// Multiplier applied to positions. See [`crate::SCENEKIT_METERS_SCALE`].
    pub scale: f64,
    /// Host object name looked up by [`crate::apply_to_document`].
    pub target_name: String,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            frame_rate: FrameRateSource::default(),
            scale: IDENTITY_SCALE,
            target_name: DEFAULT_TARGET_NAME.to_string(),
        }
    }
}

impl ImportConfig {
    /// Decode a config from JSON; omitted fields keep their defaults.
    pub fn from_json(s: &str) -> Result<Self, ImportError> {
        serde_json::from_str(s).map_err(|e| ImportError::Config(e.to_string()))
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_frame_rate(mut self, frame_rate: FrameRateSource) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    pub fn with_target_name(mut self, name: impl Into<String>) -> Self {
        self.target_name = name.into();
        self
    }
}
