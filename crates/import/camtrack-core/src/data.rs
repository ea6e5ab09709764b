//! Structured record extracted from a composite.

use serde::{Deserialize, Serialize};

use crate::error::ImportError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Pixel dimensions of the source composite (informational).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

/// Camera tracking samples in parallel arrays indexed by key ordinal.
///
/// `positions` always has one entry per time key. `rotations` and `zooms` are either
/// empty (no animation for that property) or the same length as `time_keys`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackingInfo {
    pub resolution: Resolution,
    pub fps: u32,
    /// Raw `Time` markers as written in the composite.
    pub time_keys: Vec<String>,
    pub positions: Vec<Vec3>,
    /// Euler angles in degrees.
    pub rotations: Vec<Vec3>,
    pub zooms: Vec<f64>,
}

impl TrackingInfo {
    /// Number of samples (keys on the position track).
    pub fn len(&self) -> usize {
        self.time_keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_keys.is_empty()
    }

    pub fn has_rotations(&self) -> bool {
        !self.rotations.is_empty()
    }

    pub fn has_zooms(&self) -> bool {
        !self.zooms.is_empty()
    }

    /// Parse the raw time markers as integers.
    pub fn time_key_values(&self) -> Result<Vec<i64>, ImportError> {
        self.time_keys
            .iter()
            .enumerate()
            .map(|(idx, raw)| {
                raw.trim()
                    .parse::<i64>()
                    .map_err(|e| ImportError::invalid(format!("time key {idx}"), e.to_string()))
            })
            .collect()
    }
}
