//! Unit and handedness conversion between the composite and the host.
//!
//! The composite is right-handed, the host left-handed: Z positions flip sign and
//! every Euler component is negated before going from degrees to radians.

use crate::data::Vec3;
use crate::host::FrameTime;

/// Positions are copied through unchanged.
pub const IDENTITY_SCALE: f64 = 1.0;

/// SceneKit meters to host centimeters.
pub const SCENEKIT_METERS_SCALE: f64 = 1.0 / 100.0;

#[inline]
pub fn degrees_to_radians(deg: f64) -> f64 {
    deg.to_radians()
}

/// Scale a composite position and flip Z.
pub fn convert_position(p: Vec3, scale: f64) -> Vec3 {
    Vec3 {
        x: p.x * scale,
        y: p.y * scale,
        z: -p.z * scale,
    }
}

/// Negate each Euler component (degrees) and convert to radians.
pub fn convert_rotation(r: Vec3) -> Vec3 {
    Vec3 {
        x: degrees_to_radians(-r.x),
        y: degrees_to_radians(-r.y),
        z: degrees_to_radians(-r.z),
    }
}

/// Host time of sample `index` when resampled uniformly at `fps`.
#[inline]
pub fn frame_time(index: usize, fps: u32) -> FrameTime {
    FrameTime::new(index as i64, fps)
}
