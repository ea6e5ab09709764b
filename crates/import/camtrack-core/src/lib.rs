//! camtrack-core
//!
//! Reads the camera tracking stored in a HitFilm composite (`.hfcs`) and writes it
//! as keyframe curves onto a camera in a 3D host. The host is only reached through
//! the [`HostDocument`] / [`CameraSink`] traits, so everything here can run against
//! the bundled [`MemoryDocument`] as well as a real scene graph adapter.
//!
//! The flow is one-directional: XML → [`TrackingInfo`] → host channels.

pub mod config;
pub mod convert;
pub mod data;
pub mod error;
pub mod extract;
pub mod host;
pub mod import;
pub mod memory;
pub mod writer;
mod xml;

// Re-exports for consumers (host adapters)
pub use config::{FrameRateSource, ImportConfig};
pub use convert::{
    convert_position, convert_rotation, degrees_to_radians, frame_time, IDENTITY_SCALE,
    SCENEKIT_METERS_SCALE,
};
pub use data::{Resolution, TrackingInfo, Vec3};
pub use error::{ImportError, TrackedChannel};
pub use extract::{extract, extract_str};
pub use host::{CameraSink, ChannelId, ChannelProperty, FrameTime, HostDocument, VectorComponent};
pub use import::{import_file, import_str};
pub use memory::{Key, MemoryCamera, MemoryChannel, MemoryChannelHandle, MemoryDocument};
pub use writer::{apply, apply_to_document, WriteSummary};
