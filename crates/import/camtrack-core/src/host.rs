//! Host scene seam.
//!
//! The writer never talks to a scene graph directly. Host adapters implement
//! [`HostDocument`] for the open document and [`CameraSink`] for the object that
//! receives the curves; [`crate::MemoryDocument`] is the in-process implementation.

use serde::{Deserialize, Serialize};

/// Animated vector property on the host object.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ChannelProperty {
    Position,
    /// Relative rotation, radians.
    Rotation,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum VectorComponent {
    X,
    Y,
    Z,
}

/// (property, component) address of a scalar curve.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ChannelId {
    pub property: ChannelProperty,
    pub component: VectorComponent,
}

impl ChannelId {
    pub const POSITION_X: ChannelId = ChannelId::new(ChannelProperty::Position, VectorComponent::X);
    pub const POSITION_Y: ChannelId = ChannelId::new(ChannelProperty::Position, VectorComponent::Y);
    pub const POSITION_Z: ChannelId = ChannelId::new(ChannelProperty::Position, VectorComponent::Z);
    pub const ROTATION_X: ChannelId = ChannelId::new(ChannelProperty::Rotation, VectorComponent::X);
    pub const ROTATION_Y: ChannelId = ChannelId::new(ChannelProperty::Rotation, VectorComponent::Y);
    pub const ROTATION_Z: ChannelId = ChannelId::new(ChannelProperty::Rotation, VectorComponent::Z);

    /// The six channels the importer writes, in creation order.
    pub const ALL: [ChannelId; 6] = [
        Self::POSITION_X,
        Self::POSITION_Y,
        Self::POSITION_Z,
        Self::ROTATION_X,
        Self::ROTATION_Y,
        Self::ROTATION_Z,
    ];

    pub const fn new(property: ChannelProperty, component: VectorComponent) -> Self {
        Self {
            property,
            component,
        }
    }
}

/// A time on the host timeline: `frame` ticks at `fps` frames per second.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct FrameTime {
    pub frame: i64,
    pub fps: u32,
}

impl FrameTime {
    pub const fn new(frame: i64, fps: u32) -> Self {
        Self { frame, fps }
    }

    /// Seconds from the start of the timeline; zero when `fps` is zero.
    pub fn seconds(&self) -> f64 {
        if self.fps == 0 {
            return 0.0;
        }
        self.frame as f64 / self.fps as f64
    }
}

/// An object that can hold animation tracks.
pub trait CameraSink {
    /// Handle returned by [`CameraSink::create_channel`] and passed back on insert.
    type Channel;

    /// Remove every animation track currently on the object.
    fn clear_tracks(&mut self);

    /// Create (and attach) a scalar curve for `id`.
    fn create_channel(&mut self, id: ChannelId) -> Self::Channel;

    /// Insert or replace the key at `time` on `channel`.
    fn insert_key(&mut self, channel: &Self::Channel, time: FrameTime, value: f64);

    fn track_count(&self) -> usize;
}

/// The host document that owns the timeline and the named objects.
pub trait HostDocument {
    type Camera: CameraSink;

    fn frame_rate(&self) -> u32;
    fn set_frame_rate(&mut self, fps: u32);
    fn max_time(&self) -> FrameTime;
    fn set_max_time(&mut self, time: FrameTime);

    /// Look up a camera object by name.
    fn find_camera(&mut self, name: &str) -> Option<&mut Self::Camera>;
}
