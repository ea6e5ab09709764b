//! In-memory host document.
//!
//! Mirrors the parts of a scene graph the importer touches: named objects, their
//! animation tracks and the document timeline. Keys on a channel stay sorted by frame.

use hashbrown::HashMap;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::host::{CameraSink, ChannelId, FrameTime, HostDocument};

/// One (time, value) sample on a curve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Key {
    pub time: FrameTime,
    pub value: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MemoryChannel {
    pub id: ChannelId,
    keys: Vec<Key>,
}

impl MemoryChannel {
    pub fn new(id: ChannelId) -> Self {
        Self {
            id,
            keys: Vec::new(),
        }
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn values(&self) -> Vec<f64> {
        self.keys.iter().map(|k| k.value).collect()
    }

    pub fn frames(&self) -> Vec<i64> {
        self.keys.iter().map(|k| k.time.frame).collect()
    }

    /// Keys at the same frame are replaced.
    pub fn insert(&mut self, time: FrameTime, value: f64) {
        match self.keys.binary_search_by_key(&time.frame, |k| k.time.frame) {
            Ok(idx) => self.keys[idx] = Key { time, value },
            Err(idx) => self.keys.insert(idx, Key { time, value }),
        }
    }
}

/// Channel handle of a [`MemoryCamera`]; only valid until the next `clear_tracks`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct MemoryChannelHandle {
    generation: u64,
    index: usize,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MemoryCamera {
    channels: Vec<MemoryChannel>,
    /// Bumped by `clear_tracks` so earlier handles stop resolving.
    #[serde(skip)]
    generation: u64,
}

/// Cameras compare by their tracks only.
impl PartialEq for MemoryCamera {
    fn eq(&self, other: &Self) -> bool {
        self.channels == other.channels
    }
}

impl MemoryCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn channels(&self) -> &[MemoryChannel] {
        &self.channels
    }

    pub fn channel(&self, id: ChannelId) -> Option<&MemoryChannel> {
        self.channels.iter().find(|c| c.id == id)
    }

    /// Total number of keys over all channels.
    pub fn key_count(&self) -> usize {
        self.channels.iter().map(|c| c.keys.len()).sum()
    }
}

impl CameraSink for MemoryCamera {
    type Channel = MemoryChannelHandle;

    fn clear_tracks(&mut self) {
        self.channels.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    fn create_channel(&mut self, id: ChannelId) -> MemoryChannelHandle {
        self.channels.push(MemoryChannel::new(id));
        MemoryChannelHandle {
            generation: self.generation,
            index: self.channels.len() - 1,
        }
    }

    /// Keys sent through a handle from before the last `clear_tracks` are dropped.
    fn insert_key(&mut self, channel: &MemoryChannelHandle, time: FrameTime, value: f64) {
        if channel.generation != self.generation {
            warn!(
                "memory host: stale channel handle (generation {}, current {}); key at frame {} dropped",
                channel.generation, self.generation, time.frame
            );
            return;
        }
        match self.channels.get_mut(channel.index) {
            Some(ch) => ch.insert(time, value),
            None => warn!(
                "memory host: no channel at index {}; key at frame {} dropped",
                channel.index, time.frame
            ),
        }
    }

    fn track_count(&self) -> usize {
        self.channels.len()
    }
}

/// A document holding named cameras and a timeline.
#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    fps: u32,
    max_time: Option<FrameTime>,
    cameras: HashMap<String, MemoryCamera>,
}

impl MemoryDocument {
    pub fn new(fps: u32) -> Self {
        Self {
            fps,
            max_time: None,
            cameras: HashMap::new(),
        }
    }

    /// Add an empty camera, replacing any object with the same name.
    pub fn insert_camera(&mut self, name: impl Into<String>) -> &mut MemoryCamera {
        self.cameras
            .entry(name.into())
            .insert(MemoryCamera::new())
            .into_mut()
    }

    pub fn with_camera(mut self, name: impl Into<String>) -> Self {
        self.insert_camera(name);
        self
    }

    pub fn camera(&self, name: &str) -> Option<&MemoryCamera> {
        self.cameras.get(name)
    }
}

impl HostDocument for MemoryDocument {
    type Camera = MemoryCamera;

    fn frame_rate(&self) -> u32 {
        self.fps
    }

    fn set_frame_rate(&mut self, fps: u32) {
        self.fps = fps;
    }

    /// Zero frames until a duration has been set.
    fn max_time(&self) -> FrameTime {
        self.max_time.unwrap_or(FrameTime::new(0, self.fps))
    }

    fn set_max_time(&mut self, time: FrameTime) {
        self.max_time = Some(time);
    }

    fn find_camera(&mut self, name: &str) -> Option<&mut MemoryCamera> {
        self.cameras.get_mut(name)
    }
}
