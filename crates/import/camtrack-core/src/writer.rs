//! [`TrackingInfo`] → host animation curves.
//!
//! Keys are placed by sample ordinal at the record's frame rate (`frame = index`),
//! not by the composite's own `Time` markers. Existing tracks on the camera are
//! removed first, so writing the same record twice gives the same result.

use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};

use crate::config::ImportConfig;
use crate::convert::{convert_position, convert_rotation, frame_time};
use crate::data::TrackingInfo;
use crate::error::{ImportError, TrackedChannel};
use crate::host::{CameraSink, ChannelId, FrameTime, HostDocument};

/// What a write produced.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct WriteSummary {
    /// Keys written per channel.
    pub frames: usize,
    pub channels: usize,
    pub fps: u32,
}

/// Set the document timeline, find the target camera and write the curves onto it.
///
/// Length checks run before the document is touched. A missing camera is reported
/// after the timeline has been updated.
pub fn apply_to_document<D: HostDocument>(
    info: &TrackingInfo,
    doc: &mut D,
    config: &ImportConfig,
) -> Result<WriteSummary, ImportError> {
    check_lengths(info)?;

    let frames = info.len();
    debug!("writer: document fps {} -> {}", doc.frame_rate(), info.fps);
    doc.set_frame_rate(info.fps);
    doc.set_max_time(FrameTime::new(frames as i64, info.fps));

    let camera = doc
        .find_camera(&config.target_name)
        .ok_or_else(|| ImportError::MissingTarget {
            name: config.target_name.clone(),
        })?;
    apply(info, camera, config)
}

/// Replace every track on `camera` with position and rotation curves built from `info`.
pub fn apply<C: CameraSink>(
    info: &TrackingInfo,
    camera: &mut C,
    config: &ImportConfig,
) -> Result<WriteSummary, ImportError> {
    check_lengths(info)?;

    let removed = camera.track_count();
    camera.clear_tracks();
    if removed > 0 {
        debug!("writer: removed {removed} existing tracks");
    }

    let [px, py, pz, rx, ry, rz] = ChannelId::ALL.map(|id| camera.create_channel(id));

    for (idx, raw_time) in info.time_keys.iter().enumerate() {
        let time = frame_time(idx, info.fps);
        trace!(
            "writer: key {idx} source time {raw_time} -> {:.4}s",
            time.seconds()
        );

        let p = convert_position(info.positions[idx], config.scale);
        camera.insert_key(&px, time, p.x);
        camera.insert_key(&py, time, p.y);
        camera.insert_key(&pz, time, p.z);

        let r = convert_rotation(info.rotations[idx]);
        camera.insert_key(&rx, time, r.x);
        camera.insert_key(&ry, time, r.y);
        camera.insert_key(&rz, time, r.z);
    }

    if info.has_zooms() {
        debug!("writer: {} zoom samples not written", info.zooms.len());
    }

    let summary = WriteSummary {
        frames: info.len(),
        channels: ChannelId::ALL.len(),
        fps: info.fps,
    };
    info!(
        "writer: wrote {} keys on {} channels at {} fps",
        summary.frames, summary.channels, summary.fps
    );
    Ok(summary)
}

/// Every per-key array the writer indexes must cover all time keys.
fn check_lengths(info: &TrackingInfo) -> Result<(), ImportError> {
    let expected = info.len();
    for (channel, actual) in [
        (TrackedChannel::Position, info.positions.len()),
        (TrackedChannel::Rotation, info.rotations.len()),
    ] {
        if actual != expected {
            warn!("writer: {channel} has {actual} samples, expected {expected}");
            return Err(ImportError::ChannelLengthMismatch {
                channel,
                expected,
                actual,
            });
        }
    }
    Ok(())
}
