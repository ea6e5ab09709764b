//! Composite XML → [`TrackingInfo`].
//!
//! Layout this reads (other nodes are ignored):
//! - `AudioVideoSettings` with `Width`, `Height` and optionally `FrameRate` children.
//! - `CameraLayer` holding `position`, `orientation` and `zoom` properties. An animated
//!   property has an `Animation` child whose element children are the keys; each key
//!   carries a `Time` attribute and a payload (`FXPoint3_32f`, `Orientation3D` or
//!   `Value/float`).
//!
//! Tracks are matched by key ordinal. The position track defines the time keys and the
//! other tracks must have exactly as many keys.

use std::path::Path;

use log::{debug, info};
use roxmltree::{Document, Node, ParsingOptions};

use crate::config::{FrameRateSource, ImportConfig};
use crate::data::{Resolution, TrackingInfo, Vec3};
use crate::error::{ImportError, TrackedChannel};
use crate::xml::{
    element_children, find_animation, find_child, find_descendant, find_path, float_attribute,
    parse_f64, text,
};

/// Read and extract the composite at `path`.
pub fn extract(path: impl AsRef<Path>, config: &ImportConfig) -> Result<TrackingInfo, ImportError> {
    let path = path.as_ref();
    let xml = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    debug!("extract: read {} bytes from {}", xml.len(), path.display());
    extract_str(&xml, config)
}

/// Extract tracking data from composite XML text.
pub fn extract_str(xml: &str, config: &ImportConfig) -> Result<TrackingInfo, ImportError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, options)
        .map_err(|e| ImportError::Parse(e.to_string()))?;
    let root = doc.root_element();

    let settings = find_descendant(root, "AudioVideoSettings")
        .ok_or_else(|| ImportError::missing("AudioVideoSettings"))?;
    let resolution = Resolution {
        width: settings_u32(settings, "Width")?,
        height: settings_u32(settings, "Height")?,
    };
    let fps = match config.frame_rate {
        FrameRateSource::Fixed(fps) => fps,
        FrameRateSource::Document => document_frame_rate(settings)?,
    };
    if fps == 0 {
        return Err(ImportError::invalid("frame rate", "must be greater than zero"));
    }

    let camera = find_descendant(root, "CameraLayer").ok_or(ImportError::MissingCamera)?;

    let mut time_keys = Vec::new();
    let mut positions = Vec::new();
    if let Some(anim) = find_animation(camera, "position") {
        debug!("extract: camera position animation found");
        for (idx, key) in element_children(anim).enumerate() {
            let time = key.attribute("Time").ok_or_else(|| {
                ImportError::invalid(
                    key_label(TrackedChannel::Position, idx),
                    "missing Time attribute",
                )
            })?;
            time_keys.push(time.to_string());
            positions.push(vec3_payload(key, "FXPoint3_32f", TrackedChannel::Position, idx)?);
        }
    }

    let mut rotations = Vec::new();
    if let Some(anim) = find_animation(camera, "orientation") {
        debug!("extract: camera orientation animation found");
        let keys = matched_keys(anim, TrackedChannel::Rotation, time_keys.len())?;
        rotations.reserve(keys.len());
        for (idx, key) in keys.into_iter().enumerate() {
            rotations.push(vec3_payload(key, "Orientation3D", TrackedChannel::Rotation, idx)?);
        }
    }

    let mut zooms = Vec::new();
    if let Some(anim) = find_animation(camera, "zoom") {
        debug!("extract: camera zoom animation found");
        let keys = matched_keys(anim, TrackedChannel::Zoom, time_keys.len())?;
        zooms.reserve(keys.len());
        for (idx, key) in keys.into_iter().enumerate() {
            let label = key_label(TrackedChannel::Zoom, idx);
            let raw = find_path(key, &["Value", "float"])
                .and_then(text)
                .ok_or_else(|| ImportError::invalid(label.as_str(), "missing Value/float"))?;
            zooms.push(parse_f64(raw, &label)?);
        }
    }

    info!(
        "extract: {}x{} @ {} fps, {} keys (rotation: {}, zoom: {})",
        resolution.width,
        resolution.height,
        fps,
        time_keys.len(),
        rotations.len(),
        zooms.len()
    );

    Ok(TrackingInfo {
        resolution,
        fps,
        time_keys,
        positions,
        rotations,
        zooms,
    })
}

fn key_label(channel: TrackedChannel, idx: usize) -> String {
    format!("{channel} key {idx}")
}

/// Keys of `anim`, failing when their count differs from the recorded time keys.
fn matched_keys<'a, 'input>(
    anim: Node<'a, 'input>,
    channel: TrackedChannel,
    expected: usize,
) -> Result<Vec<Node<'a, 'input>>, ImportError> {
    let keys: Vec<_> = element_children(anim).collect();
    if keys.len() != expected {
        return Err(ImportError::ChannelLengthMismatch {
            channel,
            expected,
            actual: keys.len(),
        });
    }
    Ok(keys)
}

fn vec3_payload(
    key: Node,
    payload: &str,
    channel: TrackedChannel,
    idx: usize,
) -> Result<Vec3, ImportError> {
    let label = key_label(channel, idx);
    let node = find_descendant(key, payload)
        .ok_or_else(|| ImportError::invalid(label.as_str(), format!("missing {payload}")))?;
    Ok(Vec3 {
        x: float_attribute(node, "X", &label)?,
        y: float_attribute(node, "Y", &label)?,
        z: float_attribute(node, "Z", &label)?,
    })
}

fn settings_text<'a>(settings: Node<'a, '_>, field: &str) -> Result<&'a str, ImportError> {
    find_child(settings, field)
        .and_then(text)
        .ok_or_else(|| ImportError::missing(format!("AudioVideoSettings/{field}")))
}

fn settings_u32(settings: Node, field: &str) -> Result<u32, ImportError> {
    let raw = settings_text(settings, field)?;
    raw.parse::<u32>()
        .map_err(|e| ImportError::invalid(field, format!("'{raw}': {e}")))
}

/// `FrameRate` may be fractional (29.97); it is rounded to whole frames.
fn document_frame_rate(settings: Node) -> Result<u32, ImportError> {
    let raw = settings_text(settings, "FrameRate")?;
    let rate = parse_f64(raw, "FrameRate")?;
    if !rate.is_finite() || rate < 0.5 || rate > u32::MAX as f64 {
        return Err(ImportError::invalid("FrameRate", format!("'{raw}' out of range")));
    }
    Ok(rate.round() as u32)
}
