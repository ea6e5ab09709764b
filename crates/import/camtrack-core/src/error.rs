//! Error types for tracking import.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Animated camera property a key count or payload belongs to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum TrackedChannel {
    Position,
    Rotation,
    Zoom,
}

impl fmt::Display for TrackedChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TrackedChannel::Position => "position",
            TrackedChannel::Rotation => "orientation",
            TrackedChannel::Zoom => "zoom",
        };
        f.write_str(name)
    }
}

/// Every failure is terminal for the run; nothing is retried or defaulted.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum ImportError {
    /// The composite could not be read from disk.
    #[error("failed to read composite {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Malformed XML.
    #[error("composite xml parse error: {0}")]
    Parse(String),

    /// The video settings node (or one of its fields) is absent.
    #[error("composite is missing {what}")]
    MissingSettings { what: String },

    /// A node exists but its content is not usable.
    #[error("invalid {what}: {reason}")]
    InvalidValue { what: String, reason: String },

    /// No camera layer in the composite.
    #[error("unable to find CameraLayer in composite")]
    MissingCamera,

    /// A channel's key count disagrees with the position timing.
    #[error("{channel} has {actual} keys but {expected} time keys were recorded")]
    ChannelLengthMismatch {
        channel: TrackedChannel,
        expected: usize,
        actual: usize,
    },

    /// The host scene has no camera with the configured name.
    #[error("no camera named '{name}' in the host document")]
    MissingTarget { name: String },

    /// Import configuration could not be decoded.
    #[error("import config parse error: {0}")]
    Config(String),
}

impl ImportError {
    pub(crate) fn invalid(what: impl Into<String>, reason: impl Into<String>) -> Self {
        ImportError::InvalidValue {
            what: what.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn missing(what: impl Into<String>) -> Self {
        ImportError::MissingSettings { what: what.into() }
    }
}
