// SPDX-License-Identifier: MIT
//! Error types for 9-patch parsing and rendering.
//!
//! The library distinguishes three failure classes:
//! - [`PatchError::MalformedPatch`]: the guide border cannot produce a valid
//!   grid (interior too small, coordinates out of bounds).
//! - [`PatchError::UnsupportedFormat`]: the source could not be decoded, or
//!   carries no alpha channel and therefore no readable border markers.
//! - [`PatchError::InvalidSize`]: a malformed `WxH` size argument.
//!
//! Collaborator errors from the image codec and the resize engine are
//! wrapped so they propagate with `?`. Rendering an undersized target is
//! not an error; it is silently clamped to the grid minimum.

use thiserror::Error;

/// All errors produced by this crate.
#[derive(Debug, Error)]
pub enum PatchError {
    /// The guide border does not describe a valid 9-patch.
    #[error("malformed 9-patch: {reason}")]
    MalformedPatch { reason: String },

    /// The source image cannot be used as a 9-patch at all.
    #[error("unsupported source image: {reason}")]
    UnsupportedFormat { reason: String },

    /// A `WxH` size string that did not parse.
    #[error("invalid size {input:?}: expected <width>x<height>, e.g. 200x48")]
    InvalidSize { input: String },

    /// Decode or encode failure from the image codec.
    #[error("image codec error: {0}")]
    Image(#[from] image::ImageError),

    /// Resize engine rejected a resize request.
    #[error("resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    /// Resize engine rejected an image buffer.
    #[error("image buffer error: {0}")]
    Buffer(#[from] fast_image_resize::ImageBufferError),

    /// Underlying I/O failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl PatchError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedPatch {
            reason: reason.into(),
        }
    }

    pub(crate) fn unsupported(reason: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            reason: reason.into(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PatchError>;
