// SPDX-License-Identifier: MIT
//! Source image input resolution.
//!
//! Callers hand the grid builder either an already-decoded RGBA raster or a
//! file path. The two cases are a discriminated [`PatchSource`] variant and
//! are resolved exactly once, at the API boundary, instead of being sniffed
//! at runtime deeper in the pipeline.

use std::path::{Path, PathBuf};

use image::RgbaImage;

use crate::error::{PatchError, Result};

/// Input to [`PatchGrid::from_source`](crate::PatchGrid::from_source):
/// either a decoded raster or a path to decode.
#[derive(Debug, Clone)]
pub enum PatchSource {
    /// An already-decoded RGBA image.
    Image(RgbaImage),
    /// A raster file on disk (any format the codec can decode).
    Path(PathBuf),
}

impl PatchSource {
    /// Resolve to a decoded RGBA raster.
    ///
    /// A path that fails to decode, or decodes to a color type without an
    /// alpha channel, is rejected: the guide border is encoded in alpha and
    /// is unreadable without it.
    pub(crate) fn resolve(self) -> Result<RgbaImage> {
        match self {
            Self::Image(image) => Ok(image),
            Self::Path(path) => {
                let decoded = image::open(&path).map_err(|e| {
                    PatchError::unsupported(format!("failed to decode {}: {e}", path.display()))
                })?;
                if !decoded.color().has_alpha() {
                    return Err(PatchError::unsupported(format!(
                        "{} has no alpha channel, border markers are unreadable",
                        path.display()
                    )));
                }
                Ok(decoded.into_rgba8())
            }
        }
    }
}

impl From<RgbaImage> for PatchSource {
    fn from(image: RgbaImage) -> Self {
        Self::Image(image)
    }
}

impl From<PathBuf> for PatchSource {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<&Path> for PatchSource {
    fn from(path: &Path) -> Self {
        Self::Path(path.to_path_buf())
    }
}
