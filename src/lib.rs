// SPDX-License-Identifier: MIT
//! # ninepatch
//!
//! Parse android-style 9-patch images and render them at arbitrary sizes.
//!
//! A 9-patch is a bitmap whose outer 1-pixel border encodes layout
//! metadata in its alpha channel: opaque runs on the top and left border
//! lines mark the stretchable intervals along each axis, and a run on the
//! bottom and right lines marks the region reserved for foreground
//! content. The interior is sliced into a grid of cells; rendering scales
//! only the stretchable cells (nearest-neighbor, so UI chrome keeps its
//! hard edges) while fixed cells stay pixel-exact.
//!
//! ## Pipeline
//!
//! raw image → [`scanner`] (border runs, content padding, trim) →
//! [`PatchGrid`] construction → [`PatchGrid::render`] /
//! [`PatchGrid::render_around`] → output image.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ninepatch::{PatchGrid, PatchSource};
//! use std::path::Path;
//!
//! # fn main() -> ninepatch::Result<()> {
//! let grid = PatchGrid::from_source(Path::new("button.9.png"))?;
//! let image = grid.render(200, 48)?;
//! image.save("button-200x48.png").map_err(ninepatch::PatchError::from)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod grid;
mod scale;
pub mod scanner;
pub mod source;

pub use error::{PatchError, Result};
pub use grid::{PatchGrid, Slice};
pub use scanner::{BorderScan, ContentPadding, Interval};
pub use source::PatchSource;
