// SPDX-License-Identifier: MIT
//! Guide-border scanning.
//!
//! A 9-patch source carries its metadata in the outermost 1-pixel ring:
//! - top row and left column: opaque runs mark the stretchable intervals
//!   along X and Y;
//! - bottom row and right column: a single opaque run marks the content
//!   region the foreground is meant to occupy.
//!
//! Markers are read from the alpha channel only (0 = unmarked, anything
//! else = marked). All reported intervals are closed, 0-based, and
//! interior-relative: border pixel `x` maps to interior column `x - 1`.
//! A run still open when the line ends is finalized at the last interior
//! coordinate on both axes.

use image::{imageops, RgbaImage};
use log::debug;

use crate::error::{PatchError, Result};

/// A closed pixel interval along one axis, in interior coordinates.
///
/// `len == 0` is a valid, empty interval; the grid builder keeps empty
/// fixed segments so the alternating fixed/stretch parity stays intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: u32,
    pub len: u32,
}

impl Interval {
    pub fn new(start: u32, len: u32) -> Self {
        Self { start, len }
    }

    /// Last covered coordinate. Meaningless for empty intervals.
    pub fn end(&self) -> u32 {
        self.start + self.len.saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Insets between the image edge and the area reserved for content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentPadding {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

/// Everything the border scan extracts from a source image.
#[derive(Debug, Clone)]
pub struct BorderScan {
    /// Stretchable intervals along X, left to right.
    pub x_stretch: Vec<Interval>,
    /// Stretchable intervals along Y, top to bottom.
    pub y_stretch: Vec<Interval>,
    /// Content region along X as `(start, end)` in interior coordinates.
    pub x_content: (u32, u32),
    /// Content region along Y as `(start, end)` in interior coordinates.
    pub y_content: (u32, u32),
    /// Padding derived from the content region and the full image extent.
    pub padding: ContentPadding,
}

/// Scan the guide border of `image`.
///
/// The image must be at least 3x3: a 1-pixel ring plus a non-empty
/// interior. Anything smaller is a [`PatchError::MalformedPatch`].
pub fn scan(image: &RgbaImage) -> Result<BorderScan> {
    let (width, height) = image.dimensions();
    if width < 3 || height < 3 {
        return Err(PatchError::malformed(format!(
            "{width}x{height} image leaves no interior after trimming the 1-pixel border"
        )));
    }
    let interior_w = width - 2;
    let interior_h = height - 2;

    let marked = |x: u32, y: u32| image.get_pixel(x, y)[3] != 0;

    let x_stretch = collect_runs((0..interior_w).map(|x| marked(x + 1, 0)));
    let y_stretch = collect_runs((0..interior_h).map(|y| marked(0, y + 1)));

    // Content lines carry at most one meaningful run; extra runs are
    // ignored and an unmarked line defaults to the full interior span.
    let x_content = first_run((0..interior_w).map(|x| marked(x + 1, height - 1)))
        .unwrap_or((0, interior_w - 1));
    let y_content = first_run((0..interior_h).map(|y| marked(width - 1, y + 1)))
        .unwrap_or((0, interior_h - 1));

    // Right/bottom pads are measured against the full untrimmed extent.
    let padding = ContentPadding {
        left: x_content.0,
        top: y_content.0,
        right: width - x_content.1,
        bottom: height - y_content.1,
    };

    debug!(
        "border scan: {} x-stretch run(s), {} y-stretch run(s), content x={:?} y={:?}",
        x_stretch.len(),
        y_stretch.len(),
        x_content,
        y_content
    );

    Ok(BorderScan {
        x_stretch,
        y_stretch,
        x_content,
        y_content,
        padding,
    })
}

/// Crop away the 1-pixel guide ring, leaving the interior image.
///
/// Images too small to have an interior yield an empty image; [`scan`]
/// rejects those before any grid is built.
pub fn trim_border(image: &RgbaImage) -> RgbaImage {
    let (width, height) = image.dimensions();
    imageops::crop_imm(image, 1, 1, width.saturating_sub(2), height.saturating_sub(2)).to_image()
}

/// Collect all maximal runs of `true` as closed intervals.
fn collect_runs(marks: impl Iterator<Item = bool>) -> Vec<Interval> {
    let mut runs = Vec::new();
    let mut open: Option<u32> = None;
    let mut pos = 0u32;
    for marked in marks {
        match (open, marked) {
            (None, true) => open = Some(pos),
            (Some(start), false) => {
                runs.push(Interval::new(start, pos - start));
                open = None;
            }
            _ => {}
        }
        pos += 1;
    }
    // A run touching the far edge never sees a falling edge; close it here.
    if let Some(start) = open {
        runs.push(Interval::new(start, pos - start));
    }
    runs
}

/// First run of `true` as a closed `(start, end)` pair, if any.
fn first_run(marks: impl Iterator<Item = bool>) -> Option<(u32, u32)> {
    collect_runs(marks)
        .first()
        .map(|run| (run.start, run.end()))
}
