// SPDX-License-Identifier: MIT
//! The patch grid: slice construction, stretch weights, and rendering.
//!
//! The border scan partitions each interior axis into an alternating
//! fixed/stretch sequence (even index = fixed, odd = stretch). Fixed
//! segments between, before, and after the stretch runs are kept even when
//! empty so the parity indexing stays consistent. The cross product of the
//! two partitions is the grid; each cell owns its cropped sub-image and,
//! on its stretch axes, a weight equal to its share of that axis's total
//! stretchable extent.
//!
//! Rendering clamps the target up to the grid minimum, distributes the
//! remaining slack over the stretch cells by weight, and reassembles the
//! cells on a transparent canvas. Slack is distributed by cumulative
//! rounding so the per-axis extents always sum exactly to the target.

use fast_image_resize::Resizer;
use image::{imageops, RgbaImage};
use log::debug;

use crate::error::{PatchError, Result};
use crate::scale::resize_nearest;
use crate::scanner::{self, BorderScan, ContentPadding, Interval};
use crate::source::PatchSource;

/// One cell of the patch grid.
///
/// Owns its cropped sub-image plus its origin and extent in interior
/// coordinates. `weight_x`/`weight_y` are only meaningful on axes where
/// the slice stretches; they are 0 otherwise.
#[derive(Debug, Clone)]
pub struct Slice {
    image: RgbaImage,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub stretch_x: bool,
    pub stretch_y: bool,
    pub weight_x: f64,
    pub weight_y: f64,
}

impl Slice {
    /// The cropped source pixels for this cell.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

/// A sliced 9-patch, ready to render at any size.
///
/// Immutable after construction; [`render`](Self::render) is a pure
/// function of the requested size, so a grid can be shared read-only
/// across threads rendering different sizes.
#[derive(Debug, Clone)]
pub struct PatchGrid {
    /// Row-major grid of slices. Every row has the same column layout.
    rows: Vec<Vec<Slice>>,
    min_width: u32,
    min_height: u32,
    padding: ContentPadding,
    x_content: (u32, u32),
    y_content: (u32, u32),
}

impl PatchGrid {
    /// Build a grid from a source image or path.
    ///
    /// Resolves the input, scans the guide border, trims the 1-pixel ring,
    /// and slices the interior. The source is consumed; the grid owns only
    /// the per-cell crops.
    pub fn from_source(source: impl Into<PatchSource>) -> Result<Self> {
        let image = source.into().resolve()?;
        let scan = scanner::scan(&image)?;
        let interior = scanner::trim_border(&image);
        Self::build(&interior, &scan)
    }

    fn build(interior: &RgbaImage, scan: &BorderScan) -> Result<Self> {
        let (iw, ih) = interior.dimensions();
        let x_pieces = partition(&scan.x_stretch, iw)?;
        let y_pieces = partition(&scan.y_stretch, ih)?;

        let stretch_total_x: u32 = scan.x_stretch.iter().map(|r| r.len).sum();
        let stretch_total_y: u32 = scan.y_stretch.iter().map(|r| r.len).sum();
        let min_width = iw - stretch_total_x;
        let min_height = ih - stretch_total_y;

        let mut rows = Vec::with_capacity(y_pieces.len());
        for (yi, ypc) in y_pieces.iter().enumerate() {
            let stretch_y = yi % 2 == 1;
            let weight_y = if stretch_y {
                f64::from(ypc.len) / f64::from(stretch_total_y)
            } else {
                0.0
            };
            let mut row = Vec::with_capacity(x_pieces.len());
            for (xi, xpc) in x_pieces.iter().enumerate() {
                let stretch_x = xi % 2 == 1;
                let weight_x = if stretch_x {
                    f64::from(xpc.len) / f64::from(stretch_total_x)
                } else {
                    0.0
                };
                let image =
                    imageops::crop_imm(interior, xpc.start, ypc.start, xpc.len, ypc.len).to_image();
                row.push(Slice {
                    image,
                    x: xpc.start,
                    y: ypc.start,
                    w: xpc.len,
                    h: ypc.len,
                    stretch_x,
                    stretch_y,
                    weight_x,
                    weight_y,
                });
            }
            rows.push(row);
        }

        debug!(
            "patch grid: {}x{} cells, min {}x{}",
            rows[0].len(),
            rows.len(),
            min_width,
            min_height
        );

        Ok(Self {
            rows,
            min_width,
            min_height,
            padding: scan.padding,
            x_content: scan.x_content,
            y_content: scan.y_content,
        })
    }

    /// Smallest width the patch renders at without distortion.
    pub fn min_width(&self) -> u32 {
        self.min_width
    }

    /// Smallest height the patch renders at without distortion.
    pub fn min_height(&self) -> u32 {
        self.min_height
    }

    /// Content padding read from the guide border.
    pub fn padding(&self) -> ContentPadding {
        self.padding
    }

    /// The row-major slice grid.
    pub fn slices(&self) -> &[Vec<Slice>] {
        &self.rows
    }

    /// Render the patch at the requested size.
    ///
    /// Targets below the grid minimum are silently clamped up, and an axis
    /// with no stretch cells is pinned to its native extent; neither case
    /// is an error.
    pub fn render(&self, width: u32, height: u32) -> Result<RgbaImage> {
        let (width, height) = self.clamp_target(width, height);
        let col_widths = distribute(
            self.rows[0].iter().map(|s| (s.stretch_x, s.w, s.weight_x)),
            width - self.min_width,
        );
        let row_heights = distribute(
            self.rows.iter().map(|r| {
                let s = &r[0];
                (s.stretch_y, s.h, s.weight_y)
            }),
            height - self.min_height,
        );

        let mut resizer = Resizer::new();
        let mut canvas = RgbaImage::new(width, height);
        let mut y = 0u32;
        for (ri, row) in self.rows.iter().enumerate() {
            let rh = row_heights[ri];
            let mut x = 0u32;
            for (ci, slice) in row.iter().enumerate() {
                let cw = col_widths[ci];
                if cw > 0 && rh > 0 {
                    let piece = resize_nearest(&mut resizer, &slice.image, cw, rh)?;
                    imageops::replace(&mut canvas, &piece, i64::from(x), i64::from(y));
                }
                x += cw;
            }
            y += rh;
        }
        Ok(canvas)
    }

    /// Render the patch around a content image.
    ///
    /// When the content is smaller than the native content span on an
    /// axis, the shortfall grows that axis's padding pair: half (integer
    /// division) to the left/top side, the remainder to the right/bottom.
    /// The content is alpha-composited at the padded origin.
    pub fn render_around(&self, content: &RgbaImage) -> Result<RgbaImage> {
        let (cw, ch) = content.dimensions();
        let span_x = self.x_content.1 - self.x_content.0;
        let span_y = self.y_content.1 - self.y_content.0;

        let (pad_left, pad_right) = grow_padding(self.padding.left, self.padding.right, span_x, cw);
        let (pad_top, pad_bottom) = grow_padding(self.padding.top, self.padding.bottom, span_y, ch);

        let out_w = pad_left + pad_right + cw;
        let out_h = pad_top + pad_bottom + ch;
        let mut canvas = self.render(out_w, out_h)?;
        imageops::overlay(&mut canvas, content, i64::from(pad_left), i64::from(pad_top));
        Ok(canvas)
    }

    fn clamp_target(&self, width: u32, height: u32) -> (u32, u32) {
        let stretches_x = self.rows[0].iter().any(|s| s.stretch_x);
        let stretches_y = self.rows.iter().any(|r| r[0].stretch_y);
        let width = if stretches_x {
            width.max(self.min_width)
        } else {
            self.min_width
        };
        let height = if stretches_y {
            height.max(self.min_height)
        } else {
            self.min_height
        };
        (width, height)
    }
}

/// Expand stretch runs into the full alternating fixed/stretch sequence
/// covering `[0, extent)`. Fixed segments may be empty but are never
/// omitted.
fn partition(stretch: &[Interval], extent: u32) -> Result<Vec<Interval>> {
    let mut pieces = Vec::with_capacity(stretch.len() * 2 + 1);
    let mut cursor = 0u32;
    for run in stretch {
        if run.is_empty() || run.start < cursor || run.start + run.len > extent {
            return Err(PatchError::malformed(format!(
                "stretch run at {}+{} is outside the {extent}px interior or out of order",
                run.start, run.len
            )));
        }
        pieces.push(Interval::new(cursor, run.start - cursor));
        pieces.push(*run);
        cursor = run.start + run.len;
    }
    pieces.push(Interval::new(cursor, extent - cursor));
    Ok(pieces)
}

/// Compute rendered extents for one axis.
///
/// Fixed cells keep their native extent. Stretch cells split `slack` by
/// weight with cumulative rounding, the last one absorbing whatever
/// remains, so the total is exact for every target size.
fn distribute(cells: impl Iterator<Item = (bool, u32, f64)>, slack: u32) -> Vec<u32> {
    let cells: Vec<_> = cells.collect();
    let stretch_count = cells.iter().filter(|(stretch, _, _)| *stretch).count();

    let mut extents = Vec::with_capacity(cells.len());
    let mut cum_weight = 0.0f64;
    let mut allocated = 0u32;
    let mut seen = 0usize;
    for (stretch, native, weight) in cells {
        if !stretch {
            extents.push(native);
            continue;
        }
        seen += 1;
        let extent = if seen == stretch_count {
            slack - allocated
        } else {
            cum_weight += weight;
            let total = (cum_weight * f64::from(slack)).round() as u32;
            let extent = total - allocated;
            allocated = total;
            extents.push(extent);
            continue;
        };
        allocated += extent;
        extents.push(extent);
    }
    extents
}

fn grow_padding(near: u32, far: u32, native_span: u32, content: u32) -> (u32, u32) {
    if content < native_span {
        let shortfall = native_span - content;
        (near + shortfall / 2, far + shortfall - shortfall / 2)
    } else {
        (near, far)
    }
}
