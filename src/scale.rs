// SPDX-License-Identifier: MIT
// Slice resizing built on fast_image_resize.
// Nearest-neighbor only: 9-patch chrome lives and dies by hard edges.

use fast_image_resize as fir;
use fir::images::{TypedImage, TypedImageRef};
use fir::pixels::U8x4;
use fir::{ResizeAlg, ResizeOptions, Resizer};
use image::RgbaImage;

use crate::error::Result;

/// Resize `src` to `w`x`h` with nearest-neighbor sampling.
///
/// Zero-extent requests (empty fixed segments, zero slack on a stretch
/// axis) return an empty image without touching the resizer. An exact-size
/// request is a clone, so unstretched slices stay pixel-identical.
pub(crate) fn resize_nearest(
    resizer: &mut Resizer,
    src: &RgbaImage,
    w: u32,
    h: u32,
) -> Result<RgbaImage> {
    if w == 0 || h == 0 || src.width() == 0 || src.height() == 0 {
        return Ok(RgbaImage::new(w, h));
    }
    if src.width() == w && src.height() == h {
        return Ok(src.clone());
    }

    let src_view = TypedImageRef::<U8x4>::from_buffer(src.width(), src.height(), src.as_raw())?;
    let mut buf = vec![0u8; (w as usize) * (h as usize) * 4];
    let mut dst = TypedImage::<U8x4>::from_buffer(w, h, &mut buf)?;

    let opts = ResizeOptions::new()
        .resize_alg(ResizeAlg::Nearest)
        .use_alpha(false);
    resizer.resize_typed::<U8x4>(&src_view, &mut dst, &opts)?;

    Ok(RgbaImage::from_raw(w, h, buf).expect("buffer sized for w*h*4"))
}
