// SPDX-License-Identifier: MIT
//! End-to-end tests over synthetic in-memory 9-patch sources.

use image::{Rgba, RgbaImage};
use ninepatch::{PatchGrid, PatchSource};
use proptest::prelude::*;

/// Deterministic non-uniform interior pixel, fully opaque.
fn interior_pixel(x: u32, y: u32) -> Rgba<u8> {
    Rgba([
        (x * 17 % 256) as u8,
        (y * 29 % 256) as u8,
        ((x + y) * 13 % 256) as u8,
        255,
    ])
}

/// Build a synthetic 9-patch source. Runs are closed interior intervals.
fn build_patch(
    width: u32,
    height: u32,
    x_runs: &[(u32, u32)],
    y_runs: &[(u32, u32)],
    x_content: Option<(u32, u32)>,
    y_content: Option<(u32, u32)>,
) -> RgbaImage {
    let mut image = RgbaImage::new(width, height);
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            image.put_pixel(x, y, interior_pixel(x - 1, y - 1));
        }
    }
    let mark = Rgba([0, 0, 0, 255]);
    for &(start, end) in x_runs {
        for p in start..=end {
            image.put_pixel(p + 1, 0, mark);
        }
    }
    for &(start, end) in y_runs {
        for p in start..=end {
            image.put_pixel(0, p + 1, mark);
        }
    }
    if let Some((start, end)) = x_content {
        for p in start..=end {
            image.put_pixel(p + 1, height - 1, mark);
        }
    }
    if let Some((start, end)) = y_content {
        for p in start..=end {
            image.put_pixel(width - 1, p + 1, mark);
        }
    }
    image
}

fn sample_grid() -> PatchGrid {
    let source = build_patch(12, 12, &[(4, 5)], &[(4, 5)], Some((0, 9)), Some((0, 9)));
    PatchGrid::from_source(PatchSource::Image(source)).unwrap()
}

#[test]
fn min_render_reproduces_fixed_cells_exactly() {
    let grid = sample_grid();
    let out = grid.render(grid.min_width(), grid.min_height()).unwrap();
    assert_eq!(out.dimensions(), (8, 8));
    // At minimum size the stretch row/column collapse to zero, so every
    // output pixel maps to a fixed-cell interior pixel.
    for y in 0..8 {
        for x in 0..8 {
            let sx = if x < 4 { x } else { x + 2 };
            let sy = if y < 4 { y } else { y + 2 };
            assert_eq!(
                out.get_pixel(x, y),
                &interior_pixel(sx, sy),
                "mismatch at ({x},{y})"
            );
        }
    }
}

#[test]
fn natural_size_render_reproduces_the_interior() {
    // Slack equals the native stretch extent, so every cell renders at its
    // native size and the whole interior comes back pixel-for-pixel.
    let grid = sample_grid();
    let out = grid.render(10, 10).unwrap();
    for y in 0..10 {
        for x in 0..10 {
            assert_eq!(out.get_pixel(x, y), &interior_pixel(x, y));
        }
    }
}

#[test]
fn multiple_runs_per_axis_render_at_exact_size() {
    let source = build_patch(20, 16, &[(2, 4), (8, 8), (12, 15)], &[(3, 6)], None, None);
    let grid = PatchGrid::from_source(PatchSource::Image(source)).unwrap();
    assert_eq!(grid.min_width(), 18 - (3 + 1 + 4));
    assert_eq!(grid.min_height(), 14 - 4);
    for (w, h) in [(10, 10), (33, 21), (64, 64), (18, 14)] {
        let out = grid.render(w, h).unwrap();
        assert_eq!(
            out.dimensions(),
            (w.max(grid.min_width()), h.max(grid.min_height()))
        );
    }
}

#[test]
fn stretch_run_touching_the_edge_still_renders() {
    // Run reaches the last border pixel; the scan must close it at the
    // end of the line instead of dropping it.
    let source = build_patch(10, 10, &[(5, 7)], &[(0, 2)], None, None);
    let grid = PatchGrid::from_source(PatchSource::Image(source)).unwrap();
    assert_eq!(grid.min_width(), 8 - 3);
    assert_eq!(grid.min_height(), 8 - 3);
    let out = grid.render(30, 30).unwrap();
    assert_eq!(out.dimensions(), (30, 30));
}

#[test]
fn render_around_matches_plain_render_for_native_content() {
    let grid = sample_grid();
    let pad = grid.padding();
    let content = RgbaImage::from_pixel(9, 9, Rgba([255, 0, 255, 255]));
    let around = grid.render_around(&content).unwrap();
    let plain = grid
        .render(pad.left + pad.right + 9, pad.top + pad.bottom + 9)
        .unwrap();
    assert_eq!(around.dimensions(), plain.dimensions());
    // Outside the content rectangle the two renders are identical.
    for (x, y, px) in around.enumerate_pixels() {
        let in_content = x >= pad.left
            && x < pad.left + 9
            && y >= pad.top
            && y < pad.top + 9;
        if !in_content {
            assert_eq!(px, plain.get_pixel(x, y), "mismatch at ({x},{y})");
        }
    }
    assert_eq!(
        around.get_pixel(pad.left + 4, pad.top + 4),
        &Rgba([255, 0, 255, 255])
    );
}

#[test]
fn render_around_composites_content_alpha() {
    let grid = sample_grid();
    let pad = grid.padding();
    // Fully transparent content must leave the patch pixels untouched.
    let content = RgbaImage::new(9, 9);
    let around = grid.render_around(&content).unwrap();
    let plain = grid
        .render(pad.left + pad.right + 9, pad.top + pad.bottom + 9)
        .unwrap();
    assert_eq!(around, plain);
}

#[test]
fn no_stretch_marks_at_all_renders_at_native_size() {
    let source = build_patch(9, 7, &[], &[], None, None);
    let grid = PatchGrid::from_source(PatchSource::Image(source)).unwrap();
    assert_eq!((grid.min_width(), grid.min_height()), (7, 5));
    let out = grid.render(100, 100).unwrap();
    assert_eq!(out.dimensions(), (7, 5));
    for y in 0..5 {
        for x in 0..7 {
            assert_eq!(out.get_pixel(x, y), &interior_pixel(x, y));
        }
    }
}

proptest! {
    #[test]
    fn rendered_size_is_the_clamped_target(w in 0u32..80, h in 0u32..80) {
        let grid = sample_grid();
        let out = grid.render(w, h).unwrap();
        prop_assert_eq!(
            out.dimensions(),
            (w.max(grid.min_width()), h.max(grid.min_height()))
        );
    }

    #[test]
    fn clamp_is_idempotent(w in 0u32..8, h in 0u32..8) {
        let grid = sample_grid();
        let clamped = grid.render(w, h).unwrap();
        let at_min = grid.render(grid.min_width(), grid.min_height()).unwrap();
        prop_assert_eq!(clamped, at_min);
    }

    #[test]
    fn column_and_row_extents_sum_exactly(w in 8u32..120, h in 8u32..120) {
        // With a single uneven pair of stretch runs per axis, per-cell
        // rounding would drift; the rendered canvas must still be filled
        // edge to edge with slice pixels (all opaque in the source).
        let source = build_patch(16, 16, &[(2, 4), (9, 9)], &[(1, 1), (6, 10)], None, None);
        let grid = PatchGrid::from_source(PatchSource::Image(source)).unwrap();
        let out = grid.render(w, h).unwrap();
        prop_assert_eq!(
            out.dimensions(),
            (w.max(grid.min_width()), h.max(grid.min_height()))
        );
        for (x, y, px) in out.enumerate_pixels() {
            prop_assert_eq!(px[3], 255, "transparent gap at ({}, {})", x, y);
        }
    }
}
