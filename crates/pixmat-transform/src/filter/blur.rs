// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Four-neighbour box blur with in-place, raster-order updates.

use pixmat_core::{PixelGrid, PixmatError, Result};
use tracing::{debug, info, instrument};

/// Number of sweeps `blur` makes for a given intensity.
///
/// `1..=50` gives one pass, `51..=100` three, anything above five.
pub fn blur_passes(intensity: u32) -> usize {
    match intensity {
        0..=50 => 1,
        51..=100 => 3,
        _ => 5,
    }
}

/// Replace each interior sample with the weighted mean of its left, upper,
/// lower and right neighbours, repeated `blur_passes(intensity)` times.
///
/// Each new value is `a * (left + up + down + right) / (4 * a)` with
/// `a = intensity`. The weight cancels, so a pass is a plain four-neighbour
/// average; intensity only selects the pass count.
///
/// Updates happen in place in row-major order, so within a pass the left and
/// upper neighbours have already been blurred while the right and lower ones
/// have not. This ordering determines the numeric result and must stay
/// sequential. Border rows and columns are never written. The working buffer
/// is `f64`; the result is truncated to `u8` once at the end. Every channel is
/// blurred independently.
#[instrument(skip(grid), fields(height = grid.height(), width = grid.width()))]
pub fn blur(grid: &PixelGrid, intensity: u32) -> Result<PixelGrid> {
    if intensity == 0 {
        return Err(PixmatError::InvalidArgument(
            "blur intensity must be positive".to_owned(),
        ));
    }

    let passes = blur_passes(intensity);
    info!(passes, "Blurring grid");

    let (m, n, d) = grid.shape();
    let mut mat: Vec<f64> = grid.as_raw().iter().map(|&v| v as f64).collect();
    let a = intensity as f64;
    let at = |i: usize, j: usize, ch: usize| (i * n + j) * d + ch;

    for pass in 0..passes {
        for i in 1..m.saturating_sub(1) {
            for j in 1..n.saturating_sub(1) {
                for ch in 0..d {
                    let sum = mat[at(i, j - 1, ch)]
                        + mat[at(i - 1, j, ch)]
                        + mat[at(i + 1, j, ch)]
                        + mat[at(i, j + 1, ch)];
                    mat[at(i, j, ch)] = a * sum / (4.0 * a);
                }
            }
        }
        debug!(pass, "Blur pass complete");
    }

    let data = mat.iter().map(|&v| v as u8).collect();
    PixelGrid::from_raw(m, n, d, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_count_follows_intensity_bands() {
        assert_eq!(blur_passes(1), 1);
        assert_eq!(blur_passes(50), 1);
        assert_eq!(blur_passes(51), 3);
        assert_eq!(blur_passes(100), 3);
        assert_eq!(blur_passes(101), 5);
    }

    /// A single bright centre spreads only into pixels processed after it.
    ///
    /// 4x4 grid, all zero except (1, 1) = 160. Raster order over the 2x2
    /// interior:
    ///   (1,1) <- (0 + 0 + 0 + 0) / 4          = 0
    ///   (1,2) <- (0 + 0 + 0 + 0) / 4          = 0
    ///   (2,1) <- (0 + 0 + 0 + 0) / 4          = 0
    ///   (2,2) <- (0 + 0 + 0 + 0) / 4          = 0
    /// The centre is overwritten before any neighbour can read it.
    #[test]
    fn centre_is_overwritten_before_neighbours_read_it() {
        let mut grid = PixelGrid::filled(4, 4, 1, 0).unwrap();
        grid.set(1, 1, 0, 160);
        let out = blur(&grid, 10).unwrap();
        assert!(out.as_raw().iter().all(|&v| v == 0));
    }

    /// Sequential updates read already-blurred left/up neighbours.
    ///
    /// 3x4 grid with a bright right border column of 200:
    ///   (1,1) <- (0 + 0 + 0 + 0) / 4   = 0
    ///   (1,2) <- (0 + 0 + 0 + 200) / 4 = 50
    /// A simultaneous (Jacobi) update would give the same here, so the next
    /// test pins the in-place ordering.
    #[test]
    fn right_border_bleeds_into_interior() {
        let grid = PixelGrid::from_rows(&[
            vec![0, 0, 0, 200],
            vec![0, 0, 0, 200],
            vec![0, 0, 0, 200],
        ])
        .unwrap();
        let out = blur(&grid, 50).unwrap();
        assert_eq!(out.row(1), &[0, 0, 50, 200]);
    }

    /// Left border of 200, 3x4 grid, one pass:
    ///   (1,1) <- (200 + 0 + 0 + 0) / 4   = 50
    ///   (1,2) <- (50 + 0 + 0 + 0) / 4    = 12.5 -> 12
    /// A Jacobi update would leave (1,2) at 0.
    #[test]
    fn updates_read_already_blurred_left_neighbour() {
        let grid = PixelGrid::from_rows(&[
            vec![200, 0, 0, 0],
            vec![200, 0, 0, 0],
            vec![200, 0, 0, 0],
        ])
        .unwrap();
        let out = blur(&grid, 50).unwrap();
        assert_eq!(out.row(1), &[200, 50, 12, 0]);
    }

    /// Fractions carry between passes and are only truncated at the end.
    ///
    /// Second pass on the grid above, starting from 50 and 12.5:
    ///   (1,1) <- (200 + 0 + 0 + 12.5) / 4  = 53.125
    ///   (1,2) <- (53.125 + 0 + 0 + 0) / 4  = 13.28...
    /// Third pass:
    ///   (1,1) <- (200 + 13.28...) / 4      = 53.32...
    ///   (1,2) <- 53.32... / 4              = 13.33...
    #[test]
    fn multiple_passes_keep_fractional_state() {
        let grid = PixelGrid::from_rows(&[
            vec![200, 0, 0, 0],
            vec![200, 0, 0, 0],
            vec![200, 0, 0, 0],
        ])
        .unwrap();
        let out = blur(&grid, 75).unwrap();
        assert_eq!(out.row(1), &[200, 53, 13, 0]);
    }

    #[test]
    fn border_is_never_modified() {
        let grid = PixelGrid::from_fn(6, 7, 3, |r, c, ch| ((r * 41 + c * 13 + ch * 5) % 256) as u8)
            .unwrap();
        let out = blur(&grid, 150).unwrap();
        for c in 0..7 {
            assert_eq!(out.pixel(0, c), grid.pixel(0, c));
            assert_eq!(out.pixel(5, c), grid.pixel(5, c));
        }
        for r in 0..6 {
            assert_eq!(out.pixel(r, 0), grid.pixel(r, 0));
            assert_eq!(out.pixel(r, 6), grid.pixel(r, 6));
        }
        assert_eq!(out.shape(), grid.shape());
    }

    #[test]
    fn flat_grid_is_fixed_point() {
        let grid = PixelGrid::filled(5, 5, 3, 90).unwrap();
        assert_eq!(blur(&grid, 200).unwrap(), grid);
    }

    #[test]
    fn zero_intensity_is_invalid() {
        let grid = PixelGrid::filled(3, 3, 1, 1).unwrap();
        assert!(matches!(blur(&grid, 0), Err(PixmatError::InvalidArgument(_))));
    }
}
