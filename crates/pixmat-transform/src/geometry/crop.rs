// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Random crop — drops a random number of leading rows and columns and keeps
// the bottom-right remainder.

use pixmat_core::{PixelGrid, PixmatError, Result};
use rand::Rng;
use tracing::{debug, info, instrument};

use super::remap;

/// Crop with offsets drawn from the thread-local RNG.
pub fn random_crop(grid: &PixelGrid) -> Result<PixelGrid> {
    random_crop_with(grid, &mut rand::thread_rng())
}

/// Crop with offsets drawn from `rng`.
///
/// `h_start` is uniform in `[0, H)` and `w_start` uniform in `[0, W)`, drawn
/// independently. The exclusive upper bounds mean at least one row and one
/// column always survive, so only an empty input can fail.
#[instrument(skip(grid, rng), fields(height = grid.height(), width = grid.width()))]
pub fn random_crop_with<R: Rng + ?Sized>(grid: &PixelGrid, rng: &mut R) -> Result<PixelGrid> {
    if grid.is_empty() {
        return Err(PixmatError::EmptyResult(format!(
            "cannot crop a {}x{} grid",
            grid.height(),
            grid.width()
        )));
    }
    let h_start = rng.gen_range(0..grid.height());
    let w_start = rng.gen_range(0..grid.width());
    debug!(h_start, w_start, "Crop offsets drawn");
    crop_from(grid, h_start, w_start)
}

/// Delete the first `h_start` rows and the first `w_start` columns.
///
/// Fails with `EmptyResult` when the offsets would remove every row or every
/// column.
pub fn crop_from(grid: &PixelGrid, h_start: usize, w_start: usize) -> Result<PixelGrid> {
    if h_start >= grid.height() || w_start >= grid.width() {
        return Err(PixmatError::EmptyResult(format!(
            "offsets ({h_start}, {w_start}) leave nothing of a {}x{} grid",
            grid.height(),
            grid.width()
        )));
    }
    let out_h = grid.height() - h_start;
    let out_w = grid.width() - w_start;
    info!(out_h, out_w, "Cropping grid");
    remap(grid, out_h, out_w, |r, c| (r + h_start, c + w_start))
}
