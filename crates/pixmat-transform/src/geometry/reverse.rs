// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Axis reversal — horizontal, vertical, and the composed "vertical mirror".

use pixmat_core::{PixelGrid, Result, ReverseMode};
use tracing::{debug, info, instrument};

use super::remap;

/// Reverse a grid along the axis selected by `mode`.
///
/// - `Horizontal`: output column `j` is input column `W-1-j`.
/// - `Vertical`: output row `i` is input row `H-1-i`.
/// - `VerticalMirror`: a vertical flip, then a horizontal flip of that result.
///
/// Dimensions and channel depth are preserved. Works on any channel depth.
#[instrument(skip_all, fields(height = grid.height(), width = grid.width(), mode = %mode))]
pub fn reverse(grid: &PixelGrid, mode: ReverseMode) -> Result<PixelGrid> {
    info!("Reversing grid");
    let out = match mode {
        ReverseMode::Horizontal => flip_columns(grid)?,
        ReverseMode::Vertical => flip_rows(grid)?,
        ReverseMode::VerticalMirror => {
            let flipped = flip_rows(grid)?;
            debug!("Vertical pass done, mirroring columns");
            flip_columns(&flipped)?
        }
    };
    Ok(out)
}

fn flip_columns(grid: &PixelGrid) -> Result<PixelGrid> {
    let (h, w) = (grid.height(), grid.width());
    remap(grid, h, w, |r, c| (r, w - 1 - c))
}

fn flip_rows(grid: &PixelGrid) -> Result<PixelGrid> {
    let (h, w) = (grid.height(), grid.width());
    remap(grid, h, w, |r, c| (h - 1 - r, c))
}
