// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Quarter-turn rotation built from a transpose plus row or column reversal.

use pixmat_core::{PixelGrid, Result, Rotation};
use tracing::{debug, info, instrument};

use super::remap;

/// Rotate a grid clockwise by a quarter-turn multiple.
///
/// - 90: transpose, then reverse each resulting row. Output is `W x H`.
/// - 180: point reflection, `out[i][j] = in[H-1-i][W-1-j]`. Output is `H x W`.
/// - 270: transpose, then reverse the row order (a full counter-clockwise
///   quarter turn, so `rotate(rotate(g, 90), 270) == g`). Output is `W x H`.
///
/// The bare transpose is available as [`transpose`].
#[instrument(skip_all, fields(height = grid.height(), width = grid.width(), degrees = rotation.degrees()))]
pub fn rotate(grid: &PixelGrid, rotation: Rotation) -> Result<PixelGrid> {
    info!("Rotating grid");
    let out = match rotation {
        Rotation::Deg90 => {
            let t = transpose(grid)?;
            let (h, w) = (t.height(), t.width());
            remap(&t, h, w, |r, c| (r, w - 1 - c))?
        }
        Rotation::Deg180 => {
            let (h, w) = (grid.height(), grid.width());
            remap(grid, h, w, |r, c| (h - 1 - r, w - 1 - c))?
        }
        Rotation::Deg270 => {
            let t = transpose(grid)?;
            let (h, w) = (t.height(), t.width());
            remap(&t, h, w, |r, c| (h - 1 - r, c))?
        }
    };
    debug!(out_h = out.height(), out_w = out.width(), "Rotation complete");
    Ok(out)
}

/// Rotate by a raw degree value; anything but 90, 180 or 270 is rejected.
pub fn rotate_degrees(grid: &PixelGrid, degrees: i32) -> Result<PixelGrid> {
    rotate(grid, Rotation::from_degrees(degrees)?)
}

/// Swap the row and column axes: `out[i][j] = in[j][i]`.
pub fn transpose(grid: &PixelGrid) -> Result<PixelGrid> {
    remap(grid, grid.width(), grid.height(), |r, c| (c, r))
}
