// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Geometric transforms — axis reversal, quarter-turn rotation, transpose and
// random cropping. These move whole pixels and never touch sample values.

pub mod crop;
pub mod reverse;
pub mod rotate;

use pixmat_core::{PixelGrid, Result};

/// Build an `out_h` x `out_w` grid whose pixel `(r, c)` is copied from the
/// source pixel `source(r, c)`, all channels at once.
pub(crate) fn remap(
    grid: &PixelGrid,
    out_h: usize,
    out_w: usize,
    source: impl Fn(usize, usize) -> (usize, usize),
) -> Result<PixelGrid> {
    let channels = grid.channels();
    let mut data = Vec::with_capacity(out_h * out_w * channels);
    for r in 0..out_h {
        for c in 0..out_w {
            let (sr, sc) = source(r, c);
            data.extend_from_slice(grid.pixel(sr, sc));
        }
    }
    PixelGrid::from_raw(out_h, out_w, channels, data)
}
