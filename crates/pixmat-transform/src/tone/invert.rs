// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Colour inversion — replaces each RGB sample by its complement.

use pixmat_core::{PixelGrid, Result};
use tracing::{info, instrument};

/// Replace every R, G and B sample `v` with `255 - v`.
///
/// Requires a three-channel grid. Channels are independent and no pixel reads
/// its neighbours.
#[instrument(skip(rgb), fields(height = rgb.height(), width = rgb.width()))]
pub fn inverse(rgb: &PixelGrid) -> Result<PixelGrid> {
    rgb.require_channels(3)?;
    info!("Inverting colours");

    let mut negative = rgb.clone();
    for x in 0..rgb.height() {
        for y in 0..rgb.width() {
            for ch in 0..3 {
                negative.set(x, y, ch, 255 - rgb.get(x, y, ch));
            }
        }
    }
    Ok(negative)
}
