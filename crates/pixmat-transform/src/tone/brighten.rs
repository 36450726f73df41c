// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Brighten — offsets interior RGB samples, then rescales the whole grid into
// [0, 1] using its global minimum and maximum.

use pixmat_core::{NormalizedGrid, PixelGrid, Result};
use tracing::{debug, info, instrument, warn};

/// Add `intensity` to every interior R, G and B sample, then min-max rescale.
///
/// Interior means rows `1..H-1` and columns `1..W-1`; the one-pixel border
/// keeps its original value. Offsets are applied as real numbers, so samples
/// may leave [0, 255] before rescaling. The rescale `(v - min) / (max - min)`
/// spans the whole grid, border included, which renormalises the dynamic
/// range of the image rather than shifting it.
///
/// When every sample ends up equal there is no range to rescale into; the
/// output is then all `0.0`.
#[instrument(skip(rgb), fields(height = rgb.height(), width = rgb.width()))]
pub fn brighten(rgb: &PixelGrid, intensity: i32) -> Result<NormalizedGrid> {
    rgb.require_channels(3)?;
    info!("Brightening interior pixels");

    let (h, w) = (rgb.height(), rgb.width());
    let mut values: Vec<f64> = rgb.as_raw().iter().map(|&v| v as f64).collect();
    let offset = intensity as f64;

    for x in 1..h.saturating_sub(1) {
        for y in 1..w.saturating_sub(1) {
            let base = (x * w + y) * 3;
            for ch in 0..3 {
                values[base + ch] = rgb.get(x, y, ch) as f64 + offset;
            }
        }
    }

    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    debug!(min, max, "Global range before rescale");

    let range = max - min;
    let data: Vec<f32> = if values.is_empty() || range == 0.0 {
        warn!("Grid has no dynamic range; rescaled output is flat");
        vec![0.0; values.len()]
    } else {
        values.iter().map(|&v| ((v - min) / range) as f32).collect()
    };

    NormalizedGrid::from_raw(h, w, 3, data)
}
