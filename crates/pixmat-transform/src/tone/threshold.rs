// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Black/white filter — binarization against the global mean intensity.

use pixmat_core::{PixelGrid, PixmatError, Result};
use tracing::{debug, info, instrument};

const BLACK: u8 = 0;
const WHITE: u8 = 255;

/// Mean sample value of a grayscale grid, rounded to one decimal place.
///
/// Rounding is half-to-even on the tenths digit, so a mean of `31.25` becomes
/// `31.2`.
pub fn mean_threshold(gray: &PixelGrid) -> Result<f64> {
    gray.require_channels(1)?;
    if gray.is_empty() {
        return Err(PixmatError::EmptyResult(
            "mean of an empty grid is undefined".to_owned(),
        ));
    }
    let sum: u64 = gray.as_raw().iter().map(|&v| v as u64).sum();
    let mean = sum as f64 / gray.as_raw().len() as f64;
    Ok((mean * 10.0).round_ties_even() / 10.0)
}

/// Map every pixel below the global mean to black and every other pixel to
/// white.
///
/// The input must be single-channel. The threshold is data-dependent and
/// recomputed for each call; there are no tuning parameters.
#[instrument(skip(gray), fields(height = gray.height(), width = gray.width()))]
pub fn bw_filter(gray: &PixelGrid) -> Result<PixelGrid> {
    let threshold = mean_threshold(gray)?;
    debug!(threshold, "Global mean threshold computed");

    let mut output = gray.clone();
    let mut white = 0usize;
    for row in 0..gray.height() {
        for col in 0..gray.width() {
            let val = gray.get(row, col, 0);
            let binary = if (val as f64) < threshold {
                BLACK
            } else {
                white += 1;
                WHITE
            };
            output.set(row, col, 0, binary);
        }
    }

    info!(threshold, white, "Black/white filter applied");
    Ok(output)
}
