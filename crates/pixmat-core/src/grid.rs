// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Owned pixel grids. `PixelGrid` holds 8-bit samples; `NormalizedGrid` holds
// floating-point samples in [0, 1] produced by range-rescaling transforms.

use crate::error::{PixmatError, Result};

/// Owned 8-bit pixel grid in row-major `[row][col][channel]` layout.
///
/// `channels` is 1 for grayscale and 3 for RGB. The backing buffer is
/// tightly packed: `data.len() == height * width * channels`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    height: usize,
    width: usize,
    channels: usize,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Wrap a raw buffer, validating its length and channel depth.
    pub fn from_raw(height: usize, width: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        check_channels(channels)?;
        let expected = height * width * channels;
        if data.len() != expected {
            return Err(PixmatError::DimensionMismatch(format!(
                "{height}x{width}x{channels} grid needs {expected} samples, got {}",
                data.len()
            )));
        }
        Ok(Self {
            height,
            width,
            channels,
            data,
        })
    }

    /// A grid with every sample set to `value`.
    pub fn filled(height: usize, width: usize, channels: usize, value: u8) -> Result<Self> {
        Self::from_raw(height, width, channels, vec![value; height * width * channels])
    }

    /// Build a grid by evaluating `f(row, col, channel)` for every sample.
    pub fn from_fn(
        height: usize,
        width: usize,
        channels: usize,
        mut f: impl FnMut(usize, usize, usize) -> u8,
    ) -> Result<Self> {
        check_channels(channels)?;
        let mut data = Vec::with_capacity(height * width * channels);
        for row in 0..height {
            for col in 0..width {
                for ch in 0..channels {
                    data.push(f(row, col, ch));
                }
            }
        }
        Self::from_raw(height, width, channels, data)
    }

    /// Build a single-channel grid from nested rows. All rows must share a length.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != width) {
            return Err(PixmatError::DimensionMismatch(
                "rows have different lengths".to_owned(),
            ));
        }
        Self::from_raw(height, width, 1, rows.concat())
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Samples per pixel: 1 (grayscale) or 3 (RGB).
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// `(height, width, channels)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.height, self.width, self.channels)
    }

    /// True when the grid has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.height == 0 || self.width == 0
    }

    #[inline]
    fn idx(&self, row: usize, col: usize, ch: usize) -> usize {
        (row * self.width + col) * self.channels + ch
    }

    /// Sample at `(row, col, ch)`. Panics when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize, ch: usize) -> u8 {
        self.data[self.idx(row, col, ch)]
    }

    /// Overwrite the sample at `(row, col, ch)`. Panics when out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, ch: usize, value: u8) {
        let i = self.idx(row, col, ch);
        self.data[i] = value;
    }

    /// All channel samples of one pixel.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> &[u8] {
        let start = self.idx(row, col, 0);
        &self.data[start..start + self.channels]
    }

    /// All samples of one row, `width * channels` long.
    #[inline]
    pub fn row(&self, row: usize) -> &[u8] {
        let stride = self.width * self.channels;
        &self.data[row * stride..(row + 1) * stride]
    }

    /// The packed row-major sample buffer.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Consume the grid and return its sample buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Error unless the grid has exactly `expected` channels.
    pub fn require_channels(&self, expected: usize) -> Result<()> {
        if self.channels == expected {
            Ok(())
        } else {
            Err(PixmatError::channels(expected, self.channels))
        }
    }
}

/// Floating-point grid with samples normalised into [0, 1].
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedGrid {
    height: usize,
    width: usize,
    channels: usize,
    data: Vec<f32>,
}

impl NormalizedGrid {
    /// Wrap a raw buffer, validating its length and channel depth.
    pub fn from_raw(height: usize, width: usize, channels: usize, data: Vec<f32>) -> Result<Self> {
        check_channels(channels)?;
        if data.len() != height * width * channels {
            return Err(PixmatError::DimensionMismatch(format!(
                "{height}x{width}x{channels} grid needs {} samples, got {}",
                height * width * channels,
                data.len()
            )));
        }
        Ok(Self {
            height,
            width,
            channels,
            data,
        })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Samples per pixel.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Sample at `(row, col, ch)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize, ch: usize) -> f32 {
        self.data[(row * self.width + col) * self.channels + ch]
    }

    /// The packed row-major sample buffer.
    pub fn as_raw(&self) -> &[f32] {
        &self.data
    }

    /// Encode to 8-bit samples as `v * 255`, truncated toward zero.
    pub fn to_pixels(&self) -> PixelGrid {
        let data = self
            .data
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0) as u8)
            .collect();
        PixelGrid {
            height: self.height,
            width: self.width,
            channels: self.channels,
            data,
        }
    }
}

fn check_channels(channels: usize) -> Result<()> {
    match channels {
        1 | 3 => Ok(()),
        other => Err(PixmatError::InvalidArgument(format!(
            "unsupported channel depth {other} (expected 1 or 3)"
        ))),
    }
}
