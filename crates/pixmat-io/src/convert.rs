// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Conversion between `image::DynamicImage` and `PixelGrid`.

use image::{DynamicImage, GrayImage, RgbImage};
use pixmat_core::{ColorMode, PixelGrid, PixmatError, Result};

/// Flatten a decoded image into a grid with the requested channel layout.
///
/// Alpha is dropped. Luma uses the ITU-R 601-2 weights in 16-bit fixed point
/// (`(19595 R + 38470 G + 7471 B + 0x8000) >> 16`), the usual convention for
/// "convert to L" in photo tooling, so a grey RGB pixel maps to itself.
pub fn from_dynamic(image: DynamicImage, mode: ColorMode) -> Result<PixelGrid> {
    let rgb = image.into_rgb8();
    let (w, h) = (rgb.width() as usize, rgb.height() as usize);
    match mode {
        ColorMode::Rgb => PixelGrid::from_raw(h, w, 3, rgb.into_raw()),
        ColorMode::Luma => {
            let data = rgb
                .pixels()
                .map(|p| {
                    let [r, g, b] = p.0;
                    let l = 19595 * r as u32 + 38470 * g as u32 + 7471 * b as u32 + 0x8000;
                    (l >> 16) as u8
                })
                .collect();
            PixelGrid::from_raw(h, w, 1, data)
        }
    }
}

/// Wrap a grid as an 8-bit `DynamicImage` (Luma8 or Rgb8).
pub fn to_dynamic(grid: &PixelGrid) -> Result<DynamicImage> {
    let w = u32::try_from(grid.width())
        .map_err(|_| PixmatError::Encode(format!("width {} exceeds u32", grid.width())))?;
    let h = u32::try_from(grid.height())
        .map_err(|_| PixmatError::Encode(format!("height {} exceeds u32", grid.height())))?;
    let data = grid.as_raw().to_vec();

    let image = match grid.channels() {
        1 => GrayImage::from_raw(w, h, data).map(DynamicImage::ImageLuma8),
        3 => RgbImage::from_raw(w, h, data).map(DynamicImage::ImageRgb8),
        other => return Err(PixmatError::channels(3, other)),
    };
    image.ok_or_else(|| PixmatError::Encode("failed to create image buffer".to_owned()))
}
