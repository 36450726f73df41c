// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Writer — encodes grids to image files or in-memory buffers.

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageFormat};
use pixmat_core::{PixelGrid, PixmatError, Result, TransformConfig};
use tracing::{debug, info, instrument};

use crate::convert::to_dynamic;

/// Persists grids. JPEG output uses the configured quality; every other
/// format uses the `image` crate's defaults.
pub struct Writer {
    jpeg_quality: u8,
}

impl Writer {
    /// Build a writer using the configured JPEG quality.
    pub fn new(config: &TransformConfig) -> Self {
        Self {
            jpeg_quality: config.jpeg_quality,
        }
    }

    /// Write `grid` to `path`, inferring the format from the extension and
    /// creating missing parent directories. Nothing is written when encoding
    /// fails.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save(&self, grid: &PixelGrid, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let format = ImageFormat::from_path(path).map_err(|err| {
            PixmatError::InvalidArgument(format!(
                "cannot infer image format for {}: {}",
                path.display(),
                err
            ))
        })?;
        // Encode fully in memory so a failed encode never leaves a file behind.
        let bytes = self.encode(grid, format)?;
        ensure_parent_dir(path)?;
        fs::write(path, &bytes)?;

        info!(
            height = grid.height(),
            width = grid.width(),
            bytes = bytes.len(),
            ?format,
            "Image saved"
        );
        Ok(())
    }

    /// Encode `grid` into `format`, returning the raw bytes.
    pub fn encode(&self, grid: &PixelGrid, format: ImageFormat) -> Result<Vec<u8>> {
        let image = to_dynamic(grid)?;
        let mut buffer = Vec::new();
        if format == ImageFormat::Jpeg {
            self.write_jpeg(&image, &mut buffer)?;
        } else {
            let mut cursor = Cursor::new(&mut buffer);
            image.write_to(&mut cursor, format).map_err(|err| {
                PixmatError::Encode(format!("image encoding failed: {}", err))
            })?;
        }
        debug!(bytes = buffer.len(), ?format, "Image encoded");
        Ok(buffer)
    }

    fn write_jpeg<W: Write>(&self, image: &DynamicImage, out: W) -> Result<()> {
        let encoder = JpegEncoder::new_with_quality(out, self.jpeg_quality);
        image
            .write_with_encoder(encoder)
            .map_err(|err| PixmatError::Encode(format!("JPEG encoding failed: {}", err)))
    }
}

impl Default for Writer {
    fn default() -> Self {
        Self::new(&TransformConfig::default())
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ImageSource, Loader};
    use pixmat_core::ColorMode;

    fn checker(h: usize, w: usize, d: usize) -> PixelGrid {
        PixelGrid::from_fn(h, w, d, |r, c, ch| if (r + c) % 2 == 0 { 20 + ch as u8 } else { 230 })
            .unwrap()
    }

    /// PNG is lossless, so a saved grid loads back unchanged.
    #[test]
    fn png_save_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/grid.png");
        let grid = checker(5, 7, 3);

        Writer::default().save(&grid, &path).unwrap();
        let back = Loader::default()
            .load(&ImageSource::path(&path), ColorMode::Rgb)
            .unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn jpeg_save_keeps_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.jpg");
        let grid = checker(16, 9, 3);

        Writer::new(&TransformConfig {
            jpeg_quality: 60,
            ..Default::default()
        })
        .save(&grid, &path)
        .unwrap();

        let back = Loader::default()
            .load(&ImageSource::path(&path), ColorMode::Rgb)
            .unwrap();
        assert_eq!(back.shape(), (16, 9, 3));
    }

    #[test]
    fn grayscale_encodes_to_png_bytes() {
        let grid = checker(4, 4, 1);
        let bytes = Writer::default().encode(&grid, ImageFormat::Png).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        let back = Loader::default().decode(&bytes, ColorMode::Luma).unwrap();
        assert_eq!(back, grid);
    }

    /// JPEG caps each side at 65535 pixels; the failed encode must not leave
    /// an empty or truncated file at the target.
    #[test]
    fn failed_jpeg_encode_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.jpg");
        let grid = PixelGrid::filled(1, 70_000, 3, 9).unwrap();

        let result = Writer::default().save(&grid, &path);
        assert!(matches!(result, Err(PixmatError::Encode(_))));
        assert!(!path.exists());
    }

    #[test]
    fn unknown_extension_is_invalid_argument() {
        let dir = tempfile::tempdir().unwrap();
        let err = Writer::default()
            .save(&checker(2, 2, 3), dir.path().join("grid.nope"))
            .unwrap_err();
        assert!(matches!(err, PixmatError::InvalidArgument(_)));
    }
}
