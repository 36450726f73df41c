// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Loader — decodes a local file or a fetched URL into a fresh `PixelGrid`.

use std::io::Read;
use std::time::Duration;

use pixmat_core::{ColorMode, PixelGrid, PixmatError, Result, TransformConfig};
use tracing::{debug, info, instrument};

use crate::convert::from_dynamic;
use crate::source::ImageSource;

/// Decodes source images into pixel grids.
///
/// Remote sources are fetched with a blocking HTTP agent; the response body
/// is read fully into memory and released before decoding.
pub struct Loader {
    agent: ureq::Agent,
}

impl Loader {
    /// Build a loader whose HTTP agent uses the configured fetch timeout.
    pub fn new(config: &TransformConfig) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.fetch_timeout_secs)))
            .build()
            .into();
        Self { agent }
    }

    /// Load `source` and convert it to the requested colour mode.
    #[instrument(skip_all, fields(source = %source, ?mode))]
    pub fn load(&self, source: &ImageSource, mode: ColorMode) -> Result<PixelGrid> {
        let image = match source {
            ImageSource::Path(path) => image::open(path).map_err(|err| {
                PixmatError::DecodeFailure(format!("failed to open {}: {}", path.display(), err))
            })?,
            ImageSource::Url(url) => {
                let bytes = self.fetch(url)?;
                decode_image(&bytes)?
            }
        };

        let grid = from_dynamic(image, mode)?;
        info!(
            height = grid.height(),
            width = grid.width(),
            channels = grid.channels(),
            "Image loaded"
        );
        Ok(grid)
    }

    /// Decode already-fetched bytes (PNG, JPEG, etc.).
    #[instrument(skip(self, data), fields(data_len = data.len()))]
    pub fn decode(&self, data: &[u8], mode: ColorMode) -> Result<PixelGrid> {
        let grid = from_dynamic(decode_image(data)?, mode)?;
        debug!(height = grid.height(), width = grid.width(), "Image decoded from bytes");
        Ok(grid)
    }

    /// Download the raw bytes behind `url`.
    pub fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let resp = self
            .agent
            .get(url)
            .call()
            .map_err(|e| PixmatError::DecodeFailure(format!("failed to fetch {url}: {e}")))?;
        let mut data = Vec::new();
        resp.into_body()
            .into_reader()
            .read_to_end(&mut data)
            .map_err(|e| PixmatError::DecodeFailure(format!("failed to read {url}: {e}")))?;
        debug!(bytes = data.len(), "Remote image fetched");
        Ok(data)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new(&TransformConfig::default())
    }
}

fn decode_image(data: &[u8]) -> Result<image::DynamicImage> {
    image::load_from_memory(data)
        .map_err(|err| PixmatError::DecodeFailure(format!("failed to decode image: {}", err)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
    use std::io::Write;
    use std::net::TcpListener;
    use std::thread::JoinHandle;

    use crate::writer::Writer;

    /// Serve a single HTTP response on an ephemeral local port and return the
    /// URL of the served path.
    fn serve_once(status: &'static str, body: Vec<u8>) -> (String, JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request: Vec<u8> = Vec::new();
            let mut chunk = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut chunk).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
            }
            let head = format!(
                "HTTP/1.1 {status}\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            // The client may hang up early on an error status.
            let _ = stream
                .write_all(head.as_bytes())
                .and_then(|_| stream.write_all(&body))
                .and_then(|_| stream.flush());
        });
        (format!("http://{addr}/image.png"), handle)
    }

    fn write_png(dir: &std::path::Path) -> std::path::PathBuf {
        let mut img = RgbImage::from_pixel(4, 3, Rgb([10, 20, 30]));
        img.put_pixel(3, 2, Rgb([200, 100, 50]));
        let path = dir.join("source.png");
        DynamicImage::ImageRgb8(img).save(&path).unwrap();
        path
    }

    #[test]
    fn loads_png_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path());

        let grid = Loader::default()
            .load(&ImageSource::path(&path), ColorMode::Rgb)
            .unwrap();
        assert_eq!(grid.shape(), (3, 4, 3));
        assert_eq!(grid.pixel(2, 3), &[200, 100, 50]);
        assert_eq!(grid.pixel(0, 0), &[10, 20, 30]);
    }

    #[test]
    fn luma_mode_yields_single_channel() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path());
        let grid = Loader::default()
            .load(&ImageSource::path(&path), ColorMode::Luma)
            .unwrap();
        assert_eq!(grid.shape(), (3, 4, 1));
    }

    #[test]
    fn missing_file_is_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = Loader::default()
            .load(&ImageSource::path(dir.path().join("nope.png")), ColorMode::Rgb)
            .unwrap_err();
        assert!(matches!(err, PixmatError::DecodeFailure(_)));
    }

    #[test]
    fn garbage_bytes_are_decode_failure() {
        let err = Loader::default()
            .decode(b"definitely not an image", ColorMode::Rgb)
            .unwrap_err();
        assert!(matches!(err, PixmatError::DecodeFailure(_)));
    }

    #[test]
    fn url_source_decodes_served_png() {
        let grid = PixelGrid::from_fn(3, 5, 3, |r, c, ch| (r * 60 + c * 12 + ch * 3) as u8).unwrap();
        let png = Writer::default().encode(&grid, ImageFormat::Png).unwrap();
        let (url, server) = serve_once("200 OK", png);

        let loaded = Loader::default()
            .load(&ImageSource::url(url), ColorMode::Rgb)
            .unwrap();
        server.join().unwrap();
        assert_eq!(loaded, grid);
    }

    #[test]
    fn not_found_status_is_decode_failure() {
        let (url, server) = serve_once("404 Not Found", b"missing".to_vec());

        let err = Loader::default()
            .load(&ImageSource::url(url), ColorMode::Rgb)
            .unwrap_err();
        server.join().unwrap();
        assert!(matches!(err, PixmatError::DecodeFailure(_)));
    }

    #[test]
    fn unreachable_url_is_decode_failure() {
        let loader = Loader::new(&TransformConfig {
            fetch_timeout_secs: 2,
            ..Default::default()
        });
        let err = loader
            .load(&ImageSource::url("http://127.0.0.1:1/missing.png"), ColorMode::Rgb)
            .unwrap_err();
        assert!(matches!(err, PixmatError::DecodeFailure(_)));
    }
}
