// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Transform configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{PixmatError, Result};

/// Settings shared by the loader, the transforms and the writer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Offset added to interior RGB samples by `brighten` (default 50).
    pub brighten_intensity: i32,
    /// Blur strength; selects 1, 3 or 5 passes (default 50).
    pub blur_intensity: u32,
    /// Directory results are written to when no explicit path is given.
    pub output_dir: PathBuf,
    /// JPEG quality (1-100) used for `.jpg` outputs.
    pub jpeg_quality: u8,
    /// Global timeout for fetching URL sources, in seconds.
    pub fetch_timeout_secs: u64,
    /// Seed for `random_crop`; `None` draws offsets from OS entropy.
    pub crop_seed: Option<u64>,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            brighten_intensity: 50,
            blur_intensity: 50,
            output_dir: PathBuf::from("."),
            jpeg_quality: 90,
            fetch_timeout_secs: 30,
            crop_seed: None,
        }
    }
}

impl TransformConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as pretty JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// Reject out-of-range JPEG quality and a zero blur intensity.
    pub fn validate(&self) -> Result<()> {
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(PixmatError::InvalidArgument(format!(
                "jpeg_quality must be within 1..=100, got {}",
                self.jpeg_quality
            )));
        }
        if self.blur_intensity == 0 {
            return Err(PixmatError::InvalidArgument(
                "blur_intensity must be positive".to_owned(),
            ));
        }
        Ok(())
    }
}
