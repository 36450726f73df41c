// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Operation — names one transform together with its parameters, the colour
// mode its input should be loaded in, and the file name its result is
// conventionally written to.

use pixmat_core::{ColorMode, PixelGrid, Result, ReverseMode, Rotation, TransformConfig};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{blur, brighten, bw_filter, inverse, random_crop_with, reverse, rotate};

/// A single transform request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Reverse { mode: ReverseMode },
    Rotate { rotation: Rotation },
    BwFilter,
    Inverse,
    Brighten { intensity: i32 },
    Blur { intensity: u32 },
    RandomCrop,
}

impl Operation {
    /// `Brighten` with the configured default intensity.
    pub fn brighten_default(config: &TransformConfig) -> Self {
        Operation::Brighten {
            intensity: config.brighten_intensity,
        }
    }

    /// `Blur` with the configured default intensity.
    pub fn blur_default(config: &TransformConfig) -> Self {
        Operation::Blur {
            intensity: config.blur_intensity,
        }
    }

    /// Colour mode the source image must be decoded into.
    pub fn color_mode(&self) -> ColorMode {
        match self {
            Operation::BwFilter => ColorMode::Luma,
            _ => ColorMode::Rgb,
        }
    }

    /// Conventional output file name for this operation.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            Operation::Reverse { .. } => "image_reversed.png",
            Operation::Rotate { .. } => "rotated_image.png",
            Operation::BwFilter => "bwfiltered_image.jpg",
            Operation::Inverse => "negative_image.jpg",
            Operation::Brighten { .. } => "brightened_image.jpg",
            Operation::Blur { intensity } if *intensity > 100 => "blurred_image1.jpg",
            Operation::Blur { .. } => "blurred_image.jpg",
            Operation::RandomCrop => "randomlycropped_image.jpg",
        }
    }

    /// Run the transform. `rng` is only consulted by `RandomCrop`.
    ///
    /// `Brighten` produces a normalised grid; it is encoded back to 8-bit
    /// samples here.
    pub fn apply<R: Rng + ?Sized>(&self, grid: &PixelGrid, rng: &mut R) -> Result<PixelGrid> {
        match *self {
            Operation::Reverse { mode } => reverse(grid, mode),
            Operation::Rotate { rotation } => rotate(grid, rotation),
            Operation::BwFilter => bw_filter(grid),
            Operation::Inverse => inverse(grid),
            Operation::Brighten { intensity } => Ok(brighten(grid, intensity)?.to_pixels()),
            Operation::Blur { intensity } => blur(grid, intensity),
            Operation::RandomCrop => random_crop_with(grid, rng),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Reverse { mode } => write!(f, "reverse ({mode})"),
            Operation::Rotate { rotation } => write!(f, "rotate ({} degrees)", rotation.degrees()),
            Operation::BwFilter => f.write_str("black/white filter"),
            Operation::Inverse => f.write_str("inverse"),
            Operation::Brighten { intensity } => write!(f, "brighten ({intensity})"),
            Operation::Blur { intensity } => write!(f, "blur ({intensity})"),
            Operation::RandomCrop => f.write_str("random crop"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn only_bw_filter_loads_luma() {
        assert_eq!(Operation::BwFilter.color_mode(), ColorMode::Luma);
        assert_eq!(Operation::Inverse.color_mode(), ColorMode::Rgb);
        assert_eq!(Operation::Blur { intensity: 50 }.color_mode(), ColorMode::Rgb);
    }

    #[test]
    fn strong_blur_uses_alternate_file_name() {
        assert_eq!(
            Operation::Blur { intensity: 100 }.default_file_name(),
            "blurred_image.jpg"
        );
        assert_eq!(
            Operation::Blur { intensity: 101 }.default_file_name(),
            "blurred_image1.jpg"
        );
    }

    #[test]
    fn defaults_come_from_config() {
        let cfg = TransformConfig {
            brighten_intensity: -20,
            blur_intensity: 80,
            ..Default::default()
        };
        assert_eq!(
            Operation::brighten_default(&cfg),
            Operation::Brighten { intensity: -20 }
        );
        assert_eq!(Operation::blur_default(&cfg), Operation::Blur { intensity: 80 });
    }

    #[test]
    fn apply_dispatches_to_transform() {
        let rgb = PixelGrid::filled(3, 3, 3, 100).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let out = Operation::Inverse.apply(&rgb, &mut rng).unwrap();
        assert!(out.as_raw().iter().all(|&v| v == 155));

        let rotated = Operation::Rotate {
            rotation: Rotation::Deg90,
        }
        .apply(&PixelGrid::filled(2, 5, 3, 0).unwrap(), &mut rng)
        .unwrap();
        assert_eq!(rotated.shape(), (5, 2, 3));
    }

    #[test]
    fn brighten_is_encoded_to_bytes() {
        let rgb = PixelGrid::filled(5, 5, 3, 100).unwrap();
        let out = Operation::Brighten { intensity: 50 }
            .apply(&rgb, &mut StdRng::seed_from_u64(0))
            .unwrap();
        assert_eq!(out.get(0, 0, 0), 0);
        assert_eq!(out.get(2, 2, 2), 255);
    }

    #[test]
    fn serializes_with_op_tag() {
        let op = Operation::Reverse {
            mode: ReverseMode::VerticalMirror,
        };
        let json = serde_json::to_string(&op).unwrap();
        assert_eq!(json, r#"{"op":"reverse","mode":"vertical-mirror"}"#);

        let back: Operation = serde_json::from_str(r#"{"op":"blur","intensity":120}"#).unwrap();
        assert_eq!(back, Operation::Blur { intensity: 120 });
    }
}
