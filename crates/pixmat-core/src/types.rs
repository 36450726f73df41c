// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Operation parameter types: reverse modes, rotation angles, and the colour
// mode a grid is loaded in.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PixmatError;

/// Axis along which `reverse` flips a grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReverseMode {
    /// Flip left-right: column `j` takes column `W-1-j`.
    #[default]
    Horizontal,
    /// Flip top-bottom: row `i` takes row `H-1-i`.
    Vertical,
    /// Vertical flip followed by a horizontal flip of the result.
    VerticalMirror,
}

impl ReverseMode {
    /// Canonical lowercase name, as accepted by `from_str`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReverseMode::Horizontal => "horizontal",
            ReverseMode::Vertical => "vertical",
            ReverseMode::VerticalMirror => "vertical mirror",
        }
    }
}

impl FromStr for ReverseMode {
    type Err = PixmatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" => Ok(ReverseMode::Horizontal),
            "vertical" => Ok(ReverseMode::Vertical),
            "vertical mirror" | "vertical-mirror" | "vertical_mirror" => {
                Ok(ReverseMode::VerticalMirror)
            }
            other => Err(PixmatError::InvalidArgument(format!(
                "unknown reverse mode '{other}' (expected horizontal, vertical or vertical mirror)"
            ))),
        }
    }
}

impl std::fmt::Display for ReverseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Clockwise quarter-turn rotations supported by `rotate`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Map a degree value onto a rotation. Only 90, 180 and 270 are accepted.
    pub fn from_degrees(degrees: i32) -> Result<Self, PixmatError> {
        match degrees {
            90 => Ok(Rotation::Deg90),
            180 => Ok(Rotation::Deg180),
            270 => Ok(Rotation::Deg270),
            other => Err(PixmatError::InvalidArgument(format!(
                "unsupported rotation of {other} degrees (expected 90, 180 or 270)"
            ))),
        }
    }

    /// Clockwise angle in degrees.
    pub fn degrees(&self) -> i32 {
        match self {
            Rotation::Deg90 => 90,
            Rotation::Deg180 => 180,
            Rotation::Deg270 => 270,
        }
    }

    /// Whether the rotation swaps the height and width axes.
    pub fn swaps_axes(&self) -> bool {
        !matches!(self, Rotation::Deg180)
    }
}

impl TryFrom<i32> for Rotation {
    type Error = PixmatError;

    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        Rotation::from_degrees(degrees)
    }
}

/// Channel layout a source image is decoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorMode {
    /// Three channels, alpha dropped.
    Rgb,
    /// One luminance channel.
    Luma,
}

impl ColorMode {
    /// Number of samples per pixel in this mode.
    pub fn channels(&self) -> usize {
        match self {
            ColorMode::Rgb => 3,
            ColorMode::Luma => 1,
        }
    }
}
