// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pixmat — Core grid types, modes, configuration and error definitions shared
// across all crates.

pub mod config;
pub mod error;
pub mod grid;
pub mod types;

pub use config::TransformConfig;
pub use error::{PixmatError, Result};
pub use grid::{NormalizedGrid, PixelGrid};
pub use types::*;
