// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pixmat — One-call image transforms.
//
// Ties the loader, a single transform and the writer together: load a file or
// URL, apply one operation, write the result to an explicit or configured
// path, and hand the transformed grid back to the caller.

pub mod runner;

pub use runner::{RunOutput, Runner};

// Re-export the building blocks so callers only need this crate.
pub use pixmat_core::{
    ColorMode, NormalizedGrid, PixelGrid, PixmatError, Result, ReverseMode, Rotation,
    TransformConfig,
};
pub use pixmat_io::{ImageSource, Loader, Writer};
pub use pixmat_transform::Operation;
