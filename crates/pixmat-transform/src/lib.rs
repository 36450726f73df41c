// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pixmat-transform — Pixel-grid transforms implemented by direct array
// indexing.
//
// Provides geometric transforms (reverse, rotate, transpose, random crop),
// tone transforms (black/white threshold, inverse, brighten), and a
// four-neighbour box blur. Every transform takes a borrowed grid and returns a
// new one; none of them call each other.

pub mod filter;
pub mod geometry;
pub mod operation;
pub mod tone;

// Re-export the transforms so callers can use `pixmat_transform::rotate` etc.
pub use filter::blur::{blur, blur_passes};
pub use geometry::crop::{crop_from, random_crop, random_crop_with};
pub use geometry::reverse::reverse;
pub use geometry::rotate::{rotate, rotate_degrees, transpose};
pub use operation::Operation;
pub use tone::brighten::brighten;
pub use tone::invert::inverse;
pub use tone::threshold::{bw_filter, mean_threshold};
