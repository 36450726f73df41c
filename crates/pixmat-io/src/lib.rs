// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// pixmat-io — Getting pixel grids in and out of encoded images.
//
// Loads PNG/JPEG/etc. from a local path or a URL into a `PixelGrid`, and
// writes grids back to files or in-memory encoded buffers using the `image`
// crate.

pub mod convert;
pub mod loader;
pub mod source;
pub mod writer;

pub use convert::{from_dynamic, to_dynamic};
pub use loader::Loader;
pub use source::ImageSource;
pub use writer::Writer;
