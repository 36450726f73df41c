// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Where a source image comes from.

use std::path::{Path, PathBuf};

/// A local file or a remote URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Path(PathBuf),
    Url(String),
}

impl ImageSource {
    /// Interpret `location` as a URL when `url` is set, otherwise as a path.
    pub fn new(location: impl Into<String>, url: bool) -> Self {
        let location = location.into();
        if url {
            ImageSource::Url(location)
        } else {
            ImageSource::Path(PathBuf::from(location))
        }
    }

    /// A local file.
    pub fn path(path: impl AsRef<Path>) -> Self {
        ImageSource::Path(path.as_ref().to_path_buf())
    }

    /// A remote image fetched over HTTP.
    pub fn url(url: impl Into<String>) -> Self {
        ImageSource::Url(url.into())
    }

    /// True for URL sources.
    pub fn is_remote(&self) -> bool {
        matches!(self, ImageSource::Url(_))
    }
}

impl std::fmt::Display for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSource::Path(p) => write!(f, "{}", p.display()),
            ImageSource::Url(u) => f.write_str(u),
        }
    }
}
