// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for pixmat.

use thiserror::Error;

/// Top-level error type for all pixmat operations.
#[derive(Debug, Error)]
pub enum PixmatError {
    // -- Caller errors --
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // -- Grid shape errors --
    #[error("expected a grid with {expected} channel(s), got {actual}")]
    DimensionError { expected: usize, actual: usize },

    #[error("grid shape mismatch: {0}")]
    DimensionMismatch(String),

    #[error("operation produced an empty grid: {0}")]
    EmptyResult(String),

    // -- Image I/O --
    #[error("failed to decode source image: {0}")]
    DecodeFailure(String),

    #[error("failed to encode image: {0}")]
    Encode(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PixmatError>;

impl PixmatError {
    /// Build a `DimensionError` when `actual` channels do not match `expected`.
    pub fn channels(expected: usize, actual: usize) -> Self {
        PixmatError::DimensionError { expected, actual }
    }
}
