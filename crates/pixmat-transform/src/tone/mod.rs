// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tone transforms — global-mean black/white threshold, colour inversion, and
// interior brightening with global range rescaling.

pub mod brighten;
pub mod invert;
pub mod threshold;
