// Copyright (c) 2025 Via Technology Ltd.

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The error module contains the library error type.

use thiserror::Error;

/// Errors produced by the sight line engine.
///
/// The arc fitter and the circle generator fail fast and surface these to
/// their caller; the sight line composer propagates them without masking,
/// so a degenerate selection (e.g. exactly antipodal positions) reaches
/// the caller as a reportable condition rather than as NaN geometry.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// An argument outside its supported range, e.g. a zero segment count.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Input positions for which no unique great circle or bearing exists.
    #[error("degenerate input: {0}")]
    DegenerateInput(&'static str),

    /// An error propagated unchanged from a projection.
    #[error("projection error: {0}")]
    Projection(String),
}

/// Result alias for sight line operations.
pub type Result<T> = core::result::Result<T, Error>;
