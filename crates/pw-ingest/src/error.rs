// Copyright (c) 2025-2026 Zensical and contributors

// SPDX-License-Identifier: MIT
// All contributions are certified under the DCO

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to
// deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NON-INFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
// FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS
// IN THE SOFTWARE.

// ----------------------------------------------------------------------------

//! Ingest errors.

use pw_model::Edition;
use thiserror::Error as ThisError;

/// Ingest error.
///
/// Line numbers are 1-based, matching what an editor would show for the
/// offending input line.
#[derive(Clone, Debug, ThisError, PartialEq, Eq)]
pub enum Error {
    /// A sequence line did not split into exactly two whitespace-separated
    /// tokens.
    #[error("line {0}: malformed line, expected `FROM TO`")]
    MalformedLine(usize),

    /// A combination name was used inconsistently: once as a plain action
    /// and once with component syntax, or twice with different component
    /// lists.
    #[error("line {0}: ambiguous combination `{1}`")]
    AmbiguousCombination(usize, String),

    /// A combination lists the same `(name, edition)` component twice.
    #[error(
        "line {0}: action combination `{1}` lists component `{2}` \
         (edition {3}) more than once"
    )]
    DuplicateCombinationComponent(usize, String, String, Edition),

    /// A style line referenced an action not present in the sequence input.
    #[error("line {0}: unknown action `{1}`")]
    UnknownAction(usize, String),

    /// A style line's color token failed to parse.
    #[error("line {0}: bad color `{1}`")]
    BadColor(usize, String),
}

/// Ingest result.
pub type Result<T> = std::result::Result<T, Error>;
