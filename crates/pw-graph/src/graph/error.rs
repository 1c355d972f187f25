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

//! Graph errors.

use thiserror::Error as ThisError;

// ----------------------------------------------------------------------------
// Enums
// ----------------------------------------------------------------------------

/// Graph error.
#[derive(Clone, Debug, ThisError, PartialEq, Eq)]
pub enum Error {
    /// The node at the given index does not exist.
    #[error("node not found: {0}")]
    NotFound(usize),

    /// The node at the given index has already been visited.
    #[error("node already visited: {0}")]
    Found(usize),

    /// The graph has no nodes.
    #[error("graph is empty")]
    Empty,

    /// The graph has more than one node with in-degree zero.
    #[error("graph has multiple roots")]
    MultipleRoots,

    /// The edges supplied to the builder form a cycle.
    #[error("graph contains a cycle")]
    CycleDetected,
}

/// Graph result.
pub type Result<T = ()> = std::result::Result<T, Error>;
