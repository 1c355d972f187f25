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

//! Diagnostics for the pathway pipeline.
//!
//! This crate provides a small, dependency-free diagnostic system modeled on
//! the [Language Server Protocol][LSP] notion of a diagnostic: a severity, a
//! message, an optional source location and optional tags. It is used both to
//! report ingest-time parse errors (with a line/column location) and to carry
//! human-readable context for the graph, evaluation and layout errors defined
//! by the other crates in the workspace.
//!
//! [LSP]: https://microsoft.github.io/language-server-protocol/

mod diagnostic;

pub use diagnostic::location;
pub use diagnostic::location::{Location, Position};
pub use diagnostic::report;
pub use diagnostic::report::ResultExt;
pub use diagnostic::{Diagnostic, IntoDiagnostic, Severity, Tag};
