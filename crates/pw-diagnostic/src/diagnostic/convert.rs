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

//! Diagnostic conversions.

use super::{Diagnostic, Severity};

// ----------------------------------------------------------------------------
// Traits
// ----------------------------------------------------------------------------

/// Conversion into [`Diagnostic`].
///
/// This trait allows third-party error and event types to be folded into the
/// diagnostic system without requiring them to depend on this crate. The
/// blanket implementation for [`Diagnostic`] itself makes the trait bound
/// accepted by [`Report::add`][] and [`Report::with`][] satisfied by values
/// that are already diagnostics, which is the common case when using the
/// [`error!`][], [`warning!`][] and friends macros.
///
/// [`Report::add`]: crate::diagnostic::report::Report::add
/// [`Report::with`]: crate::diagnostic::report::Report::with
/// [`error!`]: crate::error!
/// [`warning!`]: crate::warning!
pub trait IntoDiagnostic {
    /// Converts into a diagnostic.
    fn into_diagnostic(self) -> Diagnostic;
}

// ----------------------------------------------------------------------------
// Blanket implementations
// ----------------------------------------------------------------------------

impl IntoDiagnostic for Diagnostic {
    /// Returns the diagnostic as is.
    #[inline]
    fn into_diagnostic(self) -> Diagnostic {
        self
    }
}

impl IntoDiagnostic for &str {
    /// Creates a diagnostic with error severity from a string slice.
    ///
    /// This is a convenience implementation for call sites that only have a
    /// plain message and don't need a specific severity or location, e.g.,
    /// when bridging diagnostics from a library that models them as strings.
    #[inline]
    fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::new(Severity::Error, self)
    }
}

impl IntoDiagnostic for String {
    /// Creates a diagnostic with error severity from an owned string.
    #[inline]
    fn into_diagnostic(self) -> Diagnostic {
        Diagnostic::new(Severity::Error, self)
    }
}
