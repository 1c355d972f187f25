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

//! Generator errors.

use thiserror::Error as ThisError;

/// Generator error.
///
/// `EvalTypeMismatch` and `FilterTypeMismatch` name the metric that a
/// sequence was missing when the evaluator or filter needed it. The source's
/// "non-numeric value" failure mode doesn't arise here: [`pw_model::MetricValue`]
/// always carries a numeric `value`, so the only way a sum or comparison can
/// fail to make sense is the metric being entirely absent from a sequence.
#[derive(Clone, Debug, ThisError, PartialEq)]
pub enum Error {
    /// A metric named by the evaluator's aggregation step is missing from
    /// every action in the truncated prefix.
    #[error("metric `{0}` has no values to aggregate over this sequence")]
    EvalTypeMismatch(String),

    /// A metric filter names a metric absent from a sequence's performance.
    #[error("metric `{0}` is not present in this sequence's performance")]
    FilterTypeMismatch(String),
}

/// Generator result.
pub type Result<T = ()> = std::result::Result<T, Error>;
