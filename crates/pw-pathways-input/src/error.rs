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

//! Pathway-input errors.

use std::path::PathBuf;

use thiserror::Error as ThisError;

/// Pathway-input error.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A caller asked for scenario-based interpolation but supplied no
    /// scenario at all. Not raised by [`crate::generate_action_instances`]
    /// itself, which treats a missing scenario as "fall back to the plain
    /// sum" per §4.8 — this is for callers (the `pw` binary's `--scenario`
    /// flag) that made scenario use an explicit, non-optional request.
    #[error("no scenario was supplied for scenario-based interpolation")]
    NoScenario,

    /// The scenario doesn't carry a time series for the named metric.
    #[error("scenario has no time series for metric `{0}`")]
    NoTimeSeries(String),

    /// [`crate::interpolate_time`] was asked to interpolate a value outside
    /// the time series' covered range.
    #[error(
        "value {value} is out of the interpolatable range [{series_low}, \
         {series_high}]"
    )]
    OutOfRange {
        /// The value that fell outside the series.
        value: f64,
        /// The series' lowest covered value.
        series_low: f64,
        /// The series' highest covered value.
        series_high: f64,
    },

    /// Writing a text artifact failed.
    #[error("failed to write `{path}`: {source}")]
    WriteFailure {
        /// The path that failed to write.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Pathway-input result.
pub type Result<T> = std::result::Result<T, Error>;
