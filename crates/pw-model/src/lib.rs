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

//! Data model for adaptation pathway maps.
//!
//! This crate defines the leaf types shared by every other crate in the
//! workspace: [`Action`] and [`ActionCombination`]-shaped actions, [`Metric`]
//! and [`MetricValue`], [`Scenario`] time series and the [`Sequence`] of
//! actions produced by the generator. Nothing here depends on [`pw-graph`][],
//! [`pw-pathway`][] or any other crate in the workspace; this is the leaf of
//! the dependency order described in the system overview.
//!
//! [`pw-graph`]: https://docs.rs/pw-graph
//! [`pw-pathway`]: https://docs.rs/pw-pathway

mod action;
mod instance;
mod metric;
mod scenario;
mod sequence;

pub use action::{Action, ActionStyle, Color, Edition, Error, Result};
pub use instance::{ActionBegin, ActionConversion, ActionEnd, ActionInstance};
pub use metric::{Metric, MetricEstimate, MetricValue};
pub use scenario::{Scenario, TimeSeries};
pub use sequence::{Sequence, SequenceFilter};
