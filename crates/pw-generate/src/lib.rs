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

//! Combinatorial sequence generation, evaluation and filtering.
//!
//! Three stages run in order over a set of actions:
//!
//! - [`generate_sequences`] enumerates permutations under an
//!   [`ActionDependency`] constraint algebra.
//! - [`evaluate_sequences`] truncates each sequence to the prefix needed to
//!   reach a planning horizon and aggregates its metrics.
//! - [`filter_sequences`] drops sequences failing metric thresholds, then
//!   samples down to a shortlist cap.

mod error;
mod evaluate;
mod filter;
mod generate;
mod permutations;

pub use error::{Error, Result};
pub use evaluate::{determine_number_needed_actions, evaluate_criterion, evaluate_sequences};
pub use filter::{seeded_rng, filter_sequences, MetricFilter, NumberComparison};
pub use generate::{generate_sequences, ActionDependency, SequenceComparison};
pub use permutations::Permutations;
