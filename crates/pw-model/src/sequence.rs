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

//! Sequence.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::metric::{Metric, MetricValue};

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Sequence filter state.
///
/// Carries the outcome of running a [`Sequence`] through the filter stage of
/// the generator: whether it passed evaluation (`is_valid`), whether it was
/// dropped by threshold or sampling (`filtered_out`), and, when either flag
/// is false, a human-readable `reason`. A sequence keeps this state attached
/// rather than being dropped outright, so that excluded sequences remain
/// inspectable for diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SequenceFilter {
    /// Whether the sequence survived evaluation.
    pub is_valid: bool,
    /// Whether the sequence was dropped by the filter stage.
    pub filtered_out: bool,
    /// Reason recorded by the stage that flipped a flag to false.
    pub reason: Option<String>,
}

impl SequenceFilter {
    /// Creates a filter state for a sequence that has passed both stages.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { is_valid: true, filtered_out: false, reason: None }
    }

    /// Marks the sequence invalid, e.g. on duplicate-prefix truncation.
    #[must_use]
    pub fn invalidate(mut self, reason: impl Into<String>) -> Self {
        self.is_valid = false;
        self.reason = Some(reason.into());
        self
    }

    /// Marks the sequence as excluded by the filter stage.
    #[must_use]
    pub fn exclude(mut self, reason: impl Into<String>) -> Self {
        self.filtered_out = true;
        self.reason = Some(reason.into());
        self
    }

    /// Returns whether the sequence should be retained in the final set.
    #[inline]
    #[must_use]
    pub fn is_kept(&self) -> bool {
        self.is_valid && !self.filtered_out
    }
}

// ----------------------------------------------------------------------------

/// Sequence.
///
/// An ordered list of actions produced by the generator, together with its
/// aggregated per-metric performance and its [`SequenceFilter`] state. Two
/// sequences are considered duplicates by the generator iff their `actions`
/// and `performance` match exactly, per the prefix-truncation rule in
/// §4.5 — see [`Sequence::matches`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Sequence {
    /// Ordered actions.
    pub actions: Vec<Action>,
    /// Aggregated per-metric performance.
    pub performance: BTreeMap<Metric, MetricValue>,
    /// Evaluation and filtering state.
    pub filter: SequenceFilter,
}

impl Sequence {
    /// Creates a sequence from its ordered actions, with default performance
    /// and an unevaluated filter state.
    #[inline]
    #[must_use]
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions, performance: BTreeMap::new(), filter: SequenceFilter::new() }
    }

    /// Returns the number of actions in this sequence.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns whether this sequence carries no actions.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns whether this sequence is a duplicate of `other`: same actions
    /// in the same order, and identical aggregated performance. Filter state
    /// is deliberately excluded from the comparison.
    #[must_use]
    pub fn matches(&self, other: &Sequence) -> bool {
        self.actions == other.actions && self.performance == other.performance
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_starts_valid_and_kept() {
        let filter = SequenceFilter::new();
        assert!(filter.is_kept());
    }

    #[test]
    fn invalidate_and_exclude_flip_kept() {
        assert!(!SequenceFilter::new().invalidate("duplicate prefix").is_kept());
        assert!(!SequenceFilter::new().exclude("below threshold").is_kept());
    }

    #[test]
    fn sequences_match_on_actions_and_performance_only() {
        let mut a = Sequence::new(vec![Action::new("x")]);
        let mut b = Sequence::new(vec![Action::new("x")]);
        a.filter = a.filter.exclude("sampled out");
        assert!(a.matches(&b));
        b.performance.insert(Metric::new("cost"), MetricValue::measured(1.0));
        assert!(!a.matches(&b));
    }
}
