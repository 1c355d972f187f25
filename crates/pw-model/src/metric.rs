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

//! Metric.

use std::fmt;

use serde::{Deserialize, Serialize};

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Metric.
///
/// A metric is identified by name alone, and used as the key of the maps
/// carried by [`Action`][], [`Sequence`][] and [`Scenario`][]. It deliberately
/// doesn't carry a unit: the source keeps a `default_units` singleton for
/// dimensional bookkeeping, which this crate doesn't reproduce, per the
/// "unit conversion libraries" non-goal.
///
/// [`Action`]: crate::Action
/// [`Sequence`]: crate::Sequence
/// [`Scenario`]: crate::Scenario
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Metric(String);

impl Metric {
    /// Creates a metric with the given name.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the metric name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Metric {
    /// Formats the metric for display.
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Metric {
    #[inline]
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Metric {
    #[inline]
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

// ----------------------------------------------------------------------------

/// Metric value.
///
/// Pair of a numeric value and whether it was estimated rather than measured.
/// Aggregation across a sequence preserves the estimate flag: the aggregate
/// `is_estimate` is true iff any input value was an estimate (see
/// `evaluate_criterion` in `pw-generate`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricValue {
    /// Numeric value.
    pub value: f64,
    /// Whether the value is an estimate rather than a measurement.
    pub is_estimate: bool,
}

impl MetricValue {
    /// Creates a metric value.
    #[inline]
    #[must_use]
    pub fn new(value: f64, is_estimate: bool) -> Self {
        Self { value, is_estimate }
    }

    /// Creates a measured (non-estimated) metric value.
    #[inline]
    #[must_use]
    pub fn measured(value: f64) -> Self {
        Self::new(value, false)
    }

    /// Creates an estimated metric value.
    #[inline]
    #[must_use]
    pub fn estimated(value: f64) -> Self {
        Self::new(value, true)
    }
}

// ----------------------------------------------------------------------------

/// Metric estimation method.
///
/// Describes how a metric's value should be aggregated across a set of
/// observations, e.g. when rolling up scenario time-series data to a single
/// value. The sequence evaluator's `evaluate_criterion` always sums, per
/// §4.5 of the specification, regardless of a metric's configured estimate
/// method; this enum is kept for callers that aggregate metric data outside
/// the evaluator (e.g. scenario pre-processing) and need the general rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricEstimate {
    /// Value is provided manually and never derived.
    Manual,
    /// Aggregate by summation.
    Sum,
    /// Aggregate by arithmetic mean.
    Average,
    /// Aggregate by minimum.
    Minimum,
    /// Aggregate by maximum.
    Maximum,
    /// Aggregate by taking the last observation.
    Last,
}

impl MetricEstimate {
    /// Aggregates a non-empty slice of values according to this method.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty, or if `self` is [`MetricEstimate::Manual`]
    /// since a manual value cannot be derived from observations.
    #[must_use]
    pub fn aggregate(self, values: &[f64]) -> f64 {
        assert!(!values.is_empty(), "cannot aggregate an empty series");
        match self {
            MetricEstimate::Manual => {
                panic!("manual metrics cannot be aggregated")
            }
            MetricEstimate::Sum => values.iter().sum(),
            MetricEstimate::Average => {
                values.iter().sum::<f64>() / values.len() as f64
            }
            MetricEstimate::Minimum => {
                values.iter().copied().fold(f64::INFINITY, f64::min)
            }
            MetricEstimate::Maximum => {
                values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
            }
            MetricEstimate::Last => values[values.len() - 1],
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_compare_by_name() {
        assert_eq!(Metric::new("cost"), Metric::new("cost"));
        assert_ne!(Metric::new("cost"), Metric::new("benefit"));
    }

    #[test]
    fn aggregate_sum() {
        assert!((MetricEstimate::Sum.aggregate(&[1.0, 2.0, 3.0]) - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn aggregate_average() {
        assert!((MetricEstimate::Average.aggregate(&[2.0, 4.0]) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn aggregate_minimum_and_maximum() {
        assert!((MetricEstimate::Minimum.aggregate(&[3.0, 1.0, 2.0]) - 1.0).abs() < f64::EPSILON);
        assert!((MetricEstimate::Maximum.aggregate(&[3.0, 1.0, 2.0]) - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn aggregate_last() {
        assert!((MetricEstimate::Last.aggregate(&[3.0, 1.0, 2.0]) - 2.0).abs() < f64::EPSILON);
    }
}
