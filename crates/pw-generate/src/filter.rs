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

//! Sequence filtering: threshold filters and shortlist sampling.

use pw_model::{Metric, Sequence};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::error::{Error, Result};

// ----------------------------------------------------------------------------
// Enums
// ----------------------------------------------------------------------------

/// The six standard arithmetic comparisons a [`MetricFilter`] may apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumberComparison {
    /// `>`
    GreaterThan,
    /// `<`
    LessThan,
    /// `>=`
    GreaterOrEqual,
    /// `<=`
    LessOrEqual,
    /// `==`
    Equal,
    /// `!=`
    NotEqual,
}

impl NumberComparison {
    /// Evaluates `value relation threshold`.
    #[must_use]
    pub fn compare(self, value: f64, threshold: f64) -> bool {
        match self {
            NumberComparison::GreaterThan => value > threshold,
            NumberComparison::LessThan => value < threshold,
            NumberComparison::GreaterOrEqual => value >= threshold,
            NumberComparison::LessOrEqual => value <= threshold,
            NumberComparison::Equal => nearly_equal(value, threshold),
            NumberComparison::NotEqual => !nearly_equal(value, threshold),
        }
    }
}

/// Scale-relative float equality: a fixed absolute epsilon (the source
/// compares with a literal `==`) fails for the magnitudes
/// `evaluate_criterion`'s summation produces, so the tolerance is scaled by
/// the larger operand's magnitude instead.
fn nearly_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= a.abs().max(b.abs()) * f64::EPSILON * 8.0
}

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// A single metric threshold a sequence must satisfy to survive filtering.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricFilter {
    /// The metric read from a sequence's performance.
    pub metric: Metric,
    /// The comparison applied.
    pub relation: NumberComparison,
    /// The threshold compared against.
    pub threshold: f64,
}

impl MetricFilter {
    /// Creates a metric filter.
    #[must_use]
    pub fn new(metric: Metric, relation: NumberComparison, threshold: f64) -> Self {
        Self { metric, relation, threshold }
    }
}

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Creates a seeded, reproducible PRNG for [`filter_sequences`]'s sampling
/// step. Exposed as a named constructor rather than requiring callers to
/// depend on `rand_pcg` directly, per the spec's requirement that the
/// shortlist sampler be deterministic and testable.
#[must_use]
pub fn seeded_rng(seed: u64) -> Pcg64 {
    Pcg64::seed_from_u64(seed)
}

/// Filters `sequences` against `filters`, then caps the number of surviving
/// sequences to `cap` via uniform sampling without replacement.
///
/// Sequences that are already invalid (from the evaluator) are left alone;
/// only sequences still carrying `is_valid = true` are considered. Survivors
/// beyond `cap` are chosen by a Fisher-Yates shuffle of the surviving
/// indices seeded by `rng`, so swapping in a seeded PRNG (via [`seeded_rng`])
/// makes the selection reproducible across runs.
///
/// # Errors
///
/// Returns [`Error::FilterTypeMismatch`] naming the first filter's metric
/// that is missing from a valid sequence's performance.
pub fn filter_sequences<R: Rng>(
    sequences: &mut [Sequence], filters: &[MetricFilter], cap: usize, rng: &mut R,
) -> Result<()> {
    for sequence in sequences.iter_mut() {
        if !sequence.filter.is_valid {
            continue;
        }
        for filter in filters {
            let Some(value) = sequence.performance.get(&filter.metric) else {
                return Err(Error::FilterTypeMismatch(
                    filter.metric.name().to_string(),
                ));
            };
            if !filter.relation.compare(value.value, filter.threshold) {
                sequence.filter =
                    sequence.filter.clone().exclude("Does not meet conditions");
                break;
            }
        }
    }

    let mut survivors: Vec<usize> = sequences
        .iter()
        .enumerate()
        .filter(|(_, s)| s.filter.is_kept())
        .map(|(i, _)| i)
        .collect();

    if survivors.len() > cap {
        survivors.shuffle(rng);
        for &i in &survivors[cap..] {
            sequences[i].filter =
                sequences[i].filter.clone().exclude("Exceeded shortlist limit");
        }
    }

    Ok(())
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pw_model::MetricValue;

    use super::*;

    fn sequence_with(metric: &Metric, value: f64) -> Sequence {
        let mut s = Sequence::new(vec![]);
        s.performance.insert(metric.clone(), MetricValue::measured(value));
        s
    }

    #[test]
    fn filter_excludes_below_threshold() {
        let cost = Metric::new("cost");
        let mut sequences =
            vec![sequence_with(&cost, 10.0), sequence_with(&cost, 1.0)];
        let filters =
            vec![MetricFilter::new(cost, NumberComparison::GreaterThan, 5.0)];
        let mut rng = seeded_rng(42);
        filter_sequences(&mut sequences, &filters, 10, &mut rng).unwrap();
        assert!(sequences[0].filter.is_kept());
        assert!(!sequences[1].filter.is_kept());
    }

    #[test]
    fn cap_keeps_at_most_n_survivors() {
        let cost = Metric::new("cost");
        let mut sequences: Vec<Sequence> =
            (0..10).map(|i| sequence_with(&cost, f64::from(i))).collect();
        let mut rng = seeded_rng(7);
        filter_sequences(&mut sequences, &[], 3, &mut rng).unwrap();
        assert_eq!(sequences.iter().filter(|s| s.filter.is_kept()).count(), 3);
    }

    #[test]
    fn missing_metric_is_a_type_mismatch() {
        let cost = Metric::new("cost");
        let mut sequences = vec![Sequence::new(vec![])];
        let filters =
            vec![MetricFilter::new(cost.clone(), NumberComparison::GreaterThan, 5.0)];
        let mut rng = seeded_rng(1);
        assert_eq!(
            filter_sequences(&mut sequences, &filters, 10, &mut rng),
            Err(Error::FilterTypeMismatch("cost".to_string()))
        );
    }

    #[test]
    fn equal_tolerates_rounding_at_large_magnitude() {
        // A fixed f64::EPSILON absolute tolerance is far tighter than the
        // rounding a sum of this magnitude naturally carries; the tolerance
        // needs to scale with the operands.
        assert!(NumberComparison::Equal.compare(1_000_000.0, 1_000_000.0 + 1e-10));
        assert!(!NumberComparison::NotEqual.compare(1_000_000.0, 1_000_000.0 + 1e-10));
    }

    #[test]
    fn equal_still_rejects_a_real_difference() {
        assert!(!NumberComparison::Equal.compare(10.0, 10.5));
        assert!(NumberComparison::NotEqual.compare(10.0, 10.5));
    }
}
