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

//! Sequence evaluation: prefix truncation, metric aggregation, dedup.

use pw_model::{Action, Metric, MetricValue, Sequence};

use crate::error::{Error, Result};

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Determines the minimum prefix length `k` such that the cumulative
/// `tipping_point_metric` value over `actions[0..k]` reaches `planning_end`.
///
/// An action missing `tipping_point_metric` is skipped rather than treated
/// as a failure: it contributes nothing to the running sum and the scan
/// continues past it. If no prefix reaches `planning_end` (including the
/// degenerate case where every action is missing the metric), the full
/// sequence length is returned — see `DESIGN.md` for why this skip-don't-fail
/// behavior was kept as-is.
#[must_use]
pub fn determine_number_needed_actions(
    actions: &[Action], tipping_point_metric: &Metric, planning_end: f64,
) -> usize {
    let mut cumulative = 0.0;
    for (i, action) in actions.iter().enumerate() {
        if let Some(value) = action.metrics.get(tipping_point_metric) {
            cumulative += value.value;
            if cumulative >= planning_end {
                return i + 1;
            }
        }
    }
    actions.len()
}

/// Aggregates a non-empty slice of metric values by summation, per §4.5:
/// `value` is the sum, `is_estimate` is true iff any input was an estimate.
///
/// # Errors
///
/// Returns [`Error::EvalTypeMismatch`] if `values` is empty, i.e. none of
/// the actions in the prefix carried the metric being aggregated.
pub fn evaluate_criterion(
    metric: &Metric, values: &[MetricValue],
) -> Result<MetricValue> {
    if values.is_empty() {
        return Err(Error::EvalTypeMismatch(metric.name().to_string()));
    }
    let value = values.iter().map(|v| v.value).sum();
    let is_estimate = values.iter().any(|v| v.is_estimate);
    Ok(MetricValue::new(value, is_estimate))
}

/// Evaluates every sequence in place: truncates `actions` to the shortest
/// prefix reaching `planning_end` under `tipping_point_metric`, aggregates
/// every metric present on the prefix's first action into `performance`, and
/// marks sequences that duplicate an earlier (still-valid) sequence invalid.
///
/// # Errors
///
/// Propagates [`Error::EvalTypeMismatch`] from [`evaluate_criterion`] should
/// a metric named by the first action be absent from every action in a
/// truncated prefix.
pub fn evaluate_sequences(
    sequences: &mut [Sequence], tipping_point_metric: &Metric, planning_end: f64,
) -> Result<()> {
    for sequence in sequences.iter_mut() {
        if sequence.is_empty() {
            continue;
        }
        let k = determine_number_needed_actions(
            &sequence.actions,
            tipping_point_metric,
            planning_end,
        );
        sequence.actions.truncate(k);

        let metrics: Vec<Metric> =
            sequence.actions[0].metrics.keys().cloned().collect();
        for metric in metrics {
            let values: Vec<MetricValue> = sequence
                .actions
                .iter()
                .filter_map(|a| a.metrics.get(&metric).copied())
                .collect();
            let aggregate = evaluate_criterion(&metric, &values)?;
            sequence.performance.insert(metric, aggregate);
        }
    }

    for i in 0..sequences.len() {
        if !sequences[i].filter.is_valid {
            continue;
        }
        let duplicate = (0..i)
            .any(|j| sequences[j].filter.is_valid && sequences[i].matches(&sequences[j]));
        if duplicate {
            sequences[i].filter = sequences[i].filter.clone().invalidate(
                "Part of Sequence used. Identical to other Sequence.",
            );
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

    fn action_with_metric(name: &str, metric: &Metric, value: f64) -> Action {
        let mut a = Action::new(name);
        a.metrics.insert(metric.clone(), MetricValue::measured(value));
        a
    }

    #[test]
    fn truncates_at_first_prefix_reaching_planning_end() {
        let years = Metric::new("years");
        let actions = vec![
            action_with_metric("a", &years, 5.0),
            action_with_metric("b", &years, 5.0),
            action_with_metric("c", &years, 5.0),
        ];
        assert_eq!(determine_number_needed_actions(&actions, &years, 8.0), 2);
        assert_eq!(determine_number_needed_actions(&actions, &years, 15.0), 3);
    }

    #[test]
    fn missing_metric_is_skipped_not_failed() {
        let years = Metric::new("years");
        let actions = vec![Action::new("a"), Action::new("b")];
        assert_eq!(determine_number_needed_actions(&actions, &years, 1.0), 2);
    }

    #[test]
    fn aggregate_sums_and_propagates_estimate_flag() {
        let cost = Metric::new("cost");
        let values = vec![MetricValue::measured(1.0), MetricValue::estimated(2.0)];
        let result = evaluate_criterion(&cost, &values).unwrap();
        assert!((result.value - 3.0).abs() < f64::EPSILON);
        assert!(result.is_estimate);
    }

    #[test]
    fn aggregate_over_empty_values_is_a_type_mismatch() {
        let cost = Metric::new("cost");
        assert_eq!(
            evaluate_criterion(&cost, &[]),
            Err(Error::EvalTypeMismatch("cost".to_string()))
        );
    }

    #[test]
    fn identical_sequences_are_marked_invalid_after_the_first() {
        let mut sequences = vec![
            Sequence::new(vec![Action::new("a")]),
            Sequence::new(vec![Action::new("a")]),
        ];
        let years = Metric::new("years");
        evaluate_sequences(&mut sequences, &years, 0.0).unwrap();
        assert!(sequences[0].filter.is_valid);
        assert!(!sequences[1].filter.is_valid);
    }
}
