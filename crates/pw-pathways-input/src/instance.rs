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

//! Instance numbering and tipping-point materialization.

use std::collections::HashMap;

use pw_model::{Action, Edition, Metric, Scenario, Sequence, TimeSeries};

use crate::error::{Error, Result};
use crate::interpolate::interpolate_time;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// A single materialized occurrence of an action within one sequence.
#[derive(Clone, Debug)]
pub struct Instantiated {
    /// The occurring action.
    pub action: Action,
    /// Instance index, disambiguating occurrences of the same action reached
    /// via different preconditions.
    pub instance: u32,
    /// Cumulative tipping-point metric value at this occurrence.
    pub tipping_point_value: f64,
    /// Horizontal position derived from `tipping_point_value`, either the
    /// value itself (plus `end_current_system`) or its scenario-interpolated
    /// time.
    pub tipping_point_xposition: f64,
}

/// Materialized action instances for a set of filtered sequences.
#[derive(Clone, Debug)]
pub struct MaterializedInstances {
    /// The x-position of the `current` root.
    pub root_xposition: f64,
    /// One list of materialized instances per input sequence, in order.
    pub instances: Vec<Vec<Instantiated>>,
}

/// Action identity, used as the key of the instance-counting map.
type ActionKey = (String, Edition);

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Materializes filtered sequences into [`ActionInstance`][]-shaped records,
/// numbering repeated occurrences of the same action and positioning every
/// occurrence along the tipping-point axis.
///
/// **Instance numbering.** For action `aᵢ` in a sequence, its precondition is
/// the ordered list of preceding action identities `a₀..aᵢ₋₁`. Two
/// occurrences of the same action collapse to the same instance index iff
/// their preconditions match exactly; a new precondition gets the next
/// index. Counting is shared across all sequences passed in one call, so
/// that the same branch point reached from two different generated
/// sequences is recognized as one instance.
///
/// **Positioning.** `tipping_point_value` is the running sum of
/// `tipping_point_metric` over the prefix ending at `aᵢ` (missing metric data
/// contributes zero). The x-position is `tipping_point_value +
/// end_current_system`, or, when `scenario` carries a time series for
/// `tipping_point_metric`, that value run through [`interpolate_time`]
/// instead — a scenario turns a flat offset into a calendar position.
///
/// This function never fails on a missing scenario or time series: those are
/// silent fallbacks to the plain numeric offset per the literal rule. A
/// caller that wants a missing scenario to be a hard error (e.g. the `pw`
/// binary's `--scenario` flag, where the user explicitly asked for
/// scenario-based positioning) should check with [`require_time_series`]
/// before calling this function.
///
/// [`ActionInstance`]: pw_model::ActionInstance
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if a scenario time series is present but
/// doesn't cover the computed tipping-point value.
pub fn generate_action_instances(
    sequences: &[Sequence], tipping_point_metric: &Metric, end_current_system: f64,
    scenario: Option<&Scenario>,
) -> Result<MaterializedInstances> {
    let series = scenario.and_then(|s| s.series_for(tipping_point_metric));

    let root_xposition = xposition(series, end_current_system)?;

    let mut instance_count: HashMap<ActionKey, Vec<Vec<ActionKey>>> = HashMap::new();
    let mut instances = Vec::with_capacity(sequences.len());

    for sequence in sequences {
        let mut materialized = Vec::with_capacity(sequence.actions.len());
        let mut cumulative = 0.0_f64;
        let mut precondition: Vec<ActionKey> = Vec::new();

        for action in &sequence.actions {
            let key = (action.name.clone(), action.edition);
            let occurrences = instance_count.entry(key.clone()).or_default();
            let instance = match occurrences.iter().position(|p| *p == precondition) {
                Some(index) => index,
                None => {
                    occurrences.push(precondition.clone());
                    occurrences.len() - 1
                }
            };

            cumulative += action
                .metrics
                .get(tipping_point_metric)
                .map_or(0.0, |value| value.value);
            let tipping_point_value = cumulative;
            let tipping_point_xposition =
                xposition(series, tipping_point_value + end_current_system)?;

            materialized.push(Instantiated {
                action: action.clone(),
                instance: u32::try_from(instance).unwrap_or(u32::MAX),
                tipping_point_value,
                tipping_point_xposition,
            });

            precondition.push(key);
        }

        instances.push(materialized);
    }

    Ok(MaterializedInstances { root_xposition, instances })
}

/// Resolves a scenario's time series for `metric`, erroring if either the
/// scenario or the series is missing.
///
/// Unlike [`generate_action_instances`], which treats a missing scenario as
/// "use the plain numeric offset", this helper is for callers that make
/// scenario-based positioning an explicit request rather than a best-effort
/// enhancement.
///
/// # Errors
///
/// Returns [`Error::NoScenario`] if `scenario` is `None`, or
/// [`Error::NoTimeSeries`] if the scenario carries no series for `metric`.
pub fn require_time_series<'a>(
    scenario: Option<&'a Scenario>, metric: &Metric,
) -> Result<&'a TimeSeries> {
    let scenario = scenario.ok_or(Error::NoScenario)?;
    scenario
        .series_for(metric)
        .ok_or_else(|| Error::NoTimeSeries(metric.name().to_string()))
}

/// Computes an x-position, interpolating through `series` when present and
/// falling back to the raw value otherwise.
fn xposition(series: Option<&TimeSeries>, value: f64) -> Result<f64> {
    match series {
        Some(series) => interpolate_time(series, value),
        None => Ok(value),
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pw_model::MetricValue;

    use super::*;

    fn action_with_metric(name: &str, metric: &Metric, value: f64) -> Action {
        let mut action = Action::new(name);
        action.metrics.insert(metric.clone(), MetricValue::measured(value));
        action
    }

    #[test]
    fn instances_collapse_on_identical_precondition() {
        let metric = Metric::new("cost");
        let a = action_with_metric("a", &metric, 1.0);
        let b = action_with_metric("b", &metric, 1.0);
        let sequences = vec![
            Sequence::new(vec![a.clone(), b.clone()]),
            Sequence::new(vec![a.clone(), b.clone()]),
        ];

        let materialized =
            generate_action_instances(&sequences, &metric, 0.0, None).unwrap();
        assert_eq!(materialized.instances[0][1].instance, 0);
        assert_eq!(materialized.instances[1][1].instance, 0);
    }

    #[test]
    fn instances_differ_on_different_precondition() {
        let metric = Metric::new("cost");
        let a = action_with_metric("a", &metric, 1.0);
        let b = action_with_metric("b", &metric, 1.0);
        let c = action_with_metric("c", &metric, 1.0);
        let sequences = vec![
            Sequence::new(vec![a.clone(), c.clone()]),
            Sequence::new(vec![b.clone(), c.clone()]),
        ];

        let materialized =
            generate_action_instances(&sequences, &metric, 0.0, None).unwrap();
        assert_eq!(materialized.instances[0][1].instance, 0);
        assert_eq!(materialized.instances[1][1].instance, 1);
    }

    #[test]
    fn tipping_point_value_is_cumulative_sum() {
        let metric = Metric::new("cost");
        let a = action_with_metric("a", &metric, 2.0);
        let b = action_with_metric("b", &metric, 3.0);
        let sequences = vec![Sequence::new(vec![a, b])];

        let materialized =
            generate_action_instances(&sequences, &metric, 10.0, None).unwrap();
        assert!(
            (materialized.instances[0][0].tipping_point_value - 2.0).abs() < f64::EPSILON
        );
        assert!(
            (materialized.instances[0][1].tipping_point_value - 5.0).abs() < f64::EPSILON
        );
        assert!(
            (materialized.instances[0][1].tipping_point_xposition - 15.0).abs()
                < f64::EPSILON
        );
    }

    #[test]
    fn root_xposition_falls_back_without_scenario() {
        let metric = Metric::new("cost");
        let materialized = generate_action_instances(&[], &metric, 42.0, None).unwrap();
        assert!((materialized.root_xposition - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn root_xposition_interpolates_through_scenario() {
        let metric = Metric::new("cost");
        let mut scenario = Scenario::new("rcp45", "RCP 4.5");
        scenario.set_series(
            metric.clone(),
            TimeSeries::from_iter([
                (2020.0, MetricValue::measured(0.0)),
                (2030.0, MetricValue::measured(10.0)),
            ]),
        );

        let materialized =
            generate_action_instances(&[], &metric, 10.0, Some(&scenario)).unwrap();
        assert_eq!(materialized.root_xposition, 2030.0);
    }

    #[test]
    fn require_time_series_errors_on_missing_scenario() {
        let metric = Metric::new("cost");
        assert!(matches!(
            require_time_series(None, &metric),
            Err(Error::NoScenario)
        ));
    }

    #[test]
    fn require_time_series_errors_on_missing_series() {
        let metric = Metric::new("cost");
        let scenario = Scenario::new("rcp45", "RCP 4.5");
        assert!(matches!(
            require_time_series(Some(&scenario), &metric),
            Err(Error::NoTimeSeries(_))
        ));
    }
}
