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

//! Scenario.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::metric::{Metric, MetricValue};

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Time series.
///
/// Ordered, monotonically increasing sequence of `(time, value)` points for
/// one metric under one scenario. Points are kept sorted by time so that
/// [`interpolate_time`][] in `pw-pathways-input` can binary search them.
///
/// [`interpolate_time`]: https://docs.rs/pw-pathways-input
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    points: Vec<(f64, MetricValue)>,
}

impl TimeSeries {
    /// Creates an empty time series.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a point, keeping the series sorted by time.
    pub fn insert(&mut self, time: f64, value: MetricValue) {
        match self
            .points
            .binary_search_by(|(t, _)| t.partial_cmp(&time).unwrap())
        {
            Ok(i) => self.points[i] = (time, value),
            Err(i) => self.points.insert(i, (time, value)),
        }
    }

    /// Returns the points of this series in time order.
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[(f64, MetricValue)] {
        &self.points
    }

    /// Returns whether the series carries no points.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl FromIterator<(f64, MetricValue)> for TimeSeries {
    fn from_iter<I: IntoIterator<Item = (f64, MetricValue)>>(iter: I) -> Self {
        let mut series = Self::new();
        for (t, v) in iter {
            series.insert(t, v);
        }
        series
    }
}

// ----------------------------------------------------------------------------

/// Scenario.
///
/// Named collection of per-metric time series, e.g. a climate or socio-
/// economic projection that actions are evaluated against. A scenario
/// carries an `id` distinct from its display `name` since scenario sets are
/// frequently keyed by a short identifier in textual input.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario identifier.
    pub id: String,
    /// Scenario display name.
    pub name: String,
    /// Per-metric time series.
    series: BTreeMap<Metric, TimeSeries>,
}

impl Scenario {
    /// Creates an empty scenario with the given id and display name.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), series: BTreeMap::new() }
    }

    /// Returns the time series for a metric, if present.
    #[inline]
    #[must_use]
    pub fn series_for(&self, metric: &Metric) -> Option<&TimeSeries> {
        self.series.get(metric)
    }

    /// Sets the time series for a metric, replacing any prior series.
    pub fn set_series(&mut self, metric: Metric, series: TimeSeries) {
        self.series.insert(metric, series);
    }

    /// Returns an iterator over all metrics carried by this scenario.
    #[inline]
    pub fn metrics(&self) -> impl Iterator<Item = &Metric> {
        self.series.keys()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_series_stays_sorted_on_insert() {
        let mut series = TimeSeries::new();
        series.insert(2020.0, MetricValue::measured(1.0));
        series.insert(2000.0, MetricValue::measured(0.5));
        series.insert(2010.0, MetricValue::measured(0.75));
        let times: Vec<f64> = series.points().iter().map(|(t, _)| *t).collect();
        assert_eq!(times, vec![2000.0, 2010.0, 2020.0]);
    }

    #[test]
    fn scenario_tracks_series_by_metric() {
        let mut scenario = Scenario::new("rcp45", "RCP 4.5");
        let cost = Metric::new("cost");
        scenario.set_series(
            cost.clone(),
            TimeSeries::from_iter([(2020.0, MetricValue::measured(1.0))]),
        );
        assert!(scenario.series_for(&cost).is_some());
        assert!(scenario.series_for(&Metric::new("benefit")).is_none());
    }
}
