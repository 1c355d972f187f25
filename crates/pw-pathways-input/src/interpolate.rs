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

//! Scenario time-value interpolation.

use pw_model::TimeSeries;

use crate::error::{Error, Result};

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Finds the time at which a scenario's metric series reaches `target_value`.
///
/// `series` is assumed to hold `(time, value)` points sorted by time with
/// monotonically non-decreasing values, as produced by a cumulative
/// tipping-point metric. Three cases apply, matching the reference
/// implementation's rounding behavior bit-for-bit (see `§4.8`'s description
/// of `interpolate_time`, kept intentionally rather than switched to a
/// non-truncating scheme):
///
/// 1. `target_value` exactly equals some point's value — the point's own
///    time is returned, truncated to an integer.
/// 2. `target_value` falls strictly between two points — the bracketing
///    points are linearly interpolated, and the result truncated to an
///    integer.
/// 3. `target_value` falls outside the series' covered range (or the series
///    is empty) — [`Error::OutOfRange`].
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if `target_value` lies outside the range
/// covered by `series`.
pub fn interpolate_time(series: &TimeSeries, target_value: f64) -> Result<f64> {
    let points = series.points();
    if points.is_empty() {
        return Err(Error::OutOfRange {
            value: target_value,
            series_low: f64::NAN,
            series_high: f64::NAN,
        });
    }

    if let Some((time, _)) =
        points.iter().find(|(_, v)| (v.value - target_value).abs() < f64::EPSILON)
    {
        return Ok(truncate(*time));
    }

    let values: Vec<f64> = points.iter().map(|(_, v)| v.value).collect();
    let index = values.partition_point(|&v| v < target_value);
    if index == 0 || index == points.len() {
        return Err(Error::OutOfRange {
            value: target_value,
            series_low: values[0],
            series_high: values[values.len() - 1],
        });
    }

    let (time_before, value_before) = points[index - 1];
    let (time_after, value_after) = points[index];
    let fraction =
        (target_value - value_before.value) / (value_after.value - value_before.value);
    Ok(truncate(time_before + fraction * (time_after - time_before)))
}

/// Truncates a time value towards zero, mirroring `float(int(x))`.
#[inline]
fn truncate(time: f64) -> f64 {
    time.trunc()
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pw_model::MetricValue;

    use super::*;

    fn series() -> TimeSeries {
        TimeSeries::from_iter([
            (2020.0, MetricValue::measured(0.0)),
            (2030.0, MetricValue::measured(10.0)),
            (2040.0, MetricValue::measured(10.0)),
            (2050.0, MetricValue::measured(30.0)),
        ])
    }

    #[test]
    fn exact_match_returns_truncated_time() {
        assert_eq!(interpolate_time(&series(), 10.0).unwrap(), 2030.0);
    }

    #[test]
    fn interpolates_between_bracketing_points() {
        let value = interpolate_time(&series(), 20.0).unwrap();
        assert_eq!(value, 2045.0);
    }

    #[test]
    fn errors_below_range() {
        assert!(matches!(
            interpolate_time(&series(), -5.0),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn errors_above_range() {
        assert!(matches!(
            interpolate_time(&series(), 100.0),
            Err(Error::OutOfRange { .. })
        ));
    }

    #[test]
    fn errors_on_empty_series() {
        assert!(matches!(
            interpolate_time(&TimeSeries::new(), 1.0),
            Err(Error::OutOfRange { .. })
        ));
    }
}
