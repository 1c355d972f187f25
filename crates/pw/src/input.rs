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

//! Dataset loading: the sibling files resolved from a `<basename>`.
//!
//! The original `read_dataset(basename_pathname)` bundles sequences,
//! tipping points and colors behind one call; its on-disk layout wasn't
//! part of the retrieved source, so this module resolves the same bundle as
//! a set of sibling files next to `<basename>.txt`, reusing the sequence and
//! style formats `pw-ingest` already parses and adding two formats of its
//! own (see `DESIGN.md`):
//!
//! - `<basename>.txt` — sequences (required).
//! - `<basename>_styles.txt` — action colors (optional).
//! - `<basename>_tipping_points.txt` — `NAME VALUE` lines assigning each
//!   action's tipping-point metric (optional; actions not listed default to
//!   zero, same fallback `pw-pathways-input::generate_action_instances`
//!   already applies to missing metric data).
//! - `<basename>_scenario.json` — an optional scenario allowing x-positions
//!   to be reported as calendar time rather than raw metric offsets.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use pw_model::{Action, Edition, Metric, MetricValue, Scenario, TimeSeries};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Metric name this port uses for the tipping-point axis.
///
/// The original script obtains tipping points and the axis metric together
/// from its dataset loader without naming the metric; a fixed name is this
/// port's resolution of that open question (see `DESIGN.md`).
pub const TIPPING_POINT_METRIC: &str = "tipping_point";

/// A loaded dataset: parsed sequence edges, per-action tipping points, and
/// an optional scenario for calendar-time x-positions.
pub struct Dataset {
    pub edges: Vec<(Action, Action)>,
    pub actions: BTreeMap<(String, Edition), Action>,
    pub scenario: Option<Scenario>,
}

/// Loads the dataset rooted at `basename`.
///
/// # Errors
///
/// Returns [`Error::ReadFailure`] if `<basename>.txt` can't be read,
/// [`Error::Ingest`] if sequence or style parsing fails,
/// [`Error::MalformedTippingPoint`] / [`Error::BadTippingPointValue`] if a
/// tipping-points sibling is malformed, and [`Error::BadScenario`] if a
/// scenario sibling fails to parse as JSON.
pub fn load_dataset(basename: &Path) -> Result<Dataset> {
    let sequences_path = with_suffix(basename, ".txt");
    let text = read_to_string(&sequences_path)?;
    let mut parsed = pw_ingest::parse_sequences(&text)?;

    let styles_path = sibling(basename, "_styles.txt");
    if styles_path.is_file() {
        let styles_text = read_to_string(&styles_path)?;
        pw_ingest::apply_styles(&mut parsed.actions, &styles_text)?;
    }

    let tipping_points_path = sibling(basename, "_tipping_points.txt");
    if tipping_points_path.is_file() {
        let text = read_to_string(&tipping_points_path)?;
        apply_tipping_points(&mut parsed.actions, &text, &tipping_points_path)?;
    }

    let scenario_path = sibling(basename, "_scenario.json");
    let scenario = if scenario_path.is_file() {
        let text = read_to_string(&scenario_path)?;
        Some(parse_scenario(&text, &scenario_path)?)
    } else {
        None
    };

    Ok(Dataset { edges: parsed.edges, actions: parsed.actions, scenario })
}

/// Appends `.txt` to `basename` (which the CLI treats as extensionless).
fn with_suffix(basename: &Path, suffix: &str) -> PathBuf {
    let mut name = basename.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}

/// Returns the path of a `<basename><suffix>` sibling file.
fn sibling(basename: &Path, suffix: &str) -> PathBuf {
    with_suffix(basename, suffix)
}

fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::ReadFailure { path: path.to_path_buf(), source })
}

/// Applies a `NAME VALUE` tipping-points file onto an already-parsed action
/// set, setting each mentioned action's tipping-point metric.
fn apply_tipping_points(
    actions: &mut BTreeMap<(String, Edition), Action>, text: &str, path: &Path,
) -> Result<()> {
    let metric = Metric::new(TIPPING_POINT_METRIC);
    for (line_no, raw_line) in text.lines().enumerate() {
        let line = line_no + 1;
        let stripped = match raw_line.find('#') {
            Some(i) => &raw_line[..i],
            None => raw_line,
        }
        .trim();
        if stripped.is_empty() {
            continue;
        }

        let mut tokens = stripped.split_whitespace();
        let name_tok = tokens.next().ok_or(Error::MalformedTippingPoint {
            path: path.to_path_buf(),
            line,
        })?;
        let value_tok = tokens.next().ok_or(Error::MalformedTippingPoint {
            path: path.to_path_buf(),
            line,
        })?;
        if tokens.next().is_some() {
            return Err(Error::MalformedTippingPoint { path: path.to_path_buf(), line });
        }

        let (name, edition) = split_name_edition(name_tok);
        let value: f64 = value_tok.parse().map_err(|_| Error::BadTippingPointValue {
            path: path.to_path_buf(),
            line,
            token: value_tok.to_string(),
        })?;

        if let Some(action) = actions.get_mut(&(name, edition)) {
            action.metrics.insert(metric.clone(), MetricValue::measured(value));
        }
    }
    Ok(())
}

/// Splits a bare `name` or `name[k]` token, defaulting edition to `0`.
///
/// Unknown-action and malformed-bracket tokens are left to resolve to a
/// `(name, 0)` key that simply won't be found in the action map, which the
/// caller silently ignores — the tipping-points file is a best-effort
/// overlay, not a source of new actions.
fn split_name_edition(token: &str) -> (String, Edition) {
    match token.find('[') {
        Some(open) if token.ends_with(']') && open > 0 => {
            let digits = &token[open + 1..token.len() - 1];
            match digits.parse::<Edition>() {
                Ok(edition) => (token[..open].to_string(), edition),
                Err(_) => (token.to_string(), 0),
            }
        }
        _ => (token.to_string(), 0),
    }
}

/// On-disk scenario shape: a named scenario with, per metric, a list of
/// `(time, value, is_estimate)` points.
#[derive(Deserialize)]
struct ScenarioDto {
    id: String,
    name: String,
    series: BTreeMap<String, Vec<(f64, f64, bool)>>,
}

fn parse_scenario(text: &str, path: &Path) -> Result<Scenario> {
    let dto: ScenarioDto = serde_json::from_str(text)
        .map_err(|source| Error::BadScenario { path: path.to_path_buf(), source })?;

    let mut scenario = Scenario::new(dto.id, dto.name);
    for (metric_name, points) in dto.series {
        let series = TimeSeries::from_iter(points.into_iter().map(|(time, value, is_estimate)| {
            let value =
                if is_estimate { MetricValue::estimated(value) } else { MetricValue::measured(value) };
            (time, value)
        }));
        scenario.set_series(Metric::new(metric_name), series);
    }
    Ok(scenario)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_name_edition_defaults_to_zero() {
        assert_eq!(split_name_edition("a"), ("a".to_string(), 0));
    }

    #[test]
    fn split_name_edition_reads_bracket() {
        assert_eq!(split_name_edition("a[2]"), ("a".to_string(), 2));
    }

    #[test]
    fn apply_tipping_points_sets_metric_on_known_action() {
        let mut actions = BTreeMap::new();
        actions.insert(("a".to_string(), 0), Action::new("a"));

        apply_tipping_points(&mut actions, "a 4.5\n", Path::new("tp.txt")).unwrap();

        let metric = Metric::new(TIPPING_POINT_METRIC);
        let value = actions[&("a".to_string(), 0)].metrics.get(&metric).unwrap();
        assert!((value.value - 4.5).abs() < f64::EPSILON);
    }

    #[test]
    fn apply_tipping_points_ignores_unknown_action() {
        let mut actions = BTreeMap::new();
        apply_tipping_points(&mut actions, "unknown 1.0\n", Path::new("tp.txt")).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn apply_tipping_points_rejects_malformed_line() {
        let mut actions = BTreeMap::new();
        let result = apply_tipping_points(&mut actions, "only-one-token\n", Path::new("tp.txt"));
        assert!(matches!(result, Err(Error::MalformedTippingPoint { .. })));
    }

    #[test]
    fn parse_scenario_builds_series() {
        let json = r#"{
            "id": "rcp45",
            "name": "RCP 4.5",
            "series": {
                "tipping_point": [[2020.0, 0.0, false], [2030.0, 10.0, false]]
            }
        }"#;
        let scenario = parse_scenario(json, Path::new("s.json")).unwrap();
        let metric = Metric::new(TIPPING_POINT_METRIC);
        let series = scenario.series_for(&metric).unwrap();
        assert_eq!(series.points().len(), 2);
    }
}
