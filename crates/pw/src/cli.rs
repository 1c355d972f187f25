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

//! `plot_pathway_map` argument surface.
//!
//! Mirrors the original docopt usage string:
//!
//! ```text
//! plot_pathway_map [--title=<t>] [--x_label=<l>] [--show_legend]
//!                  [--overshoot] [--spread=<h>[,<v>]]
//!                  <basename> <plot_output>
//! ```
//!
//! re-expressed as a `clap` derive struct. `--end-current-system` has no
//! counterpart in the original usage string; it is this port's CLI-level
//! input for the one scalar `generate_action_instances` needs that the
//! original obtained from its dataset loader (see `DESIGN.md`).

use std::path::PathBuf;

use clap::Parser;
use pw_layout::OverlapSpread;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Renders an adaptation pathway map's text artifacts from a sequence
/// dataset.
#[derive(Parser, Debug)]
#[command(name = "plot_pathway_map")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render sequences.txt/xpositions.txt for a pathway map")]
pub struct Args {
    /// Plot title, recorded in the resolved-layout summary.
    #[arg(long)]
    pub title: Option<String>,

    /// Horizontal axis label, recorded in the resolved-layout summary.
    #[arg(long = "x_label")]
    pub x_label: Option<String>,

    /// Include a legend in the resolved-layout summary.
    #[arg(long)]
    pub show_legend: bool,

    /// Overshoot root segments; a no-op here since this port has no
    /// renderer and `classic_layout` always overshoots root segments.
    #[arg(long)]
    pub overshoot: bool,

    /// Overlap spread: one float for both axes, or `<h>,<v>`.
    #[arg(long)]
    pub spread: Option<String>,

    /// Tipping point of the "current" baseline action.
    #[arg(long = "end-current-system", default_value_t = 0.0)]
    pub end_current_system: f64,

    /// Dataset basename: `<basename>.txt` holds the sequences, with
    /// optional `<basename>_styles.txt`, `<basename>_tipping_points.txt`
    /// and `<basename>_scenario.json` siblings (see `DESIGN.md`).
    pub basename: PathBuf,

    /// Output basename for `sequences.txt`, `xpositions.txt` and
    /// `positions.txt`; written alongside this path. No chart is rendered
    /// (out of scope), so the path's extension is only used to name the
    /// resolved-layout summary.
    pub plot_output: PathBuf,
}

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Parses a `--spread` value into an [`OverlapSpread`].
///
/// One float applies to both axes; two comma-separated floats give
/// horizontal and vertical spread independently, matching the original's
/// `parse_spread` helper.
pub fn parse_spread(spread: Option<&str>) -> Option<OverlapSpread> {
    let spread = spread?;
    let mut parts = spread.split(',').map(str::trim);
    let horizontal: f64 = parts.next()?.parse().ok()?;
    match parts.next() {
        Some(v) => {
            let vertical: f64 = v.parse().ok()?;
            Some(OverlapSpread { horizontal, vertical })
        }
        None => Some(OverlapSpread::from(horizontal)),
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_value_applies_to_both_axes() {
        let spread = parse_spread(Some("2.0")).unwrap();
        assert_eq!(spread.horizontal, 2.0);
        assert_eq!(spread.vertical, 2.0);
    }

    #[test]
    fn two_values_apply_independently() {
        let spread = parse_spread(Some("1.0,3.5")).unwrap();
        assert_eq!(spread.horizontal, 1.0);
        assert_eq!(spread.vertical, 3.5);
    }

    #[test]
    fn absent_spread_is_none() {
        assert!(parse_spread(None).is_none());
    }

    #[test]
    fn malformed_spread_is_none() {
        assert!(parse_spread(Some("not-a-number")).is_none());
    }
}
