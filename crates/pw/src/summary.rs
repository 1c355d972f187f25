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

//! Resolved-layout summary.
//!
//! `spec.md` stops at producing node coordinates and delegates drawing to an
//! external renderer (§1); since this port has no renderer, `positions.txt`
//! takes its place as a structured report of what a renderer would have been
//! handed, per `SPEC_FULL.md` §6.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::Path;

use pw_layout::PositionByNode;
use pw_pathway::PathwayMap;
use serde::Serialize;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// One pathway-map node's resolved position, as a renderer would consume it.
#[derive(Serialize)]
struct NodeSummary {
    /// `"begin"` or `"end"`.
    kind: &'static str,
    /// The node's action, in display form (e.g. `f[2]`).
    action: String,
    /// The node's tipping point.
    tipping_point: f64,
    /// Resolved horizontal coordinate.
    x: f64,
    /// Resolved vertical coordinate.
    y: f64,
}

/// The resolved layout of one `plot_pathway_map` invocation.
#[derive(Serialize)]
struct LayoutSummary {
    /// `--title`, if given.
    title: Option<String>,
    /// `--x_label`, if given.
    x_label: Option<String>,
    /// `--show_legend`.
    show_legend: bool,
    /// Renderer format implied by `plot_output`'s extension (defaults `pdf`).
    format: String,
    /// `--spread`'s horizontal component, if any.
    overlap_spread_horizontal: f64,
    /// `--spread`'s vertical component, if any.
    overlap_spread_vertical: f64,
    /// One entry per positioned node, in graph node-index order.
    nodes: Vec<NodeSummary>,
    /// The vertical stack: one y-coordinate per distinct non-root action.
    stack: BTreeMap<String, f64>,
}

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Renders the resolved layout as pretty JSON, matching what a renderer
/// (out of scope here) would be handed to draw the map.
#[must_use]
pub fn render(
    map: &PathwayMap, positions: &PositionByNode, stack: &std::collections::HashMap<String, f64>,
    title: Option<&str>, x_label: Option<&str>, show_legend: bool, overlap_spread: (f64, f64),
    plot_output: &Path,
) -> String {
    let graph = map.graph();
    let mut nodes = Vec::with_capacity(positions.len());
    for node in graph.iter() {
        let Some(position) = positions.get(&node) else { continue };
        let pathway_node = &graph[node];
        nodes.push(NodeSummary {
            kind: if pathway_node.is_begin() { "begin" } else { "end" },
            action: pathway_node.action().display_name(),
            tipping_point: pathway_node.tipping_point(),
            x: position.x,
            y: position.y,
        });
    }

    let summary = LayoutSummary {
        title: title.map(str::to_string),
        x_label: x_label.map(str::to_string),
        show_legend,
        format: output_format(plot_output),
        overlap_spread_horizontal: overlap_spread.0,
        overlap_spread_vertical: overlap_spread.1,
        nodes,
        stack: stack.iter().map(|(name, y)| (name.clone(), *y)).collect(),
    };

    serde_json::to_string_pretty(&summary).expect("layout summary serializes")
}

/// Returns the renderer format implied by `path`'s extension, defaulting to
/// `pdf` per §6's "absent extension defaults to `pdf`" rule.
fn output_format(path: &Path) -> String {
    path.extension().and_then(OsStr::to_str).map_or_else(|| "pdf".to_string(), str::to_ascii_lowercase)
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_defaults_to_pdf() {
        assert_eq!(output_format(Path::new("map")), "pdf");
    }

    #[test]
    fn output_format_reads_extension_case_insensitively() {
        assert_eq!(output_format(Path::new("map.SVG")), "svg");
    }

    #[test]
    fn render_includes_every_positioned_node() {
        use pw_model::Action;
        use pw_pathway::{pathway_graph_to_pathway_map, sequence_graph_to_pathway_graph, SequenceGraph};

        let sg = SequenceGraph::build([(Action::new("current"), Action::new("a"))]).unwrap();
        let pg = sequence_graph_to_pathway_graph(&sg).unwrap();
        let pm = pathway_graph_to_pathway_map(&pg, |_| 0.0).unwrap();
        let (positions, stack) = pw_layout::classic_layout(&pm, None, pw_layout::OverlapSpread::none());

        let text = render(
            &pm,
            &positions,
            &stack,
            Some("Title"),
            None,
            false,
            (0.0, 0.0),
            Path::new("out.pdf"),
        );
        assert!(text.contains("\"format\": \"pdf\""));
        assert!(text.contains("\"action\": \"a\""));
    }
}
