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

//! `plot_pathway_map`: wires the pipeline end to end.
//!
//! Loads a sequence dataset, builds the sequence graph, pathway graph and
//! pathway map (§4.1–4.3), lays the map out with the classic (metro-style)
//! layout (§4.7), materializes every root-to-leaf pathway into the
//! `sequences.txt` / `xpositions.txt` artifacts (§4.8), and reports the
//! resolved layout as `positions.txt`. Chart rendering itself is out of
//! scope (`spec.md` §1); see `DESIGN.md`.

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use pw_diagnostic::IntoDiagnostic;
use pw_layout::{classic_layout, OverlapSpread};
use pw_model::{Action, Metric, Sequence};
use pw_pathway::{pathway_graph_to_pathway_map, sequence_graph_to_pathway_graph, SequenceGraph};
use pw_pathways_input::{generate_action_instances, sequences_text, write_pathway_input_files, xpositions_text};
use tracing::info;

mod cli;
mod error;
mod input;
mod summary;

use cli::Args;
use error::Result;
use input::TIPPING_POINT_METRIC;

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let diagnostic = err.into_diagnostic();
            let location = diagnostic
                .location
                .map(|location| format!(" ({location})"))
                .unwrap_or_default();
            eprintln!("{}: {}{location}", diagnostic.severity, diagnostic.message);
            ExitCode::FAILURE
        }
    }
}

/// Runs the pipeline described in the module documentation.
///
/// # Errors
///
/// Propagates any failure from dataset loading, graph construction,
/// transformation, layout or artifact writing. The pipeline aborts at the
/// first error (§7); no partial output is left behind since text artifacts
/// are only written once every upstream stage has succeeded.
fn run(args: &Args) -> Result<()> {
    let dataset = input::load_dataset(&args.basename)?;

    // `dataset.edges` holds parse-time action clones; `dataset.actions` is
    // the canonical map that later absorbed style and tipping-point
    // overlays, so edges are re-resolved through it before the graph is
    // built (see `input::load_dataset`'s module documentation).
    let resolve = |action: &Action| -> Action {
        dataset
            .actions
            .get(&(action.name.clone(), action.edition))
            .cloned()
            .unwrap_or_else(|| action.clone())
    };
    let edges: Vec<(Action, Action)> =
        dataset.edges.iter().map(|(from, to)| (resolve(from), resolve(to))).collect();

    let sequence_graph = SequenceGraph::build(edges)?;
    info!(
        actions = sequence_graph.nr_actions(),
        transitions = sequence_graph.nr_sequences(),
        "built sequence graph"
    );

    let pathway_graph = sequence_graph_to_pathway_graph(&sequence_graph)?;

    let tipping_point_metric = Metric::new(TIPPING_POINT_METRIC);
    let tipping_point = |action: &Action| -> f64 {
        action.metrics.get(&tipping_point_metric).map_or(0.0, |value| value.value)
    };
    let pathway_map = pathway_graph_to_pathway_map(&pathway_graph, tipping_point)?;
    pathway_map.verify_tipping_points()?;

    let overlap_spread = cli::parse_spread(args.spread.as_deref()).unwrap_or_else(OverlapSpread::none);
    let (positions, stack) = classic_layout(&pathway_map, None, overlap_spread);

    let sequences = root_to_leaf_sequences(&sequence_graph)?;
    let materialized = generate_action_instances(
        &sequences,
        &tipping_point_metric,
        args.end_current_system,
        dataset.scenario.as_ref(),
    )?;

    let out_dir = args.plot_output.parent().unwrap_or_else(|| Path::new("."));
    write_pathway_input_files(out_dir, &sequences_text(&materialized), &xpositions_text(&materialized))?;

    let positions_summary = summary::render(
        &pathway_map,
        &positions,
        &stack,
        args.title.as_deref(),
        args.x_label.as_deref(),
        args.show_legend,
        (overlap_spread.horizontal, overlap_spread.vertical),
        &args.plot_output,
    );
    std::fs::write(out_dir.join("positions.txt"), positions_summary)
        .map_err(|source| pw_pathways_input::Error::WriteFailure {
            path: out_dir.join("positions.txt"),
            source,
        })?;

    info!(nodes = positions.len(), "resolved layout");
    Ok(())
}

/// Enumerates every root-to-leaf path of the sequence graph, excluding the
/// root ("current") action itself, as the ordered [`Sequence`]s that feed
/// the pathway-input generator.
///
/// Unlike `pw-generate`'s combinatorial sequence generator (out of this
/// binary's dependency graph, see `DESIGN.md`), this binary materializes
/// exactly the pathways implied by the input dataset's transitions, with no
/// enumeration, evaluation or filtering stage of its own — every pathway the
/// dataset describes is rendered.
fn root_to_leaf_sequences(sequence_graph: &SequenceGraph) -> Result<Vec<Sequence>> {
    let paths = sequence_graph.graph().all_paths()?;
    Ok(paths
        .into_iter()
        .filter_map(|path| {
            let actions: Vec<Action> =
                path.into_iter().skip(1).map(|node| sequence_graph.action(node).clone()).collect();
            (!actions.is_empty()).then(|| Sequence::new(actions))
        })
        .collect())
}
