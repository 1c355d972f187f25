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

//! Pathway map.

use pw_graph::Graph;
use pw_model::{Action, ActionBegin, ActionEnd};

use crate::error::Result;
use crate::pathway_graph::PathwayGraph;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Pathway map node.
///
/// An action's lifetime is represented by a `Begin` / `End` pair connected by
/// a lifetime edge; conversions between actions are edges from one action's
/// `End` to the next action's `Begin`. See [`pathway_graph_to_pathway_map`]
/// for the forking rule that duplicates `End` nodes at branch points.
#[derive(Clone, Debug, PartialEq)]
pub enum PathwayNode {
    /// The tipping point at which an action begins.
    Begin(ActionBegin),
    /// The tipping point at which an action ends, i.e. is superseded.
    End(ActionEnd),
}

impl PathwayNode {
    /// Returns the underlying action, regardless of node kind.
    #[must_use]
    pub fn action(&self) -> &Action {
        match self {
            Self::Begin(b) => &b.action,
            Self::End(e) => &e.action,
        }
    }

    /// Returns the tipping point, regardless of node kind.
    #[must_use]
    pub fn tipping_point(&self) -> f64 {
        match self {
            Self::Begin(b) => b.tipping_point,
            Self::End(e) => e.tipping_point,
        }
    }

    /// Returns `true` if this is a `Begin` node.
    #[must_use]
    pub fn is_begin(&self) -> bool {
        matches!(self, Self::Begin(_))
    }
}

/// Pathway map.
///
/// Nodes are [`PathwayNode::Begin`] / [`PathwayNode::End`] pairs; edges are
/// either an action's lifetime (`Begin -> End`) or a conversion (`End ->
/// Begin`). Built from a [`PathwayGraph`] by [`pathway_graph_to_pathway_map`].
///
/// As with [`PathwayGraph`], there is generally more than one entry point;
/// [`PathwayMap::roots`] lists the `Begin` node of each conversion that was a
/// [`PathwayGraph`] root.
#[derive(Clone, Debug)]
pub struct PathwayMap {
    /// Underlying graph.
    graph: Graph<PathwayNode>,
    /// Entry points, one per pathway-graph root.
    roots: Vec<usize>,
}

impl PathwayMap {
    /// Returns the underlying graph.
    #[inline]
    #[must_use]
    pub fn graph(&self) -> &Graph<PathwayNode> {
        &self.graph
    }

    /// Returns the entry `Begin` nodes.
    #[inline]
    #[must_use]
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Returns the leaf nodes, i.e. those with no successors.
    #[inline]
    #[must_use]
    pub fn leaves(&self) -> Vec<usize> {
        self.graph.leaf_nodes()
    }

    /// Walks the map in root-to-leaf order and asserts that `End` tipping
    /// points are non-decreasing along every edge. See §4.7's
    /// `verify_tipping_points`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NonMonotonicTippingPoints`] at the first
    /// violating edge.
    pub fn verify_tipping_points(&self) -> Result<()> {
        let mut stack: Vec<usize> = self.roots.clone();
        let mut visited = vec![false; self.graph.node_count()];
        while let Some(node) = stack.pop() {
            if visited[node] {
                continue;
            }
            visited[node] = true;
            let here = self.graph[node].tipping_point();
            for &succ in self.graph.to_nodes(node) {
                let there = self.graph[succ].tipping_point();
                if there < here {
                    return Err(crate::Error::NonMonotonicTippingPoints);
                }
                stack.push(succ);
            }
        }
        Ok(())
    }
}

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Transforms a pathway graph into a pathway map.
///
/// `tipping_point` supplies the intrinsic tipping point of an action, looked
/// up by the action's identity; for a conversion `(A, B)` this yields
/// `Begin(B).tipping_point = tipping_point(A)` and
/// `End(B).tipping_point = tipping_point(B)`, matching the classic layout's
/// `x(ActionEnd) = tipping_point_by_action[action]` rule (§4.7) so that both
/// layouts can share this construction.
///
/// # Errors
///
/// Propagates [`pw_graph::Error::CycleDetected`] should the constructed map
/// ever form a cycle (unreachable given an acyclic `pg`, but the builder
/// checks regardless).
pub fn pathway_graph_to_pathway_map(
    pg: &PathwayGraph, tipping_point: impl Fn(&Action) -> f64,
) -> Result<PathwayMap> {
    let mut builder: pw_graph::Builder<PathwayNode> = Graph::builder();

    // Pass 1: one Begin/End pair per conversion, indexed by conversion node.
    let pairs: Vec<(usize, usize)> = (0..pg.graph().node_count())
        .map(|node| {
            let conversion = &pg.graph()[node];
            let begin = builder.add_node(PathwayNode::Begin(ActionBegin {
                action: conversion.to.clone(),
                tipping_point: tipping_point(&conversion.from),
            }));
            let end = builder.add_node(PathwayNode::End(ActionEnd {
                action: conversion.to.clone(),
                tipping_point: tipping_point(&conversion.to),
            }));
            builder.add_edge(begin, end, ())?;
            Ok((begin, end))
        })
        .collect::<pw_graph::Result<Vec<_>>>()?;

    // Pass 2: wire conversion into its successors, duplicating the End node
    // as a fork point whenever more than one successor exists.
    for node in 0..pg.graph().node_count() {
        let (_, end) = pairs[node];
        let successors = pg.graph().to_nodes(node);
        match successors.len() {
            0 => {}
            1 => {
                let (begin, _) = pairs[successors[0]];
                builder.add_edge(end, begin, ())?;
            }
            _ => {
                let fork_action = pg.graph()[node].to.clone();
                let fork_tipping_point = match &builder[end] {
                    PathwayNode::End(e) => e.tipping_point,
                    PathwayNode::Begin(_) => unreachable!("end index holds an End node"),
                };
                let duplicate = builder.add_node(PathwayNode::End(ActionEnd {
                    action: fork_action,
                    tipping_point: fork_tipping_point,
                }));
                builder.add_edge(end, duplicate, ())?;
                for &succ in successors {
                    let (begin, _) = pairs[succ];
                    builder.add_edge(duplicate, begin, ())?;
                }
            }
        }
    }

    let graph = builder.build()?;
    let roots = pg.roots().iter().map(|&node| pairs[node].0).collect();

    Ok(PathwayMap { graph, roots })
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pw_model::Action;

    use super::*;
    use crate::pathway_graph::sequence_graph_to_pathway_graph;
    use crate::sequence_graph::SequenceGraph;

    fn a(name: &str) -> Action {
        Action::new(name)
    }

    fn flat_tipping_points<'a>(names: &'a [(&'a str, f64)]) -> impl Fn(&Action) -> f64 + 'a {
        move |action: &Action| {
            names
                .iter()
                .find(|(n, _)| *n == action.name)
                .map_or(0.0, |(_, t)| *t)
        }
    }

    #[test]
    fn single_edge_produces_begin_end_pair() {
        let sg = SequenceGraph::build([(a("current"), a("a"))]).unwrap();
        let pg = sequence_graph_to_pathway_graph(&sg).unwrap();
        let tp = flat_tipping_points(&[("current", 0.0), ("a", 5.0)]);
        let pm = pathway_graph_to_pathway_map(&pg, tp).unwrap();

        assert_eq!(pm.graph().node_count(), 2);
        assert_eq!(pm.roots().len(), 1);
        let begin = &pm.graph()[pm.roots()[0]];
        assert!(begin.is_begin());
        assert_eq!(begin.action().name, "a");
        assert_eq!(begin.tipping_point(), 0.0);

        let end_idx = pm.graph().to_nodes(pm.roots()[0])[0];
        let end = &pm.graph()[end_idx];
        assert!(!end.is_begin());
        assert_eq!(end.tipping_point(), 5.0);
    }

    #[test]
    fn diverging_fork_duplicates_end_node() {
        let sg = SequenceGraph::build([
            (a("current"), a("a")),
            (a("a"), a("b")),
            (a("a"), a("c")),
        ])
        .unwrap();
        let pg = sequence_graph_to_pathway_graph(&sg).unwrap();
        let tp = flat_tipping_points(&[("current", 0.0), ("a", 1.0), ("b", 2.0), ("c", 2.0)]);
        let pm = pathway_graph_to_pathway_map(&pg, tp).unwrap();

        // current->a pair, plus duplicate End(a), plus a->b and a->c pairs.
        assert_eq!(pm.graph().node_count(), 7);

        let root = pm.roots()[0];
        let end_a = pm.graph().to_nodes(root)[0];
        let forks = pm.graph().to_nodes(end_a);
        assert_eq!(forks.len(), 1, "End(a) forks through exactly one duplicate");
        let duplicate = forks[0];
        assert_eq!(pm.graph()[duplicate].action().name, "a");
        assert_eq!(pm.graph().to_nodes(duplicate).len(), 2);
    }

    #[test]
    fn chained_sequence_has_no_fork_and_passes_monotonicity() {
        let sg = SequenceGraph::build([
            (a("current"), a("a")),
            (a("a"), a("b")),
        ])
        .unwrap();
        let pg = sequence_graph_to_pathway_graph(&sg).unwrap();
        let tp = flat_tipping_points(&[("current", 0.0), ("a", 1.0), ("b", 2.0)]);
        let pm = pathway_graph_to_pathway_map(&pg, tp).unwrap();
        assert!(pm.verify_tipping_points().is_ok());
    }

    #[test]
    fn regressing_tipping_point_is_rejected() {
        let sg = SequenceGraph::build([
            (a("current"), a("a")),
            (a("a"), a("b")),
        ])
        .unwrap();
        let pg = sequence_graph_to_pathway_graph(&sg).unwrap();
        let tp = flat_tipping_points(&[("current", 0.0), ("a", 5.0), ("b", 1.0)]);
        let pm = pathway_graph_to_pathway_map(&pg, tp).unwrap();
        assert!(matches!(
            pm.verify_tipping_points(),
            Err(crate::Error::NonMonotonicTippingPoints)
        ));
    }
}
