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

//! Pathway graph.

use std::collections::{HashMap, HashSet};

use pw_graph::Graph;
use pw_model::ActionConversion;

use crate::error::Result;
use crate::sequence_graph::SequenceGraph;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Pathway graph.
///
/// Nodes are [`ActionConversion`] tipping points; edges are periods of time
/// during which a conversion's target action remains in effect before the
/// next conversion. Built from a [`SequenceGraph`] by
/// [`sequence_graph_to_pathway_graph`].
///
/// Unlike [`SequenceGraph`], a pathway graph generally has more than one node
/// with in-degree zero: one per transition out of the sequence graph's root
/// action. [`PathwayGraph::roots`] exposes that set explicitly, rather than
/// pretending a single `root_node` query would succeed.
#[derive(Clone, Debug)]
pub struct PathwayGraph {
    /// Underlying graph.
    graph: Graph<ActionConversion>,
    /// Entry points: one per transition out of the sequence root.
    roots: Vec<usize>,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl PathwayGraph {
    /// Returns the underlying graph.
    #[inline]
    #[must_use]
    pub fn graph(&self) -> &Graph<ActionConversion> {
        &self.graph
    }

    /// Returns the entry conversions, one per transition out of the sequence
    /// root, in the order the sequence root's successors were visited.
    #[inline]
    #[must_use]
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Returns the leaf conversions, i.e. those with no successors.
    #[inline]
    #[must_use]
    pub fn leaves(&self) -> Vec<usize> {
        self.graph.leaf_nodes()
    }
}

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Transforms a sequence graph into a pathway graph.
///
/// For every edge `from -> to` in `sg`, a node `ActionConversion(from, to)`
/// is created; conversions that follow one another in `sg` (i.e. the first
/// conversion's `to` equals the second's `from`) are connected. Traversal is
/// depth-first, preorder, over an explicit worklist rather than recursion, so
/// that pathway-graph node creation order matches the order "started" and
/// "ended" conversions were first discovered in `sg` — this order is
/// observable downstream in the default layout (§4.7) and must not change.
///
/// # Errors
///
/// Propagates [`SequenceGraph::root`]'s `Empty` / `MultipleRoots`, and
/// [`pw_graph::Error::CycleDetected`] should the constructed pathway graph
/// ever form a cycle (unreachable given an acyclic `sg`, but the builder
/// checks regardless).
pub fn sequence_graph_to_pathway_graph(
    sg: &SequenceGraph,
) -> Result<PathwayGraph> {
    let root = sg.root()?;

    // Depth-first, preorder walk of the sequence graph's nodes, using an
    // explicit stack to avoid recursion depth limits on large inputs.
    let mut visited = vec![false; sg.nr_actions()];
    let mut order = Vec::with_capacity(sg.nr_actions());
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if visited[node] {
            continue;
        }
        visited[node] = true;
        order.push(node);
        for &child in sg.to_actions(node).iter().rev() {
            if !visited[child] {
                stack.push(child);
            }
        }
    }

    // Pass 1: create one pathway-graph node per sequence-graph edge, in the
    // preorder above, so that node indices reflect discovery order.
    let mut builder: pw_graph::Builder<ActionConversion> = Graph::builder();
    let mut node_of: HashMap<(usize, usize), usize> = HashMap::new();
    for &node in &order {
        for &child in sg.to_actions(node) {
            node_of.entry((node, child)).or_insert_with(|| {
                let conversion = ActionConversion::new(
                    sg.action(node).clone(),
                    sg.action(child).clone(),
                );
                builder.add_node(conversion)
            });
        }
    }

    // Pass 2: connect conversions that follow one another. A conversion
    // `(p, n)` is followed by every conversion `(n, c)` sharing the pivot
    // action `n`; dedup since a node reachable through several predecessors
    // would otherwise be wired to its successors once per predecessor.
    let mut seen_edges: HashSet<(usize, usize)> = HashSet::new();
    for &node in &order {
        if node == root {
            continue;
        }
        let incoming: Vec<usize> = sg
            .graph()
            .from_nodes(node)
            .iter()
            .map(|&p| node_of[&(p, node)])
            .collect();
        let outgoing: Vec<usize> = sg
            .to_actions(node)
            .iter()
            .map(|&c| node_of[&(node, c)])
            .collect();
        for &from in &incoming {
            for &to in &outgoing {
                if seen_edges.insert((from, to)) {
                    builder.add_edge(from, to, ())?;
                }
            }
        }
    }

    let graph = builder.build()?;
    let roots = sg
        .to_actions(root)
        .iter()
        .map(|&child| node_of[&(root, child)])
        .collect();

    Ok(PathwayGraph { graph, roots })
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pw_model::Action;

    use super::*;

    fn a(name: &str) -> Action {
        Action::new(name)
    }

    #[test]
    fn single_edge_produces_one_root_conversion() {
        let sg = SequenceGraph::build([(a("current"), a("a"))]).unwrap();
        let pg = sequence_graph_to_pathway_graph(&sg).unwrap();
        assert_eq!(pg.graph().node_count(), 1);
        assert_eq!(pg.roots().len(), 1);
        let conv = &pg.graph()[pg.roots()[0]];
        assert_eq!(conv.from.name, "current");
        assert_eq!(conv.to.name, "a");
    }

    #[test]
    fn chained_transitions_connect_conversions() {
        let sg = SequenceGraph::build([
            (a("current"), a("a")),
            (a("a"), a("b")),
        ])
        .unwrap();
        let pg = sequence_graph_to_pathway_graph(&sg).unwrap();
        assert_eq!(pg.graph().node_count(), 2);
        let root = pg.roots()[0];
        let successors = pg.graph().to_nodes(root);
        assert_eq!(successors.len(), 1);
        assert_eq!(pg.graph()[successors[0]].to.name, "b");
    }

    #[test]
    fn converging_sequence_fans_out_roots_and_merges_downstream() {
        let sg = SequenceGraph::build([
            (a("current"), a("a")),
            (a("current"), a("b")),
            (a("current"), a("c")),
            (a("a"), a("d")),
            (a("b"), a("d")),
            (a("c"), a("d")),
        ])
        .unwrap();
        let pg = sequence_graph_to_pathway_graph(&sg).unwrap();
        // 3 root conversions + 3 conversions into d.
        assert_eq!(pg.graph().node_count(), 6);
        assert_eq!(pg.roots().len(), 3);
        assert!(pg.leaves().len() == 3);
    }
}
