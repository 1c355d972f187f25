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

//! Sequence graph.

use std::collections::{HashMap, HashSet};

use pw_graph::Graph;
use pw_model::{Action, Edition};

use crate::error::Result;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Sequence graph.
///
/// Nodes are actions, deduplicated by `(name, edition)` identity; edges are
/// "action X may be followed by action Y" transitions, built from an ordered
/// list of `(from, to)` pairs as produced by the ingest layer. Self-loops are
/// dropped and duplicate edges collapse to a single edge, both silently,
/// since re-mentioning a transition is common in hand-written input and
/// carries no additional meaning.
///
/// Successor order (see [`SequenceGraph::to_actions`]) preserves the order in
/// which the first outgoing edge of a node was added, which in turn falls out
/// of [`Graph`]'s adjacency lists being insertion-ordered — see
/// `test_diverging_sequence` below.
#[derive(Clone, Debug)]
pub struct SequenceGraph {
    graph: Graph<Action>,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl SequenceGraph {
    /// Builds a sequence graph from an ordered list of `(from, to)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Graph`][crate::Error::Graph] if the edges form a
    /// cycle. Constructing a graph with no edges at all, or one whose actions
    /// don't reduce to a single root, is accepted here; callers that need a
    /// root query [`SequenceGraph::root`] explicitly and handle `Empty` /
    /// `MultipleRoots` themselves.
    pub fn build(
        edges: impl IntoIterator<Item = (Action, Action)>,
    ) -> Result<Self> {
        let mut builder: pw_graph::Builder<Action> = Graph::builder();
        let mut index: HashMap<(String, Edition), usize> = HashMap::new();
        let mut seen_edges: HashSet<(usize, usize)> = HashSet::new();

        fn node_for(
            builder: &mut pw_graph::Builder<Action>,
            index: &mut HashMap<(String, Edition), usize>, action: &Action,
        ) -> usize {
            let key = (action.name.clone(), action.edition);
            *index
                .entry(key)
                .or_insert_with(|| builder.add_node(action.clone()))
        }

        for (from, to) in edges {
            let from_idx = node_for(&mut builder, &mut index, &from);
            let to_idx = node_for(&mut builder, &mut index, &to);

            // Self-loops are never meaningful transitions: an action cannot
            // be followed by itself.
            if from_idx == to_idx {
                continue;
            }
            if seen_edges.insert((from_idx, to_idx)) {
                builder.add_edge(from_idx, to_idx, ())?;
            }
        }

        Ok(Self { graph: builder.build()? })
    }

    /// Returns the underlying graph.
    #[inline]
    #[must_use]
    pub fn graph(&self) -> &Graph<Action> {
        &self.graph
    }

    /// Returns the number of distinct actions.
    #[inline]
    #[must_use]
    pub fn nr_actions(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of transitions.
    #[inline]
    #[must_use]
    pub fn nr_sequences(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns the root node, i.e. the "current" action.
    ///
    /// # Errors
    ///
    /// Propagates [`pw_graph::Error::Empty`] and
    /// [`pw_graph::Error::MultipleRoots`].
    #[inline]
    pub fn root(&self) -> pw_graph::Result<usize> {
        self.graph.root_node()
    }

    /// Returns the action at the given node.
    ///
    /// # Panics
    ///
    /// Panics if the node does not exist.
    #[inline]
    #[must_use]
    pub fn action(&self, node: usize) -> &Action {
        &self.graph[node]
    }

    /// Returns the successors of an action, in insertion order.
    #[inline]
    #[must_use]
    pub fn to_actions(&self, node: usize) -> &[usize] {
        self.graph.to_nodes(node)
    }

    /// Returns the number of successors of an action.
    #[inline]
    #[must_use]
    pub fn nr_to_actions(&self, node: usize) -> usize {
        self.graph.to_nodes(node).len()
    }

    /// Returns the number of predecessors of an action.
    #[inline]
    #[must_use]
    pub fn nr_from_actions(&self, node: usize) -> usize {
        self.graph.from_nodes(node).len()
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn a(name: &str) -> Action {
        Action::new(name)
    }

    #[test]
    fn single_edge_builds_two_actions() {
        let sg = SequenceGraph::build([(a("current"), a("a"))]).unwrap();
        assert_eq!(sg.nr_actions(), 2);
        assert_eq!(sg.nr_sequences(), 1);
        let root = sg.root().unwrap();
        assert_eq!(sg.action(root).name, "current");
        assert_eq!(sg.action(sg.to_actions(root)[0]).name, "a");
    }

    #[test]
    fn converging_sequence_has_single_root_and_in_degree() {
        let sg = SequenceGraph::build([
            (a("current"), a("a")),
            (a("current"), a("b")),
            (a("current"), a("c")),
            (a("a"), a("d")),
            (a("b"), a("d")),
            (a("c"), a("d")),
        ])
        .unwrap();
        assert_eq!(sg.nr_actions(), 5);
        assert_eq!(sg.nr_sequences(), 6);
        let root = sg.root().unwrap();
        assert_eq!(sg.action(root).name, "current");

        let d = (0..sg.nr_actions())
            .find(|&n| sg.action(n).name == "d")
            .unwrap();
        assert_eq!(sg.nr_from_actions(d), 3);
    }

    #[test]
    fn test_diverging_sequence() {
        let sg = SequenceGraph::build([
            (a("current"), a("a")),
            (a("current"), a("b")),
            (a("current"), a("c")),
        ])
        .unwrap();
        let root = sg.root().unwrap();
        let names: Vec<&str> = sg
            .to_actions(root)
            .iter()
            .map(|&n| sg.action(n).name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn self_loops_are_dropped() {
        let sg = SequenceGraph::build([(a("a"), a("a"))]).unwrap();
        assert_eq!(sg.nr_actions(), 1);
        assert_eq!(sg.nr_sequences(), 0);
    }

    #[test]
    fn duplicate_edges_collapse() {
        let sg = SequenceGraph::build([
            (a("current"), a("a")),
            (a("current"), a("a")),
        ])
        .unwrap();
        assert_eq!(sg.nr_sequences(), 1);
    }

    #[test]
    fn cycles_are_rejected() {
        let result = SequenceGraph::build([
            (a("a"), a("b")),
            (a("b"), a("c")),
            (a("c"), a("a")),
        ]);
        assert!(matches!(result, Err(crate::Error::Graph(pw_graph::Error::CycleDetected))));
    }

    #[test]
    fn combination_actions_resolve_to_the_same_node() {
        let c = Action::combination("c", 0, vec![a("a"), a("b")]).unwrap();
        let sg = SequenceGraph::build([
            (a("current"), a("a")),
            (a("current"), a("b")),
            (a("a"), c.clone()),
            (a("b"), c),
        ])
        .unwrap();
        assert_eq!(sg.nr_actions(), 4);
        let from_a = (0..sg.nr_actions()).find(|&n| sg.action(n).name == "a").unwrap();
        let from_b = (0..sg.nr_actions()).find(|&n| sg.action(n).name == "b").unwrap();
        assert_eq!(sg.to_actions(from_a)[0], sg.to_actions(from_b)[0]);
    }
}
