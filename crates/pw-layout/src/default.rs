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

//! Default layout, used for diagnostic visualization.

use pw_pathway::PathwayMap;

use crate::position::{Position, PositionByNode};
use crate::util::distribute;

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Lays out a pathway map without regard to tipping points: every edge moves
/// one unit to the right, and nodes reached by more than one path are pushed
/// to the rightmost position offered by any of their predecessors.
///
/// Horizontal placement walks the map in topological order (each node is
/// visited only once every predecessor has been), so a node's position is
/// always final by the time it's read: `x(successor) = max(x(successor),
/// x(node) + 1)`, starting every root at `x = 0`.
///
/// Vertical placement then processes nodes in increasing-`x` order, grouped
/// by identical `x`: each node's `y` starts as the mean `y` of its
/// predecessors (roots keep `y = 0`), and [`distribute`] spaces out each
/// group by at least one unit so that coincident lines separate visually.
#[must_use]
pub fn default_layout(map: &PathwayMap) -> PositionByNode {
    let graph = map.graph();
    let mut position_by_node: PositionByNode = PositionByNode::new();

    if graph.node_count() == 0 {
        return position_by_node;
    }

    for &root in map.roots() {
        position_by_node.insert(root, Position::new(0.0, 0.0));
    }

    let mut traversal = graph.traverse(map.roots().to_vec());
    while let Some(node) = traversal.take() {
        if !position_by_node.contains_key(&node) {
            let x = graph
                .from_nodes(node)
                .iter()
                .map(|predecessor| position_by_node[predecessor].x + 1.0)
                .fold(0.0_f64, f64::max);
            position_by_node.insert(node, Position::new(x, 0.0));
        }
        traversal
            .complete(node)
            .expect("each node is taken from the traversal exactly once");
    }

    let mut order: Vec<usize> = graph.iter().collect();
    order.sort_by(|&a, &b| {
        position_by_node[&a].x.partial_cmp(&position_by_node[&b].x).unwrap()
    });

    let mut start = 0;
    while start < order.len() {
        let x = position_by_node[&order[start]].x;
        let mut end = start;
        while end < order.len() && (position_by_node[&order[end]].x - x).abs() < f64::EPSILON {
            end += 1;
        }
        let group = &order[start..end];

        for &node in group {
            let predecessors = graph.from_nodes(node);
            if predecessors.is_empty() {
                continue;
            }
            let mean_y = predecessors.iter().map(|p| position_by_node[p].y).sum::<f64>()
                / predecessors.len() as f64;
            position_by_node.get_mut(&node).unwrap().y = mean_y;
        }

        let ys: Vec<f64> = group.iter().map(|&n| position_by_node[&n].y).collect();
        let spread = distribute(&ys, 1.0);
        for (&node, y) in group.iter().zip(spread) {
            position_by_node.get_mut(&node).unwrap().y = y;
        }

        start = end;
    }

    position_by_node
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pw_model::Action;
    use pw_pathway::{pathway_graph_to_pathway_map, sequence_graph_to_pathway_graph, SequenceGraph};

    use super::*;

    fn a(name: &str) -> Action {
        Action::new(name)
    }

    fn flat_tipping_points() -> impl Fn(&Action) -> f64 {
        |_: &Action| 0.0
    }

    #[test]
    fn chain_moves_one_unit_right_per_step() {
        let sg = SequenceGraph::build([(a("current"), a("a")), (a("a"), a("b"))]).unwrap();
        let pg = sequence_graph_to_pathway_graph(&sg).unwrap();
        let map = pathway_graph_to_pathway_map(&pg, flat_tipping_points()).unwrap();

        let position = default_layout(&map);
        let root = map.roots()[0];
        let end_a = map.graph().to_nodes(root)[0];
        let begin_b = map.graph().to_nodes(end_a)[0];
        let end_b = map.graph().to_nodes(begin_b)[0];

        assert_eq!(position[&root].x, 0.0);
        assert_eq!(position[&end_a].x, 1.0);
        assert_eq!(position[&begin_b].x, 2.0);
        assert_eq!(position[&end_b].x, 3.0);
    }

    #[test]
    fn diverging_fork_spreads_successors_vertically() {
        let sg = SequenceGraph::build([
            (a("current"), a("a")),
            (a("a"), a("b")),
            (a("a"), a("c")),
        ])
        .unwrap();
        let pg = sequence_graph_to_pathway_graph(&sg).unwrap();
        let map = pathway_graph_to_pathway_map(&pg, flat_tipping_points()).unwrap();

        let position = default_layout(&map);
        let root = map.roots()[0];
        let end_a = map.graph().to_nodes(root)[0];
        let fork = map.graph().to_nodes(end_a)[0];
        let begins: Vec<usize> = map.graph().to_nodes(fork).to_vec();
        assert_eq!(begins.len(), 2);

        let ys: Vec<f64> = begins.iter().map(|n| position[n].y).collect();
        assert!((ys[0] - ys[1]).abs() >= 1.0 - 1e-9);
    }
}
