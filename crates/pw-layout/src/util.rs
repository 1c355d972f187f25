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

//! Coordinate-spacing utilities shared by both layout engines.

use std::collections::{HashMap, HashSet};

use pw_graph::Graph;
use pw_pathway::{PathwayMap, PathwayNode};

// ----------------------------------------------------------------------------
// Functions
// ----------------------------------------------------------------------------

/// Enumerates every simple path from a root to a leaf.
///
/// [`Graph::all_paths`] assumes a single root and fails with
/// [`pw_graph::Error::MultipleRoots`] otherwise, which a [`PathwayMap`] with
/// more than one pathway-graph root routinely has; this walks each of
/// `roots` independently instead.
pub(crate) fn enumerate_paths(
    graph: &Graph<PathwayNode>, roots: &[usize], leaves: &[usize],
) -> Vec<Vec<usize>> {
    fn visit(
        graph: &Graph<PathwayNode>, node: usize, leaves: &HashSet<usize>,
        path: &mut Vec<usize>, paths: &mut Vec<Vec<usize>>,
    ) {
        path.push(node);
        if leaves.contains(&node) {
            paths.push(path.clone());
        }
        for &successor in graph.to_nodes(node) {
            visit(graph, successor, leaves, path, paths);
        }
        path.pop();
    }

    let leaves: HashSet<usize> = leaves.iter().copied().collect();
    let mut paths = Vec::new();
    for &root in roots {
        let mut path = Vec::new();
        visit(graph, root, &leaves, &mut path, &mut paths);
    }
    paths
}

/// Spaces out a set of coordinates so that every pair is at least
/// `min_distance` apart, preserving input order and disturbing already-spaced
/// values as little as possible.
///
/// Implemented as two monotone relaxation passes — an ascending pass pushing
/// each value at least `min_distance` past its left neighbor, a descending
/// pass pulling each value at least `min_distance` before its right
/// neighbor — averaged together. Both passes are themselves spaced by at
/// least `min_distance`, so the average is too; and on input that is already
/// spaced by at least `min_distance` (in either direction), both passes
/// reproduce the input exactly, so the average does as well. See
/// `DESIGN.md` for why this diverges from the upstream implementation's
/// literal behavior.
#[must_use]
pub fn distribute(coords: &[f64], min_distance: f64) -> Vec<f64> {
    let n = coords.len();
    if n == 0 {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| coords[a].partial_cmp(&coords[b]).unwrap());
    let sorted: Vec<f64> = order.iter().map(|&i| coords[i]).collect();

    let mut up = vec![0.0; n];
    up[0] = sorted[0];
    for i in 1..n {
        up[i] = sorted[i].max(up[i - 1] + min_distance);
    }

    let mut down = vec![0.0; n];
    down[n - 1] = sorted[n - 1];
    for i in (0..n - 1).rev() {
        down[i] = sorted[i].min(down[i + 1] - min_distance);
    }

    let mut result = vec![0.0; n];
    for (rank, &original) in order.iter().enumerate() {
        result[original] = (up[rank] + down[rank]) / 2.0;
    }
    result
}

/// Partitions `regions` (each a `(lower, upper)` extent) into maximal groups
/// whose members transitively share at least one point. Returns groups as
/// lists of indices into `regions`.
#[must_use]
pub fn group_overlapping_regions(regions: &[(f64, f64)]) -> Vec<Vec<usize>> {
    if regions.is_empty() {
        return Vec::new();
    }

    let mut order: Vec<usize> = (0..regions.len()).collect();
    order.sort_by(|&a, &b| regions[a].0.partial_cmp(&regions[b].0).unwrap());

    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut current = vec![order[0]];
    let mut current_max = regions[order[0]].1;

    for &i in &order[1..] {
        let (lower, upper) = regions[i];
        if lower <= current_max {
            current.push(i);
            current_max = current_max.max(upper);
        } else {
            groups.push(std::mem::take(&mut current));
            current = vec![i];
            current_max = upper;
        }
    }
    groups.push(current);
    groups
}

/// Default `level_by_action_name` heuristic: ranks an action by the earliest
/// `(pathway, position-within-pathway)` at which it is reached, so that
/// actions are stacked in roughly the order a reader encounters them when
/// scanning pathways top to bottom.
#[must_use]
pub fn action_level_by_first_occurrence(map: &PathwayMap) -> HashMap<String, f64> {
    let graph = map.graph();
    let mut level_by_name: HashMap<String, f64> = HashMap::new();

    let paths = enumerate_paths(graph, map.roots(), &map.leaves());

    for (path_index, path) in paths.iter().enumerate() {
        let mut begin_index = 0usize;
        for &node in path {
            if let PathwayNode::Begin(begin) = &graph[node] {
                let level = 10.0 * path_index as f64 + begin_index as f64;
                level_by_name
                    .entry(begin.action.name.clone())
                    .and_modify(|existing| {
                        if level < *existing {
                            *existing = level;
                        }
                    })
                    .or_insert(level);
                begin_index += 1;
            }
        }
    }

    level_by_name
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn min_gap(coords: &[f64]) -> f64 {
        let mut sorted = coords.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        sorted.windows(2).map(|w| w[1] - w[0]).fold(f64::INFINITY, f64::min)
    }

    #[test]
    fn distribute_collinear_input_matches_scenario_h() {
        assert_eq!(distribute(&[0.0, 0.0, 0.0], 1.0), vec![-1.0, 0.0, 1.0]);
    }

    #[test]
    fn distribute_is_idempotent_on_already_spaced_input() {
        let spaced = vec![0.0, 1.0, 2.0, 3.5];
        assert_eq!(distribute(&spaced, 1.0), spaced);

        let spaced_desc = vec![3.5, 2.0, 1.0, 0.0];
        assert_eq!(distribute(&spaced_desc, 1.0), spaced_desc);
    }

    #[test]
    fn distribute_guarantees_minimum_gap() {
        let coords = vec![0.0, 0.1, 0.2, 5.0, -3.0];
        let result = distribute(&coords, 1.0);
        assert!(min_gap(&result) >= 1.0 - 1e-9);
    }

    #[test]
    fn distribute_handles_empty_and_singleton() {
        assert_eq!(distribute(&[], 1.0), Vec::<f64>::new());
        assert_eq!(distribute(&[4.0], 1.0), vec![4.0]);
    }

    #[test]
    fn overlapping_regions_group_transitively() {
        let regions = [(0.0, 1.0), (0.5, 2.0), (5.0, 6.0), (1.5, 1.9)];
        let groups = group_overlapping_regions(&regions);
        assert_eq!(groups.len(), 2);
        let mut big = groups.iter().find(|g| g.len() == 3).unwrap().clone();
        big.sort_unstable();
        assert_eq!(big, vec![0, 1, 3]);
    }

    #[test]
    fn disjoint_regions_form_singleton_groups() {
        let regions = [(0.0, 1.0), (2.0, 3.0), (4.0, 5.0)];
        let groups = group_overlapping_regions(&regions);
        assert_eq!(groups.len(), 3);
    }
}
