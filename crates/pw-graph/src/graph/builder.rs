// Copyright (c) 2025 Zensical and contributors

// SPDX-License-Identifier: MIT
// Third-party contributions licensed under DCO

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

//! Graph builder.

use ahash::HashMap;
use std::ops::Index;

use super::error::{Error, Result};
use super::topology::Topology;
use super::Graph;

// ----------------------------------------------------------------------------
// Structs
// ----------------------------------------------------------------------------

/// Graph builder.
#[derive(Clone, Debug)]
pub struct Builder<T, W = ()> {
    /// Nodes of the graph.
    nodes: Vec<T>,
    /// Edges of the graph.
    edges: Vec<Edge<W>>,
}

/// Graph edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge<W = ()> {
    /// Source node index.
    pub source: usize,
    /// Target node index.
    pub target: usize,
    /// Weight.
    pub weight: W,
}

// ----------------------------------------------------------------------------
// Implementations
// ----------------------------------------------------------------------------

impl<T> Graph<T> {
    /// Creates a graph builder.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::error::Error;
    /// # fn main() -> Result<(), Box<dyn Error>> {
    /// use pw_graph::Graph;
    ///
    /// // Create graph builder
    /// let mut builder = Graph::builder();
    /// let a = builder.add_node("a");
    /// let b = builder.add_node("b");
    ///
    /// // Create edges between nodes
    /// builder.add_edge(a, b, 0)?;
    /// # Ok(())
    /// # }
    /// ```
    #[inline]
    #[must_use]
    pub fn builder<W>() -> Builder<T, W>
    where
        W: Clone,
    {
        Builder {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

// ----------------------------------------------------------------------------

impl<T, W> Builder<T, W> {
    /// Adds a node to the graph.
    pub fn add_node(&mut self, node: T) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Adds an edge to the graph.
    ///
    /// # Errors
    ///
    /// In case the source or target node doesn't exist, [`Error::NotFound`] is
    /// returned, to make sure the graph does not contain stale node references.
    /// By returning an error instead of panicking, we can provide recoverable
    /// and proper error handling to the caller.
    ///
    /// This is mentionable, as some other graph libraries will just panic and
    /// crash the program, like the popular [`petgraph`][] crate. Additionally,
    /// note that this method does not check whether an edge already exists, as
    /// the existence of multiple edges is a valid use case in some scenarios;
    /// callers that require deduplication (e.g., the sequence graph) do so
    /// before calling this method.
    ///
    /// [`petgraph`]: https://docs.rs/petgraph/
    pub fn add_edge(
        &mut self, source: usize, target: usize, weight: W,
    ) -> Result {
        if source >= self.nodes.len() {
            return Err(Error::NotFound(source));
        }
        if target >= self.nodes.len() {
            return Err(Error::NotFound(target));
        }

        // Add edge, as both nodes were found
        self.edges.push(Edge { source, target, weight });
        Ok(())
    }

    /// Builds the graph.
    ///
    /// This method creates the actual graph from the builder, bringing it into
    /// an executable form that allows for very efficient traversal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CycleDetected`] if the edges added so far do not form a
    /// directed acyclic graph. Acyclicity is checked with a topological
    /// traversal from every source node (in-degree zero): if any node remains
    /// unvisited once all visitable nodes have been exhausted, it is part of,
    /// or only reachable through, a cycle.
    pub fn build(self) -> Result<Graph<T>>
    where
        W: Clone,
    {
        let topology = Topology::new(&self);
        let sources: Vec<usize> = (0..self.nodes.len())
            .filter(|&n| topology.incoming()[n].is_empty())
            .collect();

        let mut traversal =
            super::traversal::Traversal::new(&topology, &sources);
        let mut visited = 0usize;
        while let Some(node) = traversal.take() {
            traversal.complete(node).expect("node visited exactly once");
            visited += 1;
        }
        if visited != self.nodes.len() {
            return Err(Error::CycleDetected);
        }

        Ok(Graph {
            topology,
            data: self.nodes,
            attributes: HashMap::default(),
        })
    }
}

#[allow(clippy::must_use_candidate)]
impl<T, W> Builder<T, W> {
    /// Returns a reference to the nodes.
    #[inline]
    pub fn nodes(&self) -> &[T] {
        &self.nodes
    }

    /// Returns a reference to the edges.
    #[inline]
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    /// Returns the number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether there are any nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ----------------------------------------------------------------------------
// Trait implementations
// ----------------------------------------------------------------------------

impl<T, W> Index<usize> for Builder<T, W> {
    type Output = T;

    /// Returns a reference to the node at the index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of bounds.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.nodes[index]
    }
}

// ----------------------------------------------------------------------------

impl<T, W> Default for Builder<T, W>
where
    W: Clone,
{
    /// Creates a graph builder.
    #[inline]
    fn default() -> Self {
        Builder {
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::super::Error;
    use crate::Graph;

    #[test]
    fn add_edge_rejects_unknown_source() {
        let mut builder = Graph::<&str>::builder();
        let a = builder.add_node("a");
        assert_eq!(builder.add_edge(a + 1, a, ()), Err(Error::NotFound(a + 1)));
    }

    #[test]
    fn build_detects_cycle() {
        let mut builder = Graph::builder();
        let a = builder.add_node("a");
        let b = builder.add_node("b");
        builder.add_edge(a, b, ()).unwrap();
        builder.add_edge(b, a, ()).unwrap();
        assert!(matches!(builder.build(), Err(Error::CycleDetected)));
    }

    #[test]
    fn build_accepts_dag() {
        let mut builder = Graph::builder();
        let a = builder.add_node("a");
        let b = builder.add_node("b");
        builder.add_edge(a, b, ()).unwrap();
        assert!(builder.build().is_ok());
    }
}
