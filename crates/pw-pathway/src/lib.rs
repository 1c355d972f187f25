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

//! Sequence graph, pathway graph and pathway map transformations.
//!
//! Three progressively detailed DAG views of the same plan space, each built
//! on the [`pw_graph::Graph`] substrate:
//!
//! - [`SequenceGraph`] — nodes are actions, edges are permitted transitions.
//! - [`PathwayGraph`] — nodes are tipping points (`from action -> to action`),
//!   built from a sequence graph by [`sequence_graph_to_pathway_graph`].
//! - [`PathwayMap`] — nodes are the begin/end of an action's lifetime, built
//!   from a pathway graph by [`pathway_graph_to_pathway_map`].
//!
//! Only [`SequenceGraph`] carries a single root in the strict sense of
//! [`pw_graph::Graph::root_node`]: the "current" action with in-degree zero.
//! [`PathwayGraph`] and [`PathwayMap`] fan out from that single action into
//! one node per first transition, so they expose their entry points as
//! [`PathwayGraph::roots`] / [`PathwayMap::roots`] rather than a single
//! `root_node` — see `DESIGN.md` for the reasoning.

mod error;
mod pathway_graph;
mod pathway_map;
mod sequence_graph;

pub use error::{Error, Result};
pub use pathway_graph::{sequence_graph_to_pathway_graph, PathwayGraph};
pub use pathway_map::{pathway_graph_to_pathway_map, PathwayMap, PathwayNode};
pub use sequence_graph::SequenceGraph;
