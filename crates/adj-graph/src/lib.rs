// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Unweighted undirected graphs backed by an adjacency matrix.
//!
//! A [`Graph`] over `n` nodes wraps an `n × n` [`sq_matrix::SqMatrix<u8>`]
//! whose entry `[i, j]` is `1` iff nodes `i` and `j` share an edge. Nodes are
//! the integers `0..n` and the node set never changes after construction.
//!
//! The [`traversal`] module explores graphs depth-first, either to mark the
//! vertices reachable from a start vertex or to label every vertex with its
//! connected component. Traversal state is owned by the caller and the graph
//! is never mutated.

pub mod config;
pub mod errors;
pub mod graph;
pub mod traversal;

pub use config::GraphConfig;
pub use errors::{GraphError, GraphResult};
pub use graph::Graph;
pub use traversal::{connected_components, explore, explore_with, reachable, Components};
