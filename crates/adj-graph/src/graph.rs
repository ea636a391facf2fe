// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::GraphResult;
use sq_matrix::SqMatrix;
use std::collections::BTreeSet;
use std::fmt;
use tracing::trace;

/// An unweighted undirected graph over nodes `0..n`.
///
/// The adjacency matrix is symmetric and every entry is `0` or `1`. A fresh
/// graph has no self-loops; the diagonal only changes through `add_edge(i, i)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adj: SqMatrix<u8>,
}

impl Graph {
    /// Creates a graph with `n` nodes and no edges.
    pub fn new(n: usize) -> Self {
        Self {
            adj: SqMatrix::new(n),
        }
    }

    /// Creates a graph with `n` nodes and the given edges.
    pub fn from_edges<I>(n: usize, edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(n);
        for (i, j) in edges {
            graph.add_edge(i, j)?;
        }
        Ok(graph)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adj.dim()
    }

    /// The adjacency matrix.
    pub fn adjacency(&self) -> &SqMatrix<u8> {
        &self.adj
    }

    /// Adds an edge between `i` and `j`. Adding an existing edge does nothing.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if either node is not in `0..n`. The graph is unchanged
    /// on error.
    pub fn add_edge(&mut self, i: usize, j: usize) -> GraphResult<()> {
        self.set_symmetric(i, j, 1)?;
        trace!(i, j, "edge added");
        Ok(())
    }

    /// Removes the edge between `i` and `j`, if there is one.
    pub fn remove_edge(&mut self, i: usize, j: usize) -> GraphResult<()> {
        self.set_symmetric(i, j, 0)?;
        trace!(i, j, "edge removed");
        Ok(())
    }

    // The first `set` checks both indices, so the second cannot fail.
    fn set_symmetric(&mut self, i: usize, j: usize, value: u8) -> GraphResult<()> {
        self.adj.set(i, j, value)?;
        self.adj.set(j, i, value)?;
        Ok(())
    }

    /// True if `i` and `j` share an edge.
    pub fn has_edge(&self, i: usize, j: usize) -> GraphResult<bool> {
        Ok(self.adj.get(i, j)? == 1)
    }

    /// The nodes connected to `i`.
    ///
    /// Contains `i` itself only if the diagonal entry is set.
    pub fn neighbors(&self, i: usize) -> GraphResult<BTreeSet<usize>> {
        let row = self.adj.row(i)?;
        Ok(row
            .iter()
            .enumerate()
            .filter(|&(_, &x)| x == 1)
            .map(|(j, _)| j)
            .collect())
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        let n = self.node_count();
        let entries = self.adj.as_slice();
        (0..n)
            .flat_map(|i| (i..n).map(move |j| i * n + j))
            .filter(|&ind| entries[ind] == 1)
            .count()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph with adjacency matrix:\n{}", self.adj)
    }
}
