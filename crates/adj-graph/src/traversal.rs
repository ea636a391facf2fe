// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Depth-first traversal.
//!
//! Exploration marks a vertex visited the moment it is discovered, before its
//! neighbors are scanned, so cycles never revisit a vertex. It runs on an
//! explicit stack of frames instead of recursion. Each frame holds a vertex,
//! its neighbor list and a cursor into that list, which yields the same
//! discovery order as the recursive formulation without growing the call stack.
//!
//! Neighbors are scanned in ascending order. Callers should treat that order
//! as implementation-defined: visited sets and component partitions do not
//! depend on it.

use crate::errors::{GraphError, GraphResult};
use crate::graph::Graph;
use tracing::{debug, trace};

struct Frame {
    pending: Vec<usize>,
    cursor: usize,
}

impl Frame {
    fn enter(graph: &Graph, vertex: usize) -> GraphResult<Self> {
        Ok(Self {
            pending: graph.neighbors(vertex)?.into_iter().collect(),
            cursor: 0,
        })
    }
}

/// Marks every vertex reachable from `start` in `visited`.
///
/// `visited` is caller-owned state with one entry per node. Vertices already
/// marked are treated as explored and are not entered again; `start` itself
/// is always entered.
///
/// # Errors
///
/// - `OutOfBounds` if `start` is not a node of `graph`.
/// - [`GraphError::VisitedLength`] if `visited.len()` differs from the node
///   count.
pub fn explore(graph: &Graph, start: usize, visited: &mut [bool]) -> GraphResult<()> {
    explore_with(graph, start, visited, |_| {})
}

/// Like [`explore`], calling `on_discover` for each vertex as it is marked,
/// starting with `start`.
pub fn explore_with<F>(
    graph: &Graph,
    start: usize,
    visited: &mut [bool],
    mut on_discover: F,
) -> GraphResult<()>
where
    F: FnMut(usize),
{
    if visited.len() != graph.node_count() {
        return Err(GraphError::VisitedLength {
            expected: graph.node_count(),
            actual: visited.len(),
        });
    }

    let root = Frame::enter(graph, start)?;
    debug!(start, "exploring");
    visited[start] = true;
    on_discover(start);

    let mut stack = vec![root];
    while let Some(frame) = stack.last_mut() {
        let Some(&next) = frame.pending.get(frame.cursor) else {
            stack.pop();
            continue;
        };
        frame.cursor += 1;

        if visited[next] {
            continue;
        }
        visited[next] = true;
        trace!(vertex = next, depth = stack.len(), "discovered");
        on_discover(next);
        stack.push(Frame::enter(graph, next)?);
    }

    Ok(())
}

/// Returns which vertices are reachable from `start`.
pub fn reachable(graph: &Graph, start: usize) -> GraphResult<Vec<bool>> {
    let mut visited = vec![false; graph.node_count()];
    explore(graph, start, &mut visited)?;
    Ok(visited)
}

/// Component labeling produced by [`connected_components`].
///
/// Labels run from `1` to `count`, in the order components are first reached
/// by a scan over vertices `0..n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    labels: Vec<usize>,
    count: usize,
}

impl Components {
    /// Component id of every vertex, indexed by vertex.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Number of components.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn label(&self, vertex: usize) -> Option<usize> {
        self.labels.get(vertex).copied()
    }

    /// Vertices labeled `id`, ascending.
    pub fn members(&self, id: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|&(_, &label)| label == id)
            .map(|(v, _)| v)
            .collect()
    }

    /// All components as vertex lists, ordered by id.
    pub fn groups(&self) -> Vec<Vec<usize>> {
        (1..=self.count).map(|id| self.members(id)).collect()
    }

    /// True if `a` and `b` are both vertices and share a component.
    pub fn same_component(&self, a: usize, b: usize) -> bool {
        match (self.label(a), self.label(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// True if the graph has at most one component.
    pub fn is_connected(&self) -> bool {
        self.count <= 1
    }
}

/// Partitions the vertices of `graph` into connected components.
///
/// Scans vertices in index order. Each vertex not yet visited opens a new
/// component: the counter is incremented and every vertex reached from it is
/// labeled with the counter's value.
pub fn connected_components(graph: &Graph) -> GraphResult<Components> {
    let n = graph.node_count();
    let mut visited = vec![false; n];
    let mut labels = vec![0; n];
    let mut count = 0;

    for v in 0..n {
        if visited[v] {
            continue;
        }
        count += 1;
        explore_with(graph, v, &mut visited, |u| labels[u] = count)?;
        debug!(component = count, root = v, "component found");
    }

    Ok(Components { labels, count })
}
