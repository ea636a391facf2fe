// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for graph construction and traversal.

use sq_matrix::MatrixError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Errors from the adjacency matrix, most commonly `OutOfBounds` for a
    /// node index outside `0..n`.
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// Caller-supplied traversal state does not cover every node.
    #[error("Visited state has {actual} entries, graph has {expected} nodes")]
    VisitedLength { expected: usize, actual: usize },

    /// Invalid graph description.
    #[error("Invalid graph configuration: {message}")]
    Config { message: String },
}

/// Result type alias for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

impl GraphError {
    pub fn config(message: impl Into<String>) -> Self {
        GraphError::Config {
            message: message.into(),
        }
    }

    /// True if this error reports a node index outside the graph.
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, GraphError::Matrix(MatrixError::OutOfBounds { .. }))
    }
}
