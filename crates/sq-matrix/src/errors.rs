// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for square matrix operations.

use thiserror::Error;

/// Main error type for matrix operations.
///
/// Every fallible operation fails before touching the receiver, so a matrix
/// that produced one of these errors is left exactly as it was.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// A size or exponent argument outside its domain.
    #[error("Invalid argument: {name} = {value} ({reason})")]
    InvalidArgument {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    /// Row or column index outside `0..n`.
    #[error("Index ({row}, {col}) out of bounds, both should be in 0..{n}")]
    OutOfBounds { row: usize, col: usize, n: usize },

    /// Binary operator applied to matrices of different sizes.
    #[error("Shape mismatch in {op}: {left}x{left} vs {right}x{right}")]
    ShapeMismatch {
        op: &'static str,
        left: usize,
        right: usize,
    },

    /// The operator is not defined for this kind of operand.
    #[error("Unsupported operand for {op}: {operand}")]
    UnsupportedOperand {
        op: &'static str,
        operand: &'static str,
    },

    /// An element of the result does not fit in the element type.
    #[error("Arithmetic overflow in {op}")]
    Overflow { op: &'static str },
}

/// Result type alias for matrix operations
pub type MatrixResult<T> = Result<T, MatrixError>;

impl MatrixError {
    /// Create an error for a value that must be a non-negative integer.
    pub fn negative(name: &'static str, value: i64) -> Self {
        MatrixError::InvalidArgument {
            name,
            value: value.to_string(),
            reason: "must be a non-negative integer",
        }
    }

    /// Converts a signed exponent to `u32`.
    pub fn exponent(k: i64) -> MatrixResult<u32> {
        if k < 0 {
            return Err(Self::negative("k", k));
        }
        u32::try_from(k).map_err(|_| MatrixError::InvalidArgument {
            name: "k",
            value: k.to_string(),
            reason: "exceeds u32::MAX",
        })
    }

    /// Create a shape mismatch error for operator `op`.
    pub fn shape_mismatch(op: &'static str, left: usize, right: usize) -> Self {
        MatrixError::ShapeMismatch { op, left, right }
    }
}
