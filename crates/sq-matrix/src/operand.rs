// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Explicit operator dispatch over `{Matrix, Scalar}` operands.

use crate::errors::{MatrixError, MatrixResult};
use crate::matrix::SqMatrix;
use num_traits::Num;
use std::fmt;

/// Right-hand side of a binary matrix operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand<T> {
    Matrix(SqMatrix<T>),
    Scalar(T),
}

impl<T> Operand<T> {
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Matrix(_) => "matrix",
            Operand::Scalar(_) => "scalar",
        }
    }
}

impl<T> From<SqMatrix<T>> for Operand<T> {
    fn from(m: SqMatrix<T>) -> Self {
        Operand::Matrix(m)
    }
}

/// Binary matrix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`: scalar multiplication, or the matrix product for a matrix operand
    Multiply,
    /// `@`
    MatMul,
}

impl BinaryOp {
    pub fn name(&self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Subtract => "subtract",
            BinaryOp::Multiply => "multiply",
            BinaryOp::MatMul => "matmul",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<T: Num + Copy> SqMatrix<T> {
    /// Computes `self <op> rhs`.
    ///
    /// # Errors
    ///
    /// - [`MatrixError::ShapeMismatch`] for matrix operands of another size.
    /// - [`MatrixError::UnsupportedOperand`] for `Add`, `Subtract` and `MatMul`
    ///   with a scalar operand.
    pub fn apply(&self, op: BinaryOp, rhs: &Operand<T>) -> MatrixResult<Self> {
        match (op, rhs) {
            (BinaryOp::Add, Operand::Matrix(m)) => self.add(m),
            (BinaryOp::Subtract, Operand::Matrix(m)) => self.subtract(m),
            (BinaryOp::Multiply | BinaryOp::MatMul, Operand::Matrix(m)) => self.matmul(m),
            (BinaryOp::Multiply, Operand::Scalar(s)) => Ok(self.scale(*s)),
            (BinaryOp::Add | BinaryOp::Subtract | BinaryOp::MatMul, Operand::Scalar(_)) => {
                Err(MatrixError::UnsupportedOperand {
                    op: op.name(),
                    operand: rhs.kind(),
                })
            }
        }
    }
}

impl<T: Num + Copy> Operand<T> {
    /// Computes `self * rhs`, with the operand on the left.
    ///
    /// Scalars commute, so `Scalar(s).left_multiply(&m) == m.scale(s)`.
    pub fn left_multiply(&self, rhs: &SqMatrix<T>) -> MatrixResult<SqMatrix<T>> {
        match self {
            Operand::Matrix(m) => m.matmul(rhs),
            Operand::Scalar(s) => Ok(rhs.scale(*s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m() -> SqMatrix<i32> {
        SqMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap()
    }

    #[test]
    fn test_matrix_operands() {
        let a = m();
        let b = Operand::from(SqMatrix::identity(2));

        assert_eq!(a.apply(BinaryOp::Add, &b).unwrap(), a.add(&SqMatrix::identity(2)).unwrap());
        assert_eq!(
            a.apply(BinaryOp::Subtract, &b).unwrap(),
            SqMatrix::from_rows(vec![vec![0, 2], vec![3, 3]]).unwrap()
        );
        assert_eq!(a.apply(BinaryOp::MatMul, &b).unwrap(), a);
        assert_eq!(a.apply(BinaryOp::Multiply, &b).unwrap(), a);
    }

    #[test]
    fn test_scalar_operands() {
        let a = m();
        let two = Operand::Scalar(2);

        let right = a.apply(BinaryOp::Multiply, &two).unwrap();
        let left = two.left_multiply(&a).unwrap();
        assert_eq!(right, left);
        assert_eq!(right.as_slice(), &[2, 4, 6, 8]);

        for op in [BinaryOp::Add, BinaryOp::Subtract, BinaryOp::MatMul] {
            assert_eq!(
                a.apply(op, &two),
                Err(MatrixError::UnsupportedOperand {
                    op: op.name(),
                    operand: "scalar",
                })
            );
        }
    }

    #[test]
    fn test_shape_mismatch_through_dispatch() {
        let a = m();
        let big = Operand::Matrix(SqMatrix::<i32>::new(3));
        for op in [BinaryOp::Add, BinaryOp::Subtract, BinaryOp::MatMul, BinaryOp::Multiply] {
            assert!(matches!(
                a.apply(op, &big),
                Err(MatrixError::ShapeMismatch { left: 2, right: 3, .. })
            ));
        }
        assert!(matches!(
            big.left_multiply(&a),
            Err(MatrixError::ShapeMismatch { left: 3, right: 2, .. })
        ));
    }
}
