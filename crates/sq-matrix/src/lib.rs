// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Dense square matrices.
//!
//! [`SqMatrix`] is an `n × n` matrix stored as a flat vector in row-major order
//! (`index = row * n + col`). Element access is bounds-checked and every binary
//! operator returns a fresh matrix; only [`SqMatrix::set`] and [`SqMatrix::fill`]
//! mutate in place.
//!
//! ## Operators
//!
//! - Elementwise addition and subtraction of same-size matrices.
//! - Matrix product (`@`), computed with the schoolbook triple loop.
//! - Scalar multiplication, commutative on either side.
//! - Non-negative integer powers by repeated multiplication from the identity.
//!
//! Operators whose right-hand side is only known at runtime go through
//! [`Operand`] and [`BinaryOp`], which resolve every `(operator, operand)` pair
//! explicitly and report undefined combinations as
//! [`MatrixError::UnsupportedOperand`].

pub mod display;
pub mod errors;
pub mod matrix;
pub mod operand;

pub use errors::{MatrixError, MatrixResult};
pub use matrix::SqMatrix;
pub use operand::{BinaryOp, Operand};
