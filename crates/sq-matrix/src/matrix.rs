// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::errors::{MatrixError, MatrixResult};
use num_traits::{CheckedAdd, CheckedMul, Num, One, Zero};
use serde::{Deserialize, Serialize};
use std::ops::Mul;
use tracing::trace;

/// An `n × n` matrix with row-major storage.
///
/// The storage always holds exactly `n²` elements. This holds for every
/// constructor, including deserialization.
///
/// # Example
///
/// ```
/// use sq_matrix::SqMatrix;
///
/// let mut m = SqMatrix::<f64>::new(2);
/// m.set(0, 1, 3.0).unwrap();
/// assert_eq!(m.get(0, 1).unwrap(), 3.0);
/// assert_eq!(m.shape(), (2, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSqMatrix<T>")]
pub struct SqMatrix<T = f64> {
    n: usize,
    data: Vec<T>,
}

/// Unvalidated wire form of [`SqMatrix`].
#[derive(Deserialize)]
struct RawSqMatrix<T> {
    n: usize,
    data: Vec<T>,
}

impl<T> TryFrom<RawSqMatrix<T>> for SqMatrix<T> {
    type Error = MatrixError;

    fn try_from(raw: RawSqMatrix<T>) -> MatrixResult<Self> {
        let expected = raw.n.checked_mul(raw.n).ok_or(MatrixError::InvalidArgument {
            name: "n",
            value: raw.n.to_string(),
            reason: "n * n overflows",
        })?;
        if raw.data.len() != expected {
            return Err(MatrixError::InvalidArgument {
                name: "data",
                value: format!("{} elements", raw.data.len()),
                reason: "storage length must be n * n",
            });
        }
        Ok(Self {
            n: raw.n,
            data: raw.data,
        })
    }
}

impl<T: Num + Copy> SqMatrix<T> {
    /// Creates an `n × n` matrix filled with zeros.
    pub fn new(n: usize) -> Self {
        Self {
            n,
            data: vec![T::zero(); n * n],
        }
    }

    /// Creates a zero matrix from a signed size.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidArgument`] if `n` is negative.
    pub fn try_new(n: i64) -> MatrixResult<Self> {
        let n = usize::try_from(n).map_err(|_| MatrixError::negative("n", n))?;
        Ok(Self::new(n))
    }

    /// Creates the `n × n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut ret = Self::new(n);
        for i in 0..n {
            ret.data[i * n + i] = T::one();
        }
        ret
    }

    /// Builds a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::ShapeMismatch`] if any row length differs from
    /// the number of rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> MatrixResult<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            if row.len() != n {
                return Err(MatrixError::shape_mismatch("from_rows", n, row.len()));
            }
            data.extend(row);
        }
        Ok(Self { n, data })
    }

    /// Returns the dimension `n`.
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Returns `(n, n)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n, self.n)
    }

    /// The row-major backing storage.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    // Maps (row, col) to the position in `data`.
    fn index_of(&self, row: usize, col: usize) -> MatrixResult<usize> {
        if row >= self.n || col >= self.n {
            return Err(MatrixError::OutOfBounds {
                row,
                col,
                n: self.n,
            });
        }
        Ok(row * self.n + col)
    }

    /// Returns the element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> MatrixResult<T> {
        let ind = self.index_of(row, col)?;
        Ok(self.data[ind])
    }

    /// Stores `value` at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> MatrixResult<()> {
        let ind = self.index_of(row, col)?;
        self.data[ind] = value;
        Ok(())
    }

    /// Returns row `row` as a slice.
    pub fn row(&self, row: usize) -> MatrixResult<&[T]> {
        let start = self.index_of(row, 0)?;
        Ok(&self.data[start..start + self.n])
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    fn check_shape(&self, other: &Self, op: &'static str) -> MatrixResult<()> {
        if self.n != other.n {
            return Err(MatrixError::shape_mismatch(op, self.n, other.n));
        }
        Ok(())
    }

    /// Elementwise sum.
    pub fn add(&self, other: &Self) -> MatrixResult<Self> {
        self.check_shape(other, "add")?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Elementwise difference.
    pub fn subtract(&self, other: &Self) -> MatrixResult<Self> {
        self.check_shape(other, "subtract")?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    fn zip_with(&self, other: &Self, f: impl Fn(T, T) -> T) -> Self {
        Self {
            n: self.n,
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    /// Matrix product `self @ other`.
    ///
    /// Only same-size square products are supported.
    pub fn matmul(&self, other: &Self) -> MatrixResult<Self> {
        self.check_shape(other, "matmul")?;
        Ok(self.product(other))
    }

    // Schoolbook product; callers guarantee equal shapes.
    fn product(&self, other: &Self) -> Self {
        let n = self.n;
        let mut ret = Self::new(n);
        for row in 0..n {
            for col in 0..n {
                let mut s = T::zero();
                for k in 0..n {
                    s = s + self.data[row * n + k] * other.data[k * n + col];
                }
                ret.data[row * n + col] = s;
            }
        }
        ret
    }

    /// Multiplies every element by `value`.
    pub fn scale(&self, value: T) -> Self {
        Self {
            n: self.n,
            data: self.data.iter().map(|&x| value * x).collect(),
        }
    }

    /// Raises the matrix to the `k`-th power.
    ///
    /// Starts from the identity and multiplies by `self` `k` times, so this
    /// costs `k` matrix products. `pow(0)` is the identity.
    pub fn pow(&self, k: u32) -> Self {
        trace!(n = self.n, k, "raising matrix to power");
        let mut ret = Self::identity(self.n);
        for _ in 0..k {
            ret = ret.product(self);
        }
        ret
    }

    /// [`SqMatrix::pow`] for a signed exponent.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidArgument`] if `k` is negative or does not
    /// fit in a `u32`.
    pub fn try_pow(&self, k: i64) -> MatrixResult<Self> {
        Ok(self.pow(MatrixError::exponent(k)?))
    }

    /// Converts every element with `f`, e.g. to widen the element type.
    pub fn map<U: Num + Copy>(&self, f: impl Fn(T) -> U) -> SqMatrix<U> {
        SqMatrix {
            n: self.n,
            data: self.data.iter().map(|&x| f(x)).collect(),
        }
    }

    /// True if every entry is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(Zero::is_zero)
    }

    /// True if this is the identity matrix.
    pub fn is_identity(&self) -> bool {
        self.data.iter().enumerate().all(|(i, x)| {
            if i / self.n == i % self.n {
                x.is_one()
            } else {
                x.is_zero()
            }
        })
    }
}

/// Products that report overflow instead of wrapping or panicking.
impl<T: Num + Copy + CheckedAdd + CheckedMul> SqMatrix<T> {
    /// [`SqMatrix::matmul`] with overflow checking.
    ///
    /// # Errors
    ///
    /// [`MatrixError::ShapeMismatch`] as for `matmul`, and
    /// [`MatrixError::Overflow`] if any entry of the product does not fit in `T`.
    pub fn checked_matmul(&self, other: &Self) -> MatrixResult<Self> {
        self.check_shape(other, "matmul")?;
        self.checked_product(other, "matmul")
    }

    fn checked_product(&self, other: &Self, op: &'static str) -> MatrixResult<Self> {
        let n = self.n;
        let mut ret = Self::new(n);
        for row in 0..n {
            for col in 0..n {
                let mut s = T::zero();
                for k in 0..n {
                    s = self.data[row * n + k]
                        .checked_mul(&other.data[k * n + col])
                        .and_then(|p| s.checked_add(&p))
                        .ok_or(MatrixError::Overflow { op })?;
                }
                ret.data[row * n + col] = s;
            }
        }
        Ok(ret)
    }

    /// [`SqMatrix::pow`] with overflow checking.
    pub fn checked_pow(&self, k: u32) -> MatrixResult<Self> {
        trace!(n = self.n, k, "raising matrix to power, checked");
        let mut ret = Self::identity(self.n);
        for _ in 0..k {
            ret = ret.checked_product(self, "pow")?;
        }
        Ok(ret)
    }

    /// [`SqMatrix::checked_pow`] for a signed exponent.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidArgument`] if `k` is negative or does not fit in a
    /// `u32`, [`MatrixError::Overflow`] if the power does not fit in `T`.
    pub fn try_checked_pow(&self, k: i64) -> MatrixResult<Self> {
        self.checked_pow(MatrixError::exponent(k)?)
    }
}

impl<T: Num + Copy> Mul<T> for &SqMatrix<T> {
    type Output = SqMatrix<T>;

    fn mul(self, value: T) -> SqMatrix<T> {
        self.scale(value)
    }
}
