use alloc::vec;
use alloc::vec::Vec;

use crate::error::MatrixError;
use crate::traits::{FloatScalar, Scalar};

use super::{Axis, Matrix};

// Kernel-backed result builders shared by the checked functions below and
// the panicking operators in `ops`.

pub(crate) fn add_grids<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    let mut data = vec![T::zero(); a.data.len()];
    crate::kernel::add_slices_dispatch(&a.data, &b.data, &mut data);
    Matrix {
        data,
        nrows: a.nrows,
        ncols: a.ncols,
    }
}

pub(crate) fn sub_grids<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    let mut data = vec![T::zero(); a.data.len()];
    crate::kernel::sub_slices_dispatch(&a.data, &b.data, &mut data);
    Matrix {
        data,
        nrows: a.nrows,
        ncols: a.ncols,
    }
}

pub(crate) fn mul_grids<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Matrix<T> {
    let (m, k, n) = (a.nrows, a.ncols, b.ncols);
    // Degenerate shapes short-circuit to an all-zero result; the GEMM
    // kernel never sees an empty operand.
    if m == 0 || k == 0 || n == 0 {
        return Matrix::zeros(m, n);
    }
    let mut data = vec![T::zero(); m * n];
    crate::kernel::gemm_dispatch(&a.data, &b.data, &mut data, m, k, n);
    Matrix {
        data,
        nrows: m,
        ncols: n,
    }
}

// ── Checked binary operations ───────────────────────────────────────

/// Element-wise sum: `c[i][j] = a[i][j] + b[i][j]`.
///
/// Errors with [`MatrixError::DimensionMismatch`] unless both operands have
/// the same shape.
///
/// ```
/// use densa::{add, Matrix};
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
/// let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]);
/// let c = add(&a, &b)?;
/// assert_eq!(c, Matrix::from_rows(&[[6.0, 8.0], [10.0, 12.0]]));
/// # Ok::<(), densa::MatrixError>(())
/// ```
pub fn add<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    if (a.nrows, a.ncols) != (b.nrows, b.ncols) {
        return Err(MatrixError::DimensionMismatch {
            lhs: (a.nrows, a.ncols),
            rhs: (b.nrows, b.ncols),
        });
    }
    Ok(add_grids(a, b))
}

/// Element-wise difference: `c[i][j] = a[i][j] - b[i][j]`.
///
/// Errors with [`MatrixError::DimensionMismatch`] unless both operands have
/// the same shape.
pub fn sub<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    if (a.nrows, a.ncols) != (b.nrows, b.ncols) {
        return Err(MatrixError::DimensionMismatch {
            lhs: (a.nrows, a.ncols),
            rhs: (b.nrows, b.ncols),
        });
    }
    Ok(sub_grids(a, b))
}

/// Scale every element: `c[i][j] = alpha * a[i][j]`. No precondition.
pub fn scale<T: Scalar>(a: &Matrix<T>, alpha: T) -> Matrix<T> {
    let mut data = vec![T::zero(); a.data.len()];
    crate::kernel::scale_slices_dispatch(&a.data, alpha, &mut data);
    Matrix {
        data,
        nrows: a.nrows,
        ncols: a.ncols,
    }
}

/// Matrix product: `c = a * b` with shape `(a.nrows, b.ncols)`.
///
/// Errors with [`MatrixError::DimensionMismatch`] unless
/// `a.ncols == b.nrows`. If any of `a.nrows`, `a.ncols`, `b.ncols` is zero
/// the result is a correctly-shaped zero matrix and the multiply kernel is
/// never invoked.
///
/// ```
/// use densa::{mul, Matrix};
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
/// let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]);
/// let c = mul(&a, &b)?;
/// assert_eq!(c, Matrix::from_rows(&[[19.0, 22.0], [43.0, 50.0]]));
/// # Ok::<(), densa::MatrixError>(())
/// ```
pub fn mul<T: Scalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    if a.ncols != b.nrows {
        return Err(MatrixError::DimensionMismatch {
            lhs: (a.nrows, a.ncols),
            rhs: (b.nrows, b.ncols),
        });
    }
    Ok(mul_grids(a, b))
}

/// Matrix "division": `a * b.inverse()`.
///
/// `b` is inverted first, so [`MatrixError::NotSquare`] and
/// [`MatrixError::Singular`] surface from the inversion before the inner
/// dimensions of `a` and `b.inverse()` are checked.
pub fn div<T: FloatScalar>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    let b_inv = b.inverse()?;
    mul(a, &b_inv)
}

// ── Element-wise products and quotients ─────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Element-wise (Hadamard) product: `c[i][j] = a[i][j] * b[i][j]`.
    ///
    /// ```
    /// use densa::Matrix;
    /// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    /// let b = Matrix::from_rows(&[[5.0, 6.0], [7.0, 8.0]]);
    /// let c = a.element_mul(&b)?;
    /// assert_eq!(c, Matrix::from_rows(&[[5.0, 12.0], [21.0, 32.0]]));
    /// # Ok::<(), densa::MatrixError>(())
    /// ```
    pub fn element_mul(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if (self.nrows, self.ncols) != (rhs.nrows, rhs.ncols) {
            return Err(MatrixError::DimensionMismatch {
                lhs: (self.nrows, self.ncols),
                rhs: (rhs.nrows, rhs.ncols),
            });
        }
        let mut data = vec![T::zero(); self.data.len()];
        crate::kernel::mul_slices_dispatch(&self.data, &rhs.data, &mut data);
        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Element-wise quotient: `c[i][j] = a[i][j] / b[i][j]`.
    pub fn element_div(&self, rhs: &Self) -> Result<Self, MatrixError> {
        if (self.nrows, self.ncols) != (rhs.nrows, rhs.ncols) {
            return Err(MatrixError::DimensionMismatch {
                lhs: (self.nrows, self.ncols),
                rhs: (rhs.nrows, rhs.ncols),
            });
        }
        let mut data = vec![T::zero(); self.data.len()];
        crate::kernel::div_slices_dispatch(&self.data, &rhs.data, &mut data);
        Ok(Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Transpose: `(M×N)` → `(N×M)`, `c[j][i] = a[i][j]`.
    ///
    /// Runs through the cache-blocked transpose kernel (SIMD micro-tiles
    /// for `f32`/`f64`), not an element-at-a-time double loop.
    ///
    /// ```
    /// use densa::Matrix;
    /// let a = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// let t = a.transpose();
    /// assert_eq!(t, Matrix::from_rows(&[[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]));
    /// ```
    pub fn transpose(&self) -> Self {
        let mut data = vec![T::zero(); self.data.len()];
        crate::kernel::transpose_dispatch(&self.data, &mut data, self.nrows, self.ncols);
        Matrix {
            data,
            nrows: self.ncols,
            ncols: self.nrows,
        }
    }

    /// Sum along an axis.
    ///
    /// [`Axis::Column`] produces a `1 x ncols` row holding each column's
    /// total (the conventional reduction direction); [`Axis::Row`] produces
    /// an `nrows x 1` column of row totals. Empty axes sum to zero.
    ///
    /// ```
    /// use densa::{Axis, Matrix};
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.sum(Axis::Column), Matrix::from_row(&[4.0, 6.0]));
    /// assert_eq!(m.sum(Axis::Row), Matrix::from_col(&[3.0, 7.0]));
    /// ```
    pub fn sum(&self, axis: Axis) -> Self {
        match axis {
            Axis::Column => {
                // Accumulate row by row so the inner op runs on contiguous
                // slices instead of strided column gathers.
                let mut data = vec![T::zero(); self.ncols];
                for i in 0..self.nrows {
                    let row = &self.data[i * self.ncols..(i + 1) * self.ncols];
                    crate::kernel::add_assign_slices_dispatch(&mut data, row);
                }
                Matrix {
                    data,
                    nrows: 1,
                    ncols: self.ncols,
                }
            }
            Axis::Row => {
                let mut data = Vec::with_capacity(self.nrows);
                for i in 0..self.nrows {
                    let row = &self.data[i * self.ncols..(i + 1) * self.ncols];
                    data.push(crate::kernel::sum_dispatch(row));
                }
                Matrix {
                    data,
                    nrows: self.nrows,
                    ncols: 1,
                }
            }
        }
    }
}

// ── Element-wise transcendentals ────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Element-wise power with a scalar exponent: `c[i][j] = a[i][j]^y`.
    ///
    /// ```
    /// use densa::Matrix;
    /// let m = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]);
    /// let sq = m.powf(2.0);
    /// assert_eq!(sq, Matrix::from_rows(&[[1.0, 4.0], [9.0, 16.0]]));
    /// ```
    pub fn powf(&self, y: T) -> Self {
        Matrix {
            data: crate::vecmath::powf(&self.data, y),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Element-wise exponential: `c[i][j] = e^(a[i][j])`.
    pub fn exp(&self) -> Self {
        Matrix {
            data: crate::vecmath::exp(&self.data),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}
