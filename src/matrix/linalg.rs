use alloc::vec;

use crate::error::MatrixError;
use crate::linalg::lu::{lu_factor, lu_invert};
use crate::traits::FloatScalar;

use super::Matrix;

// The factorization primitives are column-major; the row-major grid handed
// to them is, read column-major, the transpose. No data is ever reshuffled:
// `det(A^T) = det(A)`, and inverting the transpose then reading the buffer
// back row-major yields `A^-1` directly. Only the leading dimension is
// passed to reconcile the layouts.

impl<T: FloatScalar> Matrix<T> {
    /// The inverse, computed by LU factorization with partial pivoting of a
    /// private copy of the grid followed by an in-place inversion of the
    /// factors.
    ///
    /// Errors with [`MatrixError::NotSquare`] for a rectangular matrix and
    /// [`MatrixError::Singular`] when the factorization meets an exactly
    /// zero pivot; no result is ever produced from a singular input.
    ///
    /// ```
    /// use densa::Matrix;
    /// let a = Matrix::from_rows(&[[4.0_f64, 7.0], [2.0, 6.0]]);
    /// let inv = a.inverse()?;
    /// assert!((inv[(0, 0)] - 0.6).abs() < 1e-12);
    /// assert!((inv[(0, 1)] + 0.7).abs() < 1e-12);
    /// # Ok::<(), densa::MatrixError>(())
    /// ```
    pub fn inverse(&self) -> Result<Self, MatrixError> {
        if self.nrows != self.ncols {
            return Err(MatrixError::NotSquare {
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        let n = self.nrows;
        let lda = n.max(1);
        let mut work = self.data.clone();
        let mut ipiv = vec![0usize; n];

        if lu_factor(&mut work, n, n, lda, &mut ipiv) != 0 {
            return Err(MatrixError::Singular);
        }
        let mut scratch = vec![T::zero(); n * n];
        if lu_invert(&mut work, n, lda, &ipiv, &mut scratch) != 0 {
            return Err(MatrixError::Singular);
        }

        Ok(Matrix {
            data: work,
            nrows: n,
            ncols: n,
        })
    }

    /// The determinant, or `None` when the LU factorization reports a zero
    /// pivot (the "determinant undefined" signal for singular input; the
    /// factorization itself never fails).
    ///
    /// The value is the product of the U diagonal with the sign flipped at
    /// every factorization step `i` whose recorded 1-based pivot row differs
    /// from `i + 1`, mirroring the partial-pivoting swap record exactly.
    /// A 0x0 matrix has determinant one (the empty product).
    ///
    /// ```
    /// use densa::Matrix;
    /// let a = Matrix::from_rows(&[[4.0_f64, 7.0], [2.0, 6.0]]);
    /// assert!((a.det().unwrap() - 10.0).abs() < 1e-12);
    ///
    /// let singular = Matrix::from_rows(&[[1.0_f64, 2.0], [2.0, 4.0]]);
    /// assert_eq!(singular.det(), None);
    /// ```
    pub fn det(&self) -> Option<T> {
        // Column-major view of the row-major grid: ncols rows, nrows cols.
        let m = self.ncols;
        let n = self.nrows;
        let lda = m.max(1);
        let mut work = self.data.clone();
        let mut ipiv = vec![0usize; m.min(n)];

        if lu_factor(&mut work, m, n, lda, &mut ipiv) != 0 {
            return None;
        }

        let mut det = T::one();
        for (i, &p) in ipiv.iter().enumerate() {
            let d = work[i * self.ncols + i];
            if p != i + 1 {
                det = -det * d;
            } else {
                det = det * d;
            }
        }
        Some(det)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(a: f64, b: f64, tol: f64) {
        assert!((a - b).abs() < tol, "{a} not within {tol} of {b}");
    }

    #[test]
    fn inverse_2x2_literal() {
        let a = Matrix::from_rows(&[[4.0_f64, 7.0], [2.0, 6.0]]);
        let inv = a.inverse().unwrap();
        let expected = [[0.6, -0.7], [-0.2, 0.4]];
        for i in 0..2 {
            for j in 0..2 {
                assert_near(inv[(i, j)], expected[i][j], 1e-9);
            }
        }
    }

    #[test]
    fn inverse_times_original_is_identity() {
        let a = Matrix::from_rows(&[[2.0_f64, 1.0, 1.0], [1.0, 3.0, 2.0], [1.0, 0.0, 0.0]]);
        let inv = a.inverse().unwrap();
        let prod = &a * &inv;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_near(prod[(i, j)], expected, 1e-12);
            }
        }
    }

    #[test]
    fn inverse_f32() {
        let a = Matrix::from_rows(&[[4.0_f32, 7.0], [2.0, 6.0]]);
        let inv = a.inverse().unwrap();
        assert!((inv[(0, 0)] - 0.6).abs() < 1e-5);
        assert!((inv[(1, 1)] - 0.4).abs() < 1e-5);
    }

    #[test]
    fn inverse_not_square() {
        let a = Matrix::<f64>::zeros(2, 3);
        assert_eq!(
            a.inverse(),
            Err(MatrixError::NotSquare { nrows: 2, ncols: 3 })
        );
    }

    #[test]
    fn inverse_singular() {
        let a = Matrix::from_rows(&[[1.0_f64, 2.0], [2.0, 4.0]]);
        assert_eq!(a.inverse(), Err(MatrixError::Singular));
    }

    #[test]
    fn inverse_empty_matrix() {
        let a = Matrix::<f64>::zeros(0, 0);
        let inv = a.inverse().unwrap();
        assert_eq!((inv.nrows(), inv.ncols()), (0, 0));
    }

    #[test]
    fn det_2x2_literal() {
        // The pivoted elimination divides by 7, so the product is within
        // an ulp of 10 rather than exactly 10
        let a = Matrix::from_rows(&[[4.0_f64, 7.0], [2.0, 6.0]]);
        assert_near(a.det().unwrap(), 10.0, 1e-12);
    }

    #[test]
    fn det_singular_is_none() {
        let a = Matrix::from_rows(&[[1.0_f64, 2.0], [2.0, 4.0]]);
        assert_eq!(a.det(), None);
    }

    #[test]
    fn det_identity() {
        assert_eq!(Matrix::<f64>::eye(4).det(), Some(1.0));
    }

    #[test]
    fn det_empty_is_one() {
        // Empty product over an empty pivot record
        assert_eq!(Matrix::<f64>::zeros(0, 0).det(), Some(1.0));
    }

    #[test]
    fn det_triangular_no_swaps() {
        // Pivots arrive in order: no swaps, plain diagonal product
        let a = Matrix::from_rows(&[[2.0_f64, 1.0, 1.0], [0.0, 3.0, 1.0], [0.0, 0.0, 4.0]]);
        let d = a.det().unwrap();
        assert_near(d, 24.0, 1e-12);
    }

    #[test]
    fn det_with_one_swap_keeps_sign() {
        // Partial pivoting performs exactly one row swap here; the sign
        // flip from the swap must cancel against the negated pivot so the
        // result stays +12
        let a = Matrix::from_rows(&[[1.0_f64, 2.0, 0.0], [0.0, 3.0, 1.0], [0.0, 0.0, 4.0]]);
        let d = a.det().unwrap();
        assert_near(d, 12.0, 1e-12);
    }

    #[test]
    fn det_exchange_matrix_is_minus_one() {
        // One swap, identity diagonal afterwards
        let a = Matrix::from_rows(&[[0.0_f64, 1.0], [1.0, 0.0]]);
        assert_eq!(a.det(), Some(-1.0));
    }

    #[test]
    fn det_f32() {
        let a = Matrix::from_rows(&[[4.0_f32, 7.0], [2.0, 6.0]]);
        let d = a.det().unwrap();
        assert!((d - 10.0).abs() < 1e-4);
    }

    #[test]
    fn det_zero_row_is_none() {
        // A zero row makes the factorization report a zero pivot; the
        // computation completes without any fatal path
        let a = Matrix::from_rows(&[[1.0_f64, 2.0, 3.0], [0.0, 0.0, 0.0], [4.0, 5.0, 6.0]]);
        assert_eq!(a.det(), None);
    }
}
