mod linalg;
mod math;
mod ops;
mod slice;
mod util;

pub use math::{add, div, mul, scale, sub};
pub use slice::Rows;

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::error::MatrixError;
use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Reduction direction for [`Matrix::sum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Sum across each row, producing an `nrows x 1` column of row totals.
    Row,
    /// Sum down each column, producing a `1 x ncols` row of column totals.
    /// This is the conventional direction when none is called out.
    Column,
}

/// Dense heap-allocated matrix with row-major storage.
///
/// Element `(r, c)` lives at `data[r * ncols + c]`; the backing buffer always
/// holds exactly `nrows * ncols` elements. All arithmetic produces a fresh
/// matrix and never aliases or mutates its operands; the only in-place
/// mutation is element assignment through [`set`](Matrix::set) or
/// [`IndexMut`].
///
/// Generic over any [`Scalar`]; operations that need floating-point math
/// (`inverse`, `det`, `powf`, `exp`) are further bounded on
/// [`FloatScalar`](crate::FloatScalar) and exist for `f32` and `f64`.
///
/// # Examples
///
/// ```
/// use densa::Matrix;
///
/// let a = Matrix::from_rows(&[[1.0_f64, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let id = Matrix::<f64>::eye(2);
/// assert_eq!(&a * &id, a);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create an `nrows x ncols` matrix filled with `value`.
    ///
    /// ```
    /// use densa::Matrix;
    /// let m = Matrix::fill(2, 3, 7.0_f64);
    /// assert_eq!(m[(0, 0)], 7.0);
    /// assert_eq!(m[(1, 2)], 7.0);
    /// ```
    pub fn fill(nrows: usize, ncols: usize, value: T) -> Self {
        Self {
            data: vec![value; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `nrows x ncols` matrix of zeros.
    ///
    /// ```
    /// use densa::Matrix;
    /// let m = Matrix::<f64>::zeros(2, 3);
    /// assert_eq!(m[(1, 2)], 0.0);
    /// ```
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self::fill(nrows, ncols, T::zero())
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// use densa::Matrix;
    /// let id = Matrix::<f64>::eye(3);
    /// assert_eq!(id[(0, 0)], 1.0);
    /// assert_eq!(id[(0, 1)], 0.0);
    /// assert_eq!(id[(2, 2)], 1.0);
    /// ```
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        m
    }

    /// Create a matrix from an owned `Vec<T>` in row-major order.
    ///
    /// Panics if `data.len() != nrows * ncols`.
    ///
    /// ```
    /// use densa::Matrix;
    /// let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m[(0, 1)], 2.0);
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn from_vec(nrows: usize, ncols: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            nrows * ncols,
            "vec length {} does not match {}x{} matrix",
            data.len(),
            nrows,
            ncols,
        );
        Self { data, nrows, ncols }
    }

    /// Create a matrix from nested rows.
    ///
    /// Every row must have the same length; ragged input panics before any
    /// element is copied. An empty slice gives a 0x0 matrix.
    ///
    /// ```
    /// use densa::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m.ncols(), 3);
    /// assert_eq!(m[(1, 2)], 6.0);
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Self {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(
                row.as_ref().len(),
                ncols,
                "ragged rows: row {} has length {}, expected {}",
                i,
                row.as_ref().len(),
                ncols,
            );
        }
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        Self { data, nrows, ncols }
    }

    /// Create a `1 x n` matrix from a single row.
    ///
    /// ```
    /// use densa::Matrix;
    /// let m = Matrix::from_row(&[1.0, 2.0, 3.0]);
    /// assert_eq!(m.nrows(), 1);
    /// assert_eq!(m.ncols(), 3);
    /// ```
    pub fn from_row(row: &[T]) -> Self {
        Self {
            data: row.to_vec(),
            nrows: 1,
            ncols: row.len(),
        }
    }

    /// Create an `n x 1` matrix from a single column.
    ///
    /// ```
    /// use densa::Matrix;
    /// let m = Matrix::from_col(&[1.0, 2.0, 3.0]);
    /// assert_eq!(m.nrows(), 3);
    /// assert_eq!(m.ncols(), 1);
    /// ```
    pub fn from_col(col: &[T]) -> Self {
        Self {
            data: col.to_vec(),
            nrows: col.len(),
            ncols: 1,
        }
    }
}

impl<T> Matrix<T> {
    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use densa::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, f: impl Fn(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }
}

// ── Checked element access ──────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Read element `(row, col)`, or [`MatrixError::IndexOutOfBounds`].
    ///
    /// ```
    /// use densa::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.get(1, 0), Ok(3.0));
    /// assert!(m.get(2, 0).is_err());
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Result<T, MatrixError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        Ok(self.data[row * self.ncols + col])
    }

    /// Overwrite element `(row, col)`, or [`MatrixError::IndexOutOfBounds`].
    ///
    /// ```
    /// use densa::Matrix;
    /// let mut m = Matrix::<f64>::zeros(2, 2);
    /// m.set(0, 1, 5.0)?;
    /// assert_eq!(m[(0, 1)], 5.0);
    /// # Ok::<(), densa::MatrixError>(())
    /// ```
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        if row >= self.nrows || col >= self.ncols {
            return Err(MatrixError::IndexOutOfBounds {
                row,
                col,
                nrows: self.nrows,
                ncols: self.ncols,
            });
        }
        self.data[row * self.ncols + col] = value;
        Ok(())
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T: Scalar> MatrixRef<T> for Matrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T: Scalar> MatrixMut<T> for Matrix<T> {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    /// Both coordinates are checked; a bad column must not silently read
    /// into the next row of the flat buffer.
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols,
        );
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.nrows && col < self.ncols,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols,
        );
        &mut self.data[row * self.ncols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill() {
        let m = Matrix::fill(2, 3, 7.0_f64);
        assert_eq!(m.nrows(), 2);
        assert_eq!(m.ncols(), 3);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(m[(i, j)], 7.0);
            }
        }
    }

    #[test]
    fn zeros() {
        let m = Matrix::<f64>::zeros(3, 4);
        for i in 0..3 {
            for j in 0..4 {
                assert_eq!(m[(i, j)], 0.0);
            }
        }
    }

    #[test]
    fn eye() {
        let m = Matrix::<f64>::eye(3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(m[(i, j)], expected);
            }
        }
    }

    #[test]
    fn from_vec_row_major() {
        let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(m[(0, 0)], 1);
        assert_eq!(m[(0, 2)], 3);
        assert_eq!(m[(1, 0)], 4);
        assert_eq!(m[(1, 2)], 6);
    }

    #[test]
    #[should_panic(expected = "vec length")]
    fn from_vec_wrong_length() {
        let _ = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn from_rows() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 2);
        assert_eq!(m[(2, 1)], 6.0);
    }

    #[test]
    #[should_panic(expected = "ragged rows")]
    fn from_rows_ragged() {
        let rows: [&[f64]; 2] = [&[1.0, 2.0], &[3.0]];
        let _ = Matrix::from_rows(&rows);
    }

    #[test]
    fn from_rows_empty() {
        let m = Matrix::<f64>::from_rows(&[] as &[[f64; 0]]);
        assert_eq!(m.nrows(), 0);
        assert_eq!(m.ncols(), 0);
    }

    #[test]
    fn from_row_col() {
        let r = Matrix::from_row(&[1.0, 2.0, 3.0]);
        assert_eq!((r.nrows(), r.ncols()), (1, 3));
        assert_eq!(r[(0, 2)], 3.0);

        let c = Matrix::from_col(&[1.0, 2.0, 3.0]);
        assert_eq!((c.nrows(), c.ncols()), (3, 1));
        assert_eq!(c[(2, 0)], 3.0);
    }

    #[test]
    fn from_fn() {
        let m = Matrix::from_fn(2, 3, |i, j| (i * 3 + j) as i64);
        assert_eq!(m[(0, 0)], 0);
        assert_eq!(m[(1, 2)], 5);
    }

    #[test]
    fn get_set_checked() {
        let mut m = Matrix::<f64>::zeros(2, 2);
        assert_eq!(m.set(1, 1, 9.0), Ok(()));
        assert_eq!(m.get(1, 1), Ok(9.0));

        assert_eq!(
            m.get(2, 0),
            Err(MatrixError::IndexOutOfBounds {
                row: 2,
                col: 0,
                nrows: 2,
                ncols: 2,
            })
        );
        assert!(m.set(0, 2, 1.0).is_err());
        // A failed set leaves the matrix untouched
        assert_eq!(m.get(0, 0), Ok(0.0));
    }

    #[test]
    fn index_mut() {
        let mut m = Matrix::<f64>::zeros(2, 2);
        m[(0, 1)] = 5.0;
        assert_eq!(m[(0, 1)], 5.0);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn index_col_out_of_bounds() {
        // (0, 2) on a 2x2 must panic, not alias element (1, 0)
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
        let _ = m[(0, 2)];
    }

    #[test]
    fn equality_includes_shape() {
        let a = Matrix::from_vec(2, 3, vec![1.0; 6]);
        let b = Matrix::from_vec(3, 2, vec![1.0; 6]);
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn matrix_ref_trait() {
        fn trace<T: Scalar>(m: &impl MatrixRef<T>) -> T {
            let mut sum = T::zero();
            for i in 0..m.nrows().min(m.ncols()) {
                sum = sum + m.as_slice()[i * m.ncols() + i];
            }
            sum
        }
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(trace(&m), 5.0);
    }

    #[test]
    fn matrix_mut_trait() {
        fn clear_first<T: Scalar>(m: &mut impl MatrixMut<T>) {
            m.as_mut_slice()[0] = T::zero();
        }
        let mut m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
        clear_first(&mut m);
        assert_eq!(m[(0, 0)], 0.0);
    }
}
