use alloc::vec::Vec;

use crate::traits::Scalar;

use super::Matrix;

// ── Slice access ────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// View the entire matrix as a flat slice in row-major order.
    ///
    /// ```
    /// use densa::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// View the entire matrix as a mutable flat slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Borrow row `i` as a contiguous slice.
    ///
    /// Panics if `i >= nrows`.
    ///
    /// ```
    /// use densa::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// assert_eq!(m.row_slice(1), &[4.0, 5.0, 6.0]);
    /// ```
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[T] {
        assert!(i < self.nrows, "row {} out of range for {} rows", i, self.nrows);
        let start = i * self.ncols;
        &self.data[start..start + self.ncols]
    }

    /// Borrow row `i` as a mutable contiguous slice.
    ///
    /// Panics if `i >= nrows`.
    #[inline]
    pub fn row_slice_mut(&mut self, i: usize) -> &mut [T] {
        assert!(i < self.nrows, "row {} out of range for {} rows", i, self.nrows);
        let start = i * self.ncols;
        &mut self.data[start..start + self.ncols]
    }

    /// Iterate over all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Iterate over the rows, yielding one `&[T]` slice per row.
    ///
    /// Also available through `IntoIterator` on `&Matrix<T>`, so a matrix
    /// can be walked directly in a `for` loop:
    ///
    /// ```
    /// use densa::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    /// let mut sums = Vec::new();
    /// for row in &m {
    ///     sums.push(row.iter().sum::<f64>());
    /// }
    /// assert_eq!(sums, vec![3.0, 7.0]);
    /// ```
    #[inline]
    pub fn rows(&self) -> Rows<'_, T> {
        Rows {
            data: &self.data,
            ncols: self.ncols,
            next: 0,
            nrows: self.nrows,
        }
    }
}

// ── Row / column copies ─────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Copy row `i` into an owned `Vec`.
    ///
    /// Panics if `i >= nrows`.
    ///
    /// ```
    /// use densa::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.row(0), vec![1.0, 2.0]);
    /// ```
    pub fn row(&self, i: usize) -> Vec<T> {
        self.row_slice(i).to_vec()
    }

    /// Copy column `j` into an owned `Vec` (strided gather).
    ///
    /// Panics if `j >= ncols`.
    ///
    /// ```
    /// use densa::Matrix;
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m.col(1), vec![2.0, 4.0]);
    /// ```
    pub fn col(&self, j: usize) -> Vec<T> {
        assert!(j < self.ncols, "column {} out of range for {} columns", j, self.ncols);
        (0..self.nrows)
            .map(|i| self.data[i * self.ncols + j])
            .collect()
    }
}

// ── Row iterator ────────────────────────────────────────────────────

/// Iterator over the rows of a [`Matrix`], created by [`Matrix::rows`].
///
/// Unlike `slice::chunks_exact`, a zero-column matrix still yields `nrows`
/// empty slices, so the number of items always equals the number of rows.
#[derive(Debug, Clone)]
pub struct Rows<'a, T> {
    data: &'a [T],
    ncols: usize,
    next: usize,
    nrows: usize,
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<&'a [T]> {
        if self.next == self.nrows {
            return None;
        }
        let start = self.next * self.ncols;
        self.next += 1;
        Some(&self.data[start..start + self.ncols])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.nrows - self.next;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Rows<'_, T> {}

impl<'a, T> IntoIterator for &'a Matrix<T> {
    type Item = &'a [T];
    type IntoIter = Rows<'a, T>;

    #[inline]
    fn into_iter(self) -> Rows<'a, T> {
        self.rows()
    }
}
