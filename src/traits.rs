use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types. `'static` is required so the
/// kernel layer can select type-specialized code paths via `TypeId`.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num + 'static {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num + 'static> Scalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by operations that need `sqrt`, `exp`, `abs`, etc.
/// (the LU-backed inverse/determinant, element-wise transcendentals, and the
/// vector statistics helpers). Implemented by `f32` and `f64`.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Read-only access to a dense row-major matrix.
///
/// Requires only the shape and the flat backing storage; everything else is
/// derived. Algorithms that need no mutation can take `&impl MatrixRef<T>`
/// and work with any conforming container.
pub trait MatrixRef<T: Scalar> {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
    /// The backing storage, row-major, length `nrows() * ncols()`.
    fn as_slice(&self) -> &[T];

    /// Total number of elements.
    #[inline]
    fn len(&self) -> usize {
        self.nrows() * self.ncols()
    }

    /// True when the matrix holds no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the matrix has as many rows as columns.
    #[inline]
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    /// Borrow row `row` as a contiguous slice of length `ncols()`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= nrows()`.
    #[inline]
    fn row_slice(&self, row: usize) -> &[T] {
        assert!(
            row < self.nrows(),
            "row {} out of range for {} rows",
            row,
            self.nrows()
        );
        let n = self.ncols();
        &self.as_slice()[row * n..row * n + n]
    }
}

/// Mutable access to a dense row-major matrix.
///
/// Extends [`MatrixRef`] with mutable storage access, enabling in-place
/// algorithms to work generically.
pub trait MatrixMut<T: Scalar>: MatrixRef<T> {
    /// The backing storage, row-major, mutable.
    fn as_mut_slice(&mut self) -> &mut [T];

    /// Borrow row `row` as a mutable contiguous slice of length `ncols()`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= nrows()`.
    #[inline]
    fn row_slice_mut(&mut self, row: usize) -> &mut [T] {
        assert!(
            row < self.nrows(),
            "row {} out of range for {} rows",
            row,
            self.nrows()
        );
        let n = self.ncols();
        &mut self.as_mut_slice()[row * n..row * n + n]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Flat {
        rows: usize,
        cols: usize,
        data: [f64; 6],
    }

    impl MatrixRef<f64> for Flat {
        fn nrows(&self) -> usize {
            self.rows
        }
        fn ncols(&self) -> usize {
            self.cols
        }
        fn as_slice(&self) -> &[f64] {
            &self.data
        }
    }

    #[test]
    fn derived_shape_queries() {
        let m = Flat {
            rows: 2,
            cols: 3,
            data: [1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        };
        assert_eq!(m.len(), 6);
        assert!(!m.is_empty());
        assert!(!m.is_square());
        assert_eq!(m.row_slice(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn row_slice_out_of_range() {
        let m = Flat {
            rows: 2,
            cols: 3,
            data: [0.0; 6],
        };
        let _ = m.row_slice(2);
    }

    #[test]
    fn scalar_blanket_covers_integers() {
        fn sum_diag<T: Scalar, M: MatrixRef<T>>(m: &M) -> T {
            let mut acc = T::zero();
            for i in 0..m.nrows().min(m.ncols()) {
                acc = acc + m.as_slice()[i * m.ncols() + i];
            }
            acc
        }

        struct FlatI {
            data: [i32; 4],
        }
        impl MatrixRef<i32> for FlatI {
            fn nrows(&self) -> usize {
                2
            }
            fn ncols(&self) -> usize {
                2
            }
            fn as_slice(&self) -> &[i32] {
                &self.data
            }
        }

        let m = FlatI { data: [1, 2, 3, 4] };
        assert_eq!(sum_diag(&m), 5);
    }
}
