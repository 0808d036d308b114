use core::fmt;

/// Errors reported by checked matrix operations.
///
/// Every variant is raised before any numeric work happens, so a failed
/// operation never leaves partial state behind. Shape violations during
/// *construction* (`from_vec` length, ragged `from_rows`) are programming
/// errors and panic instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// A binary operation's shape precondition failed.
    ///
    /// Addition, subtraction, and the element-wise product/quotient require
    /// identical shapes; multiplication requires the inner dimensions to
    /// agree. `lhs`/`rhs` are `(rows, cols)` of the two operands.
    DimensionMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// A checked `get`/`set` received an out-of-bounds `(row, col)`.
    IndexOutOfBounds {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
    /// An operation requiring a square matrix received a non-square one.
    NotSquare { nrows: usize, ncols: usize },
    /// LU factorization hit an exactly-zero pivot; the matrix has no inverse.
    Singular,
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::DimensionMismatch { lhs, rhs } => write!(
                f,
                "dimension mismatch: {}x{} vs {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            MatrixError::IndexOutOfBounds {
                row,
                col,
                nrows,
                ncols,
            } => write!(
                f,
                "index ({}, {}) out of bounds for {}x{} matrix",
                row, col, nrows, ncols
            ),
            MatrixError::NotSquare { nrows, ncols } => {
                write!(f, "matrix is not square: {}x{}", nrows, ncols)
            }
            MatrixError::Singular => write!(f, "matrix is singular"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MatrixError {}
