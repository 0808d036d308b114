use alloc::vec::Vec;
use core::fmt;

use super::Matrix;

// ── Map ─────────────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use densa::Matrix;
    /// let m = Matrix::from_rows(&[[1.0_f64, 4.0], [9.0, 16.0]]);
    /// let r = m.map(|x| x.sqrt());
    /// assert_eq!(r[(0, 1)], 2.0);
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U>
    where
        T: Copy,
    {
        let data: Vec<U> = self.data.iter().map(|&x| f(x)).collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// Multi-line rendering with tab-separated elements inside tall bracket
/// glyphs. A single row uses plain parentheses; taller matrices open with
/// `⎛`/`⎜`/`⎝` and close with `⎞`/`⎥`/`⎠`. Each row ends in a newline, and
/// an empty matrix renders as an empty string.
impl<T: fmt::Debug> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.nrows {
            let (open, close) = match (i, self.nrows) {
                (0, 1) => ('(', ')'),
                (0, _) => ('⎛', '⎞'),
                (i, n) if i == n - 1 => ('⎝', '⎠'),
                _ => ('⎜', '⎥'),
            };
            write!(f, "{open}\t")?;
            for j in 0..self.ncols {
                if j > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{:?}", self.data[i * self.ncols + j])?;
            }
            writeln!(f, "\t{close}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn map() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
        let doubled = m.map(|x| x * 2.0);
        assert_eq!(doubled[(0, 0)], 2.0);
        assert_eq!(doubled[(1, 1)], 8.0);
    }

    #[test]
    fn map_type_change() {
        let m = Matrix::from_rows(&[[1.5_f64, 2.5], [3.5, 4.5]]);
        let rounded = m.map(|x| x as i32);
        assert_eq!(rounded[(0, 0)], 1);
        assert_eq!(rounded[(1, 1)], 4);
    }

    #[test]
    fn display_two_rows() {
        let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.to_string(), "⎛\t1.0\t2.0\t⎞\n⎝\t3.0\t4.0\t⎠\n");
    }

    #[test]
    fn display_single_row_uses_parens() {
        let m = Matrix::from_row(&[1.0, 2.0, 3.0]);
        assert_eq!(m.to_string(), "(\t1.0\t2.0\t3.0\t)\n");
    }

    #[test]
    fn display_middle_rows() {
        let m = Matrix::from_rows(&[[1], [2], [3]]);
        let s = format!("{m}");
        let lines: Vec<&str> = s.lines().collect();
        assert!(lines[0].starts_with('⎛') && lines[0].ends_with('⎞'));
        assert!(lines[1].starts_with('⎜') && lines[1].ends_with('⎥'));
        assert!(lines[2].starts_with('⎝') && lines[2].ends_with('⎠'));
    }

    #[test]
    fn display_empty_matrix() {
        let m = Matrix::<f64>::zeros(0, 0);
        assert_eq!(m.to_string(), "");
    }

    #[test]
    fn display_ends_with_newline() {
        let m = Matrix::from_row(&[1.0]);
        assert!(m.to_string().ends_with('\n'));
    }
}
