use crate::traits::FloatScalar;

/// LU factorization with partial pivoting of a column-major buffer, in place.
///
/// `a` holds an `m`×`n` matrix in column-major order with leading dimension
/// `lda` (the stride between columns, `lda >= max(1, m)`). On return, `a`
/// contains both factors packed together:
/// - Upper triangle (including diagonal): U
/// - Lower triangle (excluding diagonal): L (diagonal of L is implicitly 1)
///
/// `ipiv` records the row swaps in LAPACK `getrf` form: it has `min(m, n)`
/// entries, and `ipiv[j] = p` (1-based) means row `j` was exchanged with row
/// `p - 1` at step `j`. The entries are sequential swap records rather than a
/// permutation vector; replaying them in order reconstructs the permutation.
///
/// Returns a status code: `0` on success, or `j + 1` if the pivot at step `j`
/// was exactly zero. A nonzero status means U has a zero on its diagonal and
/// the matrix is singular. The factorization still runs to completion, so the
/// diagonal and swap record remain valid either way.
pub(crate) fn lu_factor<T: FloatScalar>(
    a: &mut [T],
    m: usize,
    n: usize,
    lda: usize,
    ipiv: &mut [usize],
) -> usize {
    let k = m.min(n);
    assert_eq!(ipiv.len(), k, "pivot slice length must be min(m, n)");
    assert!(lda >= m.max(1), "leading dimension too small");
    assert!(k == 0 || a.len() >= (n - 1) * lda + m, "buffer too small");

    let mut info = 0;

    for j in 0..k {
        // Partial pivoting: largest magnitude in column j at or below the
        // diagonal
        let mut p = j;
        let mut max_val = a[j + j * lda].abs();
        for i in (j + 1)..m {
            let val = a[i + j * lda].abs();
            if val > max_val {
                max_val = val;
                p = i;
            }
        }
        ipiv[j] = p + 1;

        if a[p + j * lda] != T::zero() {
            // Swap full rows j and p
            if p != j {
                for col in 0..n {
                    a.swap(j + col * lda, p + col * lda);
                }
            }

            // Column-major LAPACK getf2 style elimination:
            // 1. Scale the sub-column by 1/pivot (contiguous in col-major)
            // 2. AXPY: for each column c > j, a[j+1:m, c] -= a[j, c] * a[j+1:m, j]
            //    Both source and destination are contiguous column slices,
            //    SIMD-friendly.
            let inv_pivot = T::one() / a[j + j * lda];
            for i in (j + 1)..m {
                a[i + j * lda] = a[i + j * lda] * inv_pivot;
            }

            for col in (j + 1)..n {
                let (head, tail) = a.split_at_mut(col * lda);
                let alpha = tail[j];
                let multipliers = &head[j * lda + j + 1..j * lda + m];
                crate::kernel::axpy_neg_dispatch(&mut tail[j + 1..m], alpha, multipliers);
            }
        } else if info == 0 {
            // A zero pivot means the whole sub-column is zero, so there is
            // nothing to eliminate. Record the step and keep factoring.
            info = j + 1;
        }
    }

    info
}

/// Compute the explicit inverse from a packed LU factorization, in place.
///
/// `a` holds the `n`×`n` packed factors from [`lu_factor`] (column-major,
/// leading dimension `lda`) and is overwritten with the inverse. `ipiv` is
/// the swap record from the factorization. `work` is caller-provided scratch
/// of at least `n * n` elements.
///
/// Solves `A x = e_j` for each unit basis vector: apply the recorded row
/// swaps to the right-hand side, forward-substitute through unit-lower L,
/// back-substitute through U. This matches the LAPACK `getri` contract, built
/// from explicit column solves instead of a blocked triangular inverse.
///
/// Returns `0` on success, or `j + 1` if `U[j][j]` is exactly zero, in which
/// case the matrix is singular and `a` is left untouched.
pub(crate) fn lu_invert<T: FloatScalar>(
    a: &mut [T],
    n: usize,
    lda: usize,
    ipiv: &[usize],
    work: &mut [T],
) -> usize {
    assert_eq!(ipiv.len(), n, "pivot slice length must be n");
    assert!(lda >= n.max(1), "leading dimension too small");
    assert!(n == 0 || a.len() >= (n - 1) * lda + n, "buffer too small");
    assert!(work.len() >= n * n, "scratch too small");

    // Check the U diagonal up front so the buffer is never half-overwritten
    for j in 0..n {
        if a[j + j * lda] == T::zero() {
            return j + 1;
        }
    }

    for j in 0..n {
        let x = &mut work[j * n..j * n + n];

        // Right-hand side e_j with the factorization's row swaps applied in
        // recorded order
        for v in x.iter_mut() {
            *v = T::zero();
        }
        x[j] = T::one();
        for i in 0..n {
            let p = ipiv[i] - 1;
            if p != i {
                x.swap(i, p);
            }
        }

        // Forward substitution through unit-lower L: most of e_j is zero, so
        // skip columns with a zero coefficient
        for col in 0..n {
            let xc = x[col];
            if xc != T::zero() {
                let sub_col = &a[col * lda + col + 1..col * lda + n];
                crate::kernel::axpy_neg_dispatch(&mut x[col + 1..n], xc, sub_col);
            }
        }

        // Back substitution through U
        for col in (0..n).rev() {
            x[col] = x[col] / a[col + col * lda];
            let xc = x[col];
            let super_col = &a[col * lda..col * lda + col];
            crate::kernel::axpy_neg_dispatch(&mut x[..col], xc, super_col);
        }
    }

    // Copy the assembled inverse back over the factors, column by column
    for j in 0..n {
        a[j * lda..j * lda + n].copy_from_slice(&work[j * n..j * n + n]);
    }

    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn factor_identity_no_swaps() {
        let mut a = vec![1.0_f64, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
        let mut ipiv = [0usize; 3];
        let info = lu_factor(&mut a, 3, 3, 3, &mut ipiv);
        assert_eq!(info, 0);
        assert_eq!(ipiv, [1, 2, 3]);
        assert_eq!(a, vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn factor_records_one_based_swaps() {
        // The exchange matrix [[0,1],[1,0]] forces a swap at step 0
        let mut a = vec![0.0_f64, 1.0, 1.0, 0.0];
        let mut ipiv = [0usize; 2];
        let info = lu_factor(&mut a, 2, 2, 2, &mut ipiv);
        assert_eq!(info, 0);
        assert_eq!(ipiv, [2, 2]);
        // After the swap the factors are the identity
        assert_eq!(a, vec![1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn factor_singular_completes_with_status() {
        // [[1,2],[2,4]] has rank 1; the zero pivot appears at step 1
        let mut a = vec![1.0_f64, 2.0, 2.0, 4.0];
        let mut ipiv = [0usize; 2];
        let info = lu_factor(&mut a, 2, 2, 2, &mut ipiv);
        assert_eq!(info, 2);
        assert_eq!(ipiv, [2, 2]);
        // U diagonal survives: [2, 0]
        assert_eq!(a[0], 2.0);
        assert_eq!(a[3], 0.0);
    }

    #[test]
    fn factor_rectangular_shapes() {
        // Tall 3x2: min(m, n) = 2 pivots
        let mut tall = vec![1.0_f64, 0.0, 0.0, 0.0, 1.0, 0.0];
        let mut ipiv = [0usize; 2];
        assert_eq!(lu_factor(&mut tall, 3, 2, 3, &mut ipiv), 0);
        assert_eq!(ipiv, [1, 2]);

        // Wide 2x3: min(m, n) = 2 pivots
        let mut wide = vec![2.0_f64, 0.0, 0.0, 3.0, 5.0, 7.0];
        let mut ipiv = [0usize; 2];
        assert_eq!(lu_factor(&mut wide, 2, 3, 2, &mut ipiv), 0);
        assert_eq!(ipiv, [1, 2]);
    }

    #[test]
    fn factor_empty_is_noop() {
        let mut a: [f64; 0] = [];
        let mut ipiv: [usize; 0] = [];
        assert_eq!(lu_factor(&mut a, 0, 0, 1, &mut ipiv), 0);
    }

    #[test]
    fn invert_2x2_known_inverse() {
        // [[4,7],[2,6]] has determinant 10 and a clean closed-form inverse
        let mut a = vec![4.0_f64, 2.0, 7.0, 6.0];
        let mut ipiv = [0usize; 2];
        assert_eq!(lu_factor(&mut a, 2, 2, 2, &mut ipiv), 0);

        let mut work = vec![0.0_f64; 4];
        assert_eq!(lu_invert(&mut a, 2, 2, &ipiv, &mut work), 0);

        let expected = [0.6_f64, -0.2, -0.7, 0.4];
        for i in 0..4 {
            assert!(
                (a[i] - expected[i]).abs() < 1e-12,
                "inverse[{i}] = {}, expected {}",
                a[i],
                expected[i]
            );
        }
    }

    #[test]
    fn invert_3x3_with_swaps_roundtrip() {
        // A leading zero forces pivoting; verify A * inv(A) = I
        let orig = [[0.0_f64, 2.0, 1.0], [1.0, 0.0, 0.0], [3.0, 1.0, 2.0]];
        let mut a = vec![0.0_f64; 9];
        for (i, row) in orig.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                a[i + j * 3] = v;
            }
        }

        let mut ipiv = [0usize; 3];
        assert_eq!(lu_factor(&mut a, 3, 3, 3, &mut ipiv), 0);
        let mut work = vec![0.0_f64; 9];
        assert_eq!(lu_invert(&mut a, 3, 3, &ipiv, &mut work), 0);

        for i in 0..3 {
            for j in 0..3 {
                let mut s = 0.0;
                for p in 0..3 {
                    s += orig[i][p] * a[p + j * 3];
                }
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((s - expected).abs() < 1e-12, "product[{i}][{j}] = {s}");
            }
        }
    }

    #[test]
    fn invert_rejects_zero_diagonal() {
        let mut a = vec![1.0_f64, 2.0, 2.0, 4.0];
        let mut ipiv = [0usize; 2];
        assert_eq!(lu_factor(&mut a, 2, 2, 2, &mut ipiv), 2);

        let saved = a.clone();
        let mut work = vec![0.0_f64; 4];
        assert_eq!(lu_invert(&mut a, 2, 2, &ipiv, &mut work), 2);
        // Factors untouched on failure
        assert_eq!(a, saved);
    }
}
