//! Generic scalar fallback implementations for dispatched kernels.
//!
//! These run for element types without SIMD specializations (integers) and
//! on architectures without SIMD support.

use crate::traits::{FloatScalar, Scalar};

/// Element-wise addition: out[i] = a[i] + b[i].
#[inline]
pub fn add_slices<T: Scalar>(a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    for i in 0..a.len() {
        out[i] = a[i] + b[i];
    }
}

/// Element-wise subtraction: out[i] = a[i] - b[i].
#[inline]
pub fn sub_slices<T: Scalar>(a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    for i in 0..a.len() {
        out[i] = a[i] - b[i];
    }
}

/// Element-wise product: out[i] = a[i] * b[i].
#[inline]
pub fn mul_slices<T: Scalar>(a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    for i in 0..a.len() {
        out[i] = a[i] * b[i];
    }
}

/// Element-wise quotient: out[i] = a[i] / b[i].
#[inline]
pub fn div_slices<T: Scalar>(a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    for i in 0..a.len() {
        out[i] = a[i] / b[i];
    }
}

/// In-place accumulate: a[i] += b[i].
#[inline]
pub fn add_assign_slices<T: Scalar>(a: &mut [T], b: &[T]) {
    debug_assert_eq!(a.len(), b.len());
    for i in 0..a.len() {
        a[i] = a[i] + b[i];
    }
}

/// Scalar multiplication: out[i] = a[i] * scalar.
#[inline]
pub fn scale_slices<T: Scalar>(a: &[T], scalar: T, out: &mut [T]) {
    debug_assert_eq!(a.len(), out.len());
    for i in 0..a.len() {
        out[i] = a[i] * scalar;
    }
}

/// AXPY: y[i] -= alpha * x[i].
///
/// The dominant inner-loop pattern of Gaussian elimination and the
/// triangular solves, hence its own entry point.
#[inline]
pub fn axpy_neg<T: Scalar>(y: &mut [T], alpha: T, x: &[T]) {
    debug_assert_eq!(y.len(), x.len());
    for i in 0..y.len() {
        y[i] = y[i] - alpha * x[i];
    }
}

/// Element-wise square root: out[i] = sqrt(a[i]).
#[inline]
pub fn sqrt_slices<T: FloatScalar>(a: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), out.len());
    for i in 0..a.len() {
        out[i] = a[i].sqrt();
    }
}

/// Dot product of two slices.
#[inline]
pub fn dot<T: Scalar>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());
    let mut sum = T::zero();
    for i in 0..a.len() {
        sum = sum + a[i] * b[i];
    }
    sum
}

/// Sum of all elements.
#[inline]
pub fn sum<T: Scalar>(a: &[T]) -> T {
    let mut acc = T::zero();
    for &v in a {
        acc = acc + v;
    }
    acc
}

/// Sum of squared elements.
#[inline]
pub fn sumsq<T: Scalar>(a: &[T]) -> T {
    let mut acc = T::zero();
    for &v in a {
        acc = acc + v * v;
    }
    acc
}

/// Sum of magnitudes. `abs` is expressed through `PartialOrd` + negation so
/// the fallback stays available to signed integers.
#[inline]
pub fn asum<T: Scalar + core::ops::Neg<Output = T> + PartialOrd>(a: &[T]) -> T {
    let mut acc = T::zero();
    for &v in a {
        acc = acc + if v < T::zero() { -v } else { v };
    }
    acc
}

/// Largest element. Caller guarantees a non-empty slice.
#[inline]
pub fn max_val<T: Scalar + PartialOrd>(a: &[T]) -> T {
    debug_assert!(!a.is_empty());
    let mut best = a[0];
    for &v in &a[1..] {
        if v > best {
            best = v;
        }
    }
    best
}

/// Smallest element. Caller guarantees a non-empty slice.
#[inline]
pub fn min_val<T: Scalar + PartialOrd>(a: &[T]) -> T {
    debug_assert!(!a.is_empty());
    let mut best = a[0];
    for &v in &a[1..] {
        if v < best {
            best = v;
        }
    }
    best
}

/// Matrix multiply C += A * B with a register-blocked micro-kernel and
/// k-blocking.
///
/// Uses a 4×4 register-blocked approach with k-blocking (KC=256) to keep the
/// A panel and B micro-panel in L2 cache. Accumulates the full k-block in
/// local variables before writing back to C. Technique inspired by nano-gemm
/// (Sarah Quinones, <https://github.com/sarah-quinones/nano-gemm>).
///
/// `a` is m×k, `b` is k×n, `c` is m×n (all row-major flat slices).
/// Row-major indexing: element (row, col) is at `row * ncols + col`.
#[inline]
pub fn gemm<T: Scalar>(a: &[T], b: &[T], c: &mut [T], m: usize, k: usize, n: usize) {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(c.len(), m * n);

    const MR: usize = 4;
    const NR: usize = 4;
    const KC: usize = 256;

    let m_full = (m / MR) * MR;
    let n_full = (n / NR) * NR;

    let mut kb = 0;
    while kb < k {
        let k_end = (kb + KC).min(k);

        // Interior: full MR×NR tiles, register-blocked
        for ib in 0..m_full / MR {
            let i0 = ib * MR;
            for jb in 0..n_full / NR {
                let j0 = jb * NR;

                // 16 scalar accumulators (4 rows × 4 cols)
                let mut acc = [[T::zero(); NR]; MR];

                for p in kb..k_end {
                    let b_base = p * n + j0;
                    for ii in 0..MR {
                        let a_val = a[(i0 + ii) * k + p];
                        for jj in 0..NR {
                            acc[ii][jj] = acc[ii][jj] + a_val * b[b_base + jj];
                        }
                    }
                }

                // Write back: C += acc
                for ii in 0..MR {
                    let c_base = (i0 + ii) * n + j0;
                    for jj in 0..NR {
                        c[c_base + jj] = c[c_base + jj] + acc[ii][jj];
                    }
                }
            }
        }

        // Right edge: cols n_full..n, rows 0..m_full
        for i in 0..m_full {
            for p in kb..k_end {
                let a_ip = a[i * k + p];
                let b_row = p * n;
                let c_row = i * n;
                for j in n_full..n {
                    c[c_row + j] = c[c_row + j] + a_ip * b[b_row + j];
                }
            }
        }

        // Bottom edge: rows m_full..m, all cols
        for i in m_full..m {
            for p in kb..k_end {
                let a_ip = a[i * k + p];
                let b_row = p * n;
                let c_row = i * n;
                for j in 0..n {
                    c[c_row + j] = c[c_row + j] + a_ip * b[b_row + j];
                }
            }
        }

        kb += KC;
    }
}

/// Out-of-place transpose: dst (cols×rows) = src (rows×cols)ᵀ, both row-major.
///
/// Tiled so both the source reads and the destination writes stay within one
/// cache-line neighborhood per tile, instead of striding the full matrix on
/// every destination row.
#[inline]
pub fn transpose<T: Scalar>(src: &[T], dst: &mut [T], rows: usize, cols: usize) {
    debug_assert_eq!(src.len(), rows * cols);
    debug_assert_eq!(dst.len(), rows * cols);

    const B: usize = 32;

    let mut i0 = 0;
    while i0 < rows {
        let i_end = (i0 + B).min(rows);
        let mut j0 = 0;
        while j0 < cols {
            let j_end = (j0 + B).min(cols);
            for i in i0..i_end {
                for j in j0..j_end {
                    dst[j * rows + i] = src[i * cols + j];
                }
            }
            j0 += B;
        }
        i0 += B;
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn gemm_2x2_literal() {
        // Row-major: A=[[1,2],[3,4]], B=[[5,6],[7,8]], C=[[19,22],[43,50]]
        let a = [1.0_f64, 2.0, 3.0, 4.0];
        let b = [5.0_f64, 6.0, 7.0, 8.0];
        let mut c = [0.0_f64; 4];
        gemm(&a, &b, &mut c, 2, 2, 2);
        assert_eq!(c, [19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn gemm_accumulates() {
        let a = [1.0_f64, 0.0, 0.0, 1.0];
        let b = [1.0_f64, 2.0, 3.0, 4.0];
        let mut c = [10.0_f64, 0.0, 0.0, 10.0];
        gemm(&a, &b, &mut c, 2, 2, 2);
        assert_eq!(c, [11.0, 2.0, 3.0, 14.0]);
    }

    #[test]
    fn gemm_rectangular_against_naive() {
        let (m, k, n) = (5, 7, 6);
        let a: Vec<f64> = (0..m * k).map(|i| (i + 1) as f64).collect();
        let b: Vec<f64> = (0..k * n).map(|i| (i as f64) * 0.25 - 2.0).collect();
        let mut c = vec![0.0_f64; m * n];
        gemm(&a, &b, &mut c, m, k, n);

        for i in 0..m {
            for j in 0..n {
                let mut expect = 0.0;
                for p in 0..k {
                    expect += a[i * k + p] * b[p * n + j];
                }
                assert!(
                    (c[i * n + j] - expect).abs() < 1e-10,
                    "c[{i},{j}] = {}, expected {expect}",
                    c[i * n + j]
                );
            }
        }
    }

    #[test]
    fn transpose_rectangular() {
        // 2×3 → 3×2
        let src = [1, 2, 3, 4, 5, 6];
        let mut dst = [0; 6];
        transpose(&src, &mut dst, 2, 3);
        assert_eq!(dst, [1, 4, 2, 5, 3, 6]);
    }

    #[test]
    fn transpose_larger_than_tile() {
        let (rows, cols) = (37, 41);
        let src: Vec<i64> = (0..rows * cols).map(|i| i as i64).collect();
        let mut dst = vec![0_i64; rows * cols];
        transpose(&src, &mut dst, rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                assert_eq!(dst[j * rows + i], src[i * cols + j]);
            }
        }
    }

    #[test]
    fn reductions() {
        let a = [1.0_f64, -2.0, 3.0, -4.0];
        assert_eq!(sum(&a), -2.0);
        assert_eq!(sumsq(&a), 30.0);
        assert_eq!(asum(&a), 10.0);
        assert_eq!(max_val(&a), 3.0);
        assert_eq!(min_val(&a), -4.0);
        assert_eq!(dot(&a, &a), 30.0);
    }

    #[test]
    fn axpy_neg_subtracts_scaled() {
        let x = [1.0_f64, 2.0, 3.0];
        let mut y = [10.0_f64, 10.0, 10.0];
        axpy_neg(&mut y, 2.0, &x);
        assert_eq!(y, [8.0, 6.0, 4.0]);
    }
}
