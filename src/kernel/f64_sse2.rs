//! SSE2-accelerated f64 kernels for x86_64.
//!
//! SSE2 provides 128-bit registers → 2×f64 lanes.
//! SSE2 is baseline on x86_64 (always available).

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Dot product of two f64 slices using SSE2.
///
/// Uses 4 independent accumulators (8 f64 per iteration) to hide
/// multiply-add latency.
#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    let n = a.len();
    let chunks = n / 8; // 4 accumulators × 2 lanes

    unsafe {
        let ap = a.as_ptr();
        let bp = b.as_ptr();

        let mut acc0 = _mm_setzero_pd();
        let mut acc1 = _mm_setzero_pd();
        let mut acc2 = _mm_setzero_pd();
        let mut acc3 = _mm_setzero_pd();

        for i in 0..chunks {
            let off = i * 8;
            acc0 = _mm_add_pd(acc0, _mm_mul_pd(_mm_loadu_pd(ap.add(off)), _mm_loadu_pd(bp.add(off))));
            acc1 = _mm_add_pd(acc1, _mm_mul_pd(_mm_loadu_pd(ap.add(off + 2)), _mm_loadu_pd(bp.add(off + 2))));
            acc2 = _mm_add_pd(acc2, _mm_mul_pd(_mm_loadu_pd(ap.add(off + 4)), _mm_loadu_pd(bp.add(off + 4))));
            acc3 = _mm_add_pd(acc3, _mm_mul_pd(_mm_loadu_pd(ap.add(off + 6)), _mm_loadu_pd(bp.add(off + 6))));
        }

        // Reduce 4 accumulators
        acc0 = _mm_add_pd(acc0, acc1);
        acc2 = _mm_add_pd(acc2, acc3);
        acc0 = _mm_add_pd(acc0, acc2);
        let high = _mm_unpackhi_pd(acc0, acc0);
        let sum_vec = _mm_add_sd(acc0, high);
        let mut sum = _mm_cvtsd_f64(sum_vec);

        // Remainder: up to 7 elements — handle pairs then scalar
        let tail = chunks * 8;
        let remaining = n - tail;
        let rem_pairs = remaining / 2;
        let mut acc_rem = _mm_setzero_pd();
        for i in 0..rem_pairs {
            let off = tail + i * 2;
            acc_rem = _mm_add_pd(acc_rem, _mm_mul_pd(_mm_loadu_pd(ap.add(off)), _mm_loadu_pd(bp.add(off))));
        }
        let rh = _mm_unpackhi_pd(acc_rem, acc_rem);
        sum += _mm_cvtsd_f64(_mm_add_sd(acc_rem, rh));

        let scalar_start = tail + rem_pairs * 2;
        for i in scalar_start..n {
            sum += a[i] * b[i];
        }
        sum
    }
}

/// Matrix multiply C += A * B using SSE2 with register-blocked micro-kernel.
///
/// Uses an MR×NR (4×4) register-blocked micro-kernel with k-blocking (KC=256)
/// to keep the A panel and B micro-panel in L2 cache. Accumulates the full
/// k-block in SSE2 registers before writing back to C. Technique inspired by
/// nano-gemm (Sarah Quinones, <https://github.com/sarah-quinones/nano-gemm>).
///
/// `a` is m×k, `b` is k×n, `c` is m×n (row-major flat slices).
/// Row-major indexing: element (row, col) is at `row * ncols + col`.
#[inline]
pub fn gemm(a: &[f64], b: &[f64], c: &mut [f64], m: usize, k: usize, n: usize) {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(c.len(), m * n);

    const MR: usize = 4;
    const NR: usize = 4; // 2 __m128d vectors × 2 f64 lanes
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
                unsafe { microkernel_4x4(a, b, c, k, n, i0, j0, kb, k_end); }
            }
        }

        // Right edge: cols n_full..n, rows 0..m_full
        let mut j0 = n_full;
        while j0 + 2 <= n {
            for ib in 0..m_full / MR {
                let i0 = ib * MR;
                unsafe { microkernel_4x2(a, b, c, k, n, i0, j0, kb, k_end); }
            }
            j0 += 2;
        }

        // Scalar tail: any single remaining column
        if j0 < n {
            for i in 0..m_full {
                for p in kb..k_end {
                    c[i * n + j0] += a[i * k + p] * b[p * n + j0];
                }
            }
        }

        // Bottom edge: rows m_full..m, all cols (SIMD i-p-j on inner loop)
        let j_simd = n / 2;
        let j_tail = j_simd * 2;
        for i in m_full..m {
            for p in kb..k_end {
                let a_ip = a[i * k + p];
                let b_row = p * n;
                let c_row = i * n;
                unsafe {
                    let va = _mm_set1_pd(a_ip);
                    for j in 0..j_simd {
                        let offset = j * 2;
                        let vc = _mm_loadu_pd(c.as_ptr().add(c_row + offset));
                        let vb = _mm_loadu_pd(b.as_ptr().add(b_row + offset));
                        _mm_storeu_pd(c.as_mut_ptr().add(c_row + offset), _mm_add_pd(vc, _mm_mul_pd(va, vb)));
                    }
                }
                for j in j_tail..n {
                    c[c_row + j] += a_ip * b[b_row + j];
                }
            }
        }

        kb += KC;
    }
}

/// Register-blocked 4×4 micro-kernel: accumulates C[i0..i0+4, j0..j0+4] in
/// 8 SSE2 registers across a k-block, writing C only once per block.
#[inline(always)]
unsafe fn microkernel_4x4(
    a: &[f64], b: &[f64], c: &mut [f64],
    k: usize, n: usize, i0: usize, j0: usize,
    p_start: usize, p_end: usize,
) {
    unsafe {
        let a_ptr = a.as_ptr();
        let b_ptr = b.as_ptr();

        // 8 accumulator registers: 4 rows × 2 vectors
        let mut acc00 = _mm_setzero_pd();
        let mut acc01 = _mm_setzero_pd();
        let mut acc10 = _mm_setzero_pd();
        let mut acc11 = _mm_setzero_pd();
        let mut acc20 = _mm_setzero_pd();
        let mut acc21 = _mm_setzero_pd();
        let mut acc30 = _mm_setzero_pd();
        let mut acc31 = _mm_setzero_pd();

        for p in p_start..p_end {
            let b_off = p * n + j0;
            let b0 = _mm_loadu_pd(b_ptr.add(b_off));
            let b1 = _mm_loadu_pd(b_ptr.add(b_off + 2));

            let a0 = _mm_set1_pd(*a_ptr.add(i0 * k + p));
            acc00 = _mm_add_pd(acc00, _mm_mul_pd(a0, b0));
            acc01 = _mm_add_pd(acc01, _mm_mul_pd(a0, b1));

            let a1 = _mm_set1_pd(*a_ptr.add((i0 + 1) * k + p));
            acc10 = _mm_add_pd(acc10, _mm_mul_pd(a1, b0));
            acc11 = _mm_add_pd(acc11, _mm_mul_pd(a1, b1));

            let a2 = _mm_set1_pd(*a_ptr.add((i0 + 2) * k + p));
            acc20 = _mm_add_pd(acc20, _mm_mul_pd(a2, b0));
            acc21 = _mm_add_pd(acc21, _mm_mul_pd(a2, b1));

            let a3 = _mm_set1_pd(*a_ptr.add((i0 + 3) * k + p));
            acc30 = _mm_add_pd(acc30, _mm_mul_pd(a3, b0));
            acc31 = _mm_add_pd(acc31, _mm_mul_pd(a3, b1));
        }

        // Write back: C += acc
        let c_ptr = c.as_mut_ptr();

        let off0 = i0 * n + j0;
        _mm_storeu_pd(c_ptr.add(off0), _mm_add_pd(_mm_loadu_pd(c_ptr.add(off0)), acc00));
        _mm_storeu_pd(c_ptr.add(off0 + 2), _mm_add_pd(_mm_loadu_pd(c_ptr.add(off0 + 2)), acc01));

        let off1 = (i0 + 1) * n + j0;
        _mm_storeu_pd(c_ptr.add(off1), _mm_add_pd(_mm_loadu_pd(c_ptr.add(off1)), acc10));
        _mm_storeu_pd(c_ptr.add(off1 + 2), _mm_add_pd(_mm_loadu_pd(c_ptr.add(off1 + 2)), acc11));

        let off2 = (i0 + 2) * n + j0;
        _mm_storeu_pd(c_ptr.add(off2), _mm_add_pd(_mm_loadu_pd(c_ptr.add(off2)), acc20));
        _mm_storeu_pd(c_ptr.add(off2 + 2), _mm_add_pd(_mm_loadu_pd(c_ptr.add(off2 + 2)), acc21));

        let off3 = (i0 + 3) * n + j0;
        _mm_storeu_pd(c_ptr.add(off3), _mm_add_pd(_mm_loadu_pd(c_ptr.add(off3)), acc30));
        _mm_storeu_pd(c_ptr.add(off3 + 2), _mm_add_pd(_mm_loadu_pd(c_ptr.add(off3 + 2)), acc31));
    }
}

/// Register-blocked 4×2 mini-kernel for right-edge columns: accumulates
/// C[i0..i0+4, j0..j0+2] in 4 SSE2 registers across a k-block.
#[inline(always)]
unsafe fn microkernel_4x2(
    a: &[f64], b: &[f64], c: &mut [f64],
    k: usize, n: usize, i0: usize, j0: usize,
    p_start: usize, p_end: usize,
) {
    unsafe {
        let a_ptr = a.as_ptr();
        let b_ptr = b.as_ptr();

        let mut acc0 = _mm_setzero_pd();
        let mut acc1 = _mm_setzero_pd();
        let mut acc2 = _mm_setzero_pd();
        let mut acc3 = _mm_setzero_pd();

        for p in p_start..p_end {
            let b0 = _mm_loadu_pd(b_ptr.add(p * n + j0));

            acc0 = _mm_add_pd(acc0, _mm_mul_pd(_mm_set1_pd(*a_ptr.add(i0 * k + p)), b0));
            acc1 = _mm_add_pd(acc1, _mm_mul_pd(_mm_set1_pd(*a_ptr.add((i0 + 1) * k + p)), b0));
            acc2 = _mm_add_pd(acc2, _mm_mul_pd(_mm_set1_pd(*a_ptr.add((i0 + 2) * k + p)), b0));
            acc3 = _mm_add_pd(acc3, _mm_mul_pd(_mm_set1_pd(*a_ptr.add((i0 + 3) * k + p)), b0));
        }

        let c_ptr = c.as_mut_ptr();
        let off0 = i0 * n + j0;
        _mm_storeu_pd(c_ptr.add(off0), _mm_add_pd(_mm_loadu_pd(c_ptr.add(off0)), acc0));
        let off1 = (i0 + 1) * n + j0;
        _mm_storeu_pd(c_ptr.add(off1), _mm_add_pd(_mm_loadu_pd(c_ptr.add(off1)), acc1));
        let off2 = (i0 + 2) * n + j0;
        _mm_storeu_pd(c_ptr.add(off2), _mm_add_pd(_mm_loadu_pd(c_ptr.add(off2)), acc2));
        let off3 = (i0 + 3) * n + j0;
        _mm_storeu_pd(c_ptr.add(off3), _mm_add_pd(_mm_loadu_pd(c_ptr.add(off3)), acc3));
    }
}

/// Out-of-place transpose: dst (cols×rows) = src (rows×cols)ᵀ using SSE2
/// 2×2 micro-tiles inside 32×32 cache blocks.
///
/// A 2×2 tile is transposed entirely in registers with unpack shuffles, so
/// both loads and stores move full 128-bit lanes.
#[inline]
pub fn transpose(src: &[f64], dst: &mut [f64], rows: usize, cols: usize) {
    debug_assert_eq!(src.len(), rows * cols);
    debug_assert_eq!(dst.len(), rows * cols);

    const B: usize = 32;

    let mut i0 = 0;
    while i0 < rows {
        let i_end = (i0 + B).min(rows);
        let i_pairs = i0 + ((i_end - i0) / 2) * 2;
        let mut j0 = 0;
        while j0 < cols {
            let j_end = (j0 + B).min(cols);
            let j_pairs = j0 + ((j_end - j0) / 2) * 2;

            unsafe {
                let sp = src.as_ptr();
                let dp = dst.as_mut_ptr();
                let mut i = i0;
                while i < i_pairs {
                    let mut j = j0;
                    while j < j_pairs {
                        let r0 = _mm_loadu_pd(sp.add(i * cols + j));
                        let r1 = _mm_loadu_pd(sp.add((i + 1) * cols + j));
                        // [src(i,j), src(i+1,j)] and [src(i,j+1), src(i+1,j+1)]
                        let t0 = _mm_unpacklo_pd(r0, r1);
                        let t1 = _mm_unpackhi_pd(r0, r1);
                        _mm_storeu_pd(dp.add(j * rows + i), t0);
                        _mm_storeu_pd(dp.add((j + 1) * rows + i), t1);
                        j += 2;
                    }
                    // Odd trailing column
                    for j in j_pairs..j_end {
                        dst[j * rows + i] = src[i * cols + j];
                        dst[j * rows + i + 1] = src[(i + 1) * cols + j];
                    }
                    i += 2;
                }
            }
            // Odd trailing row
            for i in i_pairs..i_end {
                for j in j0..j_end {
                    dst[j * rows + i] = src[i * cols + j];
                }
            }

            j0 += B;
        }
        i0 += B;
    }
}

/// Element-wise addition: out[i] = a[i] + b[i].
#[inline]
pub fn add_slices(a: &[f64], b: &[f64], out: &mut [f64]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    let n = a.len();
    let chunks = n / 2;

    unsafe {
        for i in 0..chunks {
            let offset = i * 2;
            let va = _mm_loadu_pd(a.as_ptr().add(offset));
            let vb = _mm_loadu_pd(b.as_ptr().add(offset));
            _mm_storeu_pd(out.as_mut_ptr().add(offset), _mm_add_pd(va, vb));
        }
    }

    let tail = chunks * 2;
    for i in tail..n {
        out[i] = a[i] + b[i];
    }
}

/// Element-wise subtraction: out[i] = a[i] - b[i].
#[inline]
pub fn sub_slices(a: &[f64], b: &[f64], out: &mut [f64]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    let n = a.len();
    let chunks = n / 2;

    unsafe {
        for i in 0..chunks {
            let offset = i * 2;
            let va = _mm_loadu_pd(a.as_ptr().add(offset));
            let vb = _mm_loadu_pd(b.as_ptr().add(offset));
            _mm_storeu_pd(out.as_mut_ptr().add(offset), _mm_sub_pd(va, vb));
        }
    }

    let tail = chunks * 2;
    for i in tail..n {
        out[i] = a[i] - b[i];
    }
}

/// Element-wise product: out[i] = a[i] * b[i].
#[inline]
pub fn mul_slices(a: &[f64], b: &[f64], out: &mut [f64]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    let n = a.len();
    let chunks = n / 2;

    unsafe {
        for i in 0..chunks {
            let offset = i * 2;
            let va = _mm_loadu_pd(a.as_ptr().add(offset));
            let vb = _mm_loadu_pd(b.as_ptr().add(offset));
            _mm_storeu_pd(out.as_mut_ptr().add(offset), _mm_mul_pd(va, vb));
        }
    }

    let tail = chunks * 2;
    for i in tail..n {
        out[i] = a[i] * b[i];
    }
}

/// Element-wise quotient: out[i] = a[i] / b[i].
#[inline]
pub fn div_slices(a: &[f64], b: &[f64], out: &mut [f64]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    let n = a.len();
    let chunks = n / 2;

    unsafe {
        for i in 0..chunks {
            let offset = i * 2;
            let va = _mm_loadu_pd(a.as_ptr().add(offset));
            let vb = _mm_loadu_pd(b.as_ptr().add(offset));
            _mm_storeu_pd(out.as_mut_ptr().add(offset), _mm_div_pd(va, vb));
        }
    }

    let tail = chunks * 2;
    for i in tail..n {
        out[i] = a[i] / b[i];
    }
}

/// In-place accumulate: a[i] += b[i].
#[inline]
pub fn add_assign_slices(a: &mut [f64], b: &[f64]) {
    debug_assert_eq!(a.len(), b.len());
    let n = a.len();
    let chunks = n / 2;

    unsafe {
        for i in 0..chunks {
            let offset = i * 2;
            let va = _mm_loadu_pd(a.as_ptr().add(offset));
            let vb = _mm_loadu_pd(b.as_ptr().add(offset));
            _mm_storeu_pd(a.as_mut_ptr().add(offset), _mm_add_pd(va, vb));
        }
    }

    let tail = chunks * 2;
    for i in tail..n {
        a[i] += b[i];
    }
}

/// Scalar multiplication: out[i] = a[i] * scalar.
#[inline]
pub fn scale_slices(a: &[f64], scalar: f64, out: &mut [f64]) {
    debug_assert_eq!(a.len(), out.len());
    let n = a.len();
    let chunks = n / 2;

    unsafe {
        let vs = _mm_set1_pd(scalar);
        for i in 0..chunks {
            let offset = i * 2;
            let va = _mm_loadu_pd(a.as_ptr().add(offset));
            _mm_storeu_pd(out.as_mut_ptr().add(offset), _mm_mul_pd(va, vs));
        }
    }

    let tail = chunks * 2;
    for i in tail..n {
        out[i] = a[i] * scalar;
    }
}

/// AXPY: y[i] -= alpha * x[i].
#[inline]
pub fn axpy_neg(y: &mut [f64], alpha: f64, x: &[f64]) {
    debug_assert_eq!(y.len(), x.len());
    let n = y.len();
    let chunks = n / 2;

    unsafe {
        let va = _mm_set1_pd(alpha);
        for i in 0..chunks {
            let offset = i * 2;
            let vy = _mm_loadu_pd(y.as_ptr().add(offset));
            let vx = _mm_loadu_pd(x.as_ptr().add(offset));
            let result = _mm_sub_pd(vy, _mm_mul_pd(va, vx));
            _mm_storeu_pd(y.as_mut_ptr().add(offset), result);
        }
    }

    let tail = chunks * 2;
    for i in tail..n {
        y[i] -= alpha * x[i];
    }
}

/// Element-wise square root: out[i] = sqrt(a[i]).
#[inline]
pub fn sqrt_slices(a: &[f64], out: &mut [f64]) {
    debug_assert_eq!(a.len(), out.len());
    let n = a.len();
    let chunks = n / 2;

    unsafe {
        for i in 0..chunks {
            let offset = i * 2;
            let va = _mm_loadu_pd(a.as_ptr().add(offset));
            _mm_storeu_pd(out.as_mut_ptr().add(offset), _mm_sqrt_pd(va));
        }
    }

    let tail = chunks * 2;
    for i in tail..n {
        out[i] = a[i].sqrt();
    }
}

/// Sum of all elements.
///
/// Uses 4 independent accumulators (8 f64 per iteration) to hide add latency.
#[inline]
pub fn sum(a: &[f64]) -> f64 {
    let n = a.len();
    let chunks = n / 8;

    unsafe {
        let ap = a.as_ptr();

        let mut acc0 = _mm_setzero_pd();
        let mut acc1 = _mm_setzero_pd();
        let mut acc2 = _mm_setzero_pd();
        let mut acc3 = _mm_setzero_pd();

        for i in 0..chunks {
            let off = i * 8;
            acc0 = _mm_add_pd(acc0, _mm_loadu_pd(ap.add(off)));
            acc1 = _mm_add_pd(acc1, _mm_loadu_pd(ap.add(off + 2)));
            acc2 = _mm_add_pd(acc2, _mm_loadu_pd(ap.add(off + 4)));
            acc3 = _mm_add_pd(acc3, _mm_loadu_pd(ap.add(off + 6)));
        }

        acc0 = _mm_add_pd(acc0, acc1);
        acc2 = _mm_add_pd(acc2, acc3);
        acc0 = _mm_add_pd(acc0, acc2);
        let high = _mm_unpackhi_pd(acc0, acc0);
        let mut total = _mm_cvtsd_f64(_mm_add_sd(acc0, high));

        for i in chunks * 8..n {
            total += a[i];
        }
        total
    }
}

/// Sum of squared elements.
#[inline]
pub fn sumsq(a: &[f64]) -> f64 {
    let n = a.len();
    let chunks = n / 2;

    unsafe {
        let mut acc = _mm_setzero_pd();
        for i in 0..chunks {
            let va = _mm_loadu_pd(a.as_ptr().add(i * 2));
            acc = _mm_add_pd(acc, _mm_mul_pd(va, va));
        }
        let high = _mm_unpackhi_pd(acc, acc);
        let mut total = _mm_cvtsd_f64(_mm_add_sd(acc, high));

        for i in chunks * 2..n {
            total += a[i] * a[i];
        }
        total
    }
}

/// Sum of absolute values.
#[inline]
pub fn asum(a: &[f64]) -> f64 {
    let n = a.len();
    let chunks = n / 2;

    unsafe {
        // Clearing the sign bit is abs for IEEE doubles
        let sign = _mm_set1_pd(-0.0);
        let mut acc = _mm_setzero_pd();
        for i in 0..chunks {
            let va = _mm_loadu_pd(a.as_ptr().add(i * 2));
            acc = _mm_add_pd(acc, _mm_andnot_pd(sign, va));
        }
        let high = _mm_unpackhi_pd(acc, acc);
        let mut total = _mm_cvtsd_f64(_mm_add_sd(acc, high));

        for i in chunks * 2..n {
            total += a[i].abs();
        }
        total
    }
}

/// Largest element. Caller guarantees a non-empty slice.
#[inline]
pub fn max_val(a: &[f64]) -> f64 {
    debug_assert!(!a.is_empty());
    let n = a.len();
    let chunks = n / 2;

    unsafe {
        let mut vbest = _mm_set1_pd(a[0]);
        for i in 0..chunks {
            vbest = _mm_max_pd(vbest, _mm_loadu_pd(a.as_ptr().add(i * 2)));
        }
        let high = _mm_unpackhi_pd(vbest, vbest);
        let mut best = _mm_cvtsd_f64(_mm_max_sd(vbest, high));

        for i in chunks * 2..n {
            best = best.max(a[i]);
        }
        best
    }
}

/// Smallest element. Caller guarantees a non-empty slice.
#[inline]
pub fn min_val(a: &[f64]) -> f64 {
    debug_assert!(!a.is_empty());
    let n = a.len();
    let chunks = n / 2;

    unsafe {
        let mut vbest = _mm_set1_pd(a[0]);
        for i in 0..chunks {
            vbest = _mm_min_pd(vbest, _mm_loadu_pd(a.as_ptr().add(i * 2)));
        }
        let high = _mm_unpackhi_pd(vbest, vbest);
        let mut best = _mm_cvtsd_f64(_mm_min_sd(vbest, high));

        for i in chunks * 2..n {
            best = best.min(a[i]);
        }
        best
    }
}
