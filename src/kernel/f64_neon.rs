//! NEON-accelerated f64 kernels for aarch64.
//!
//! NEON provides 128-bit registers → 2×f64 lanes.

use core::arch::aarch64::*;

/// Dot product of two f64 slices using NEON.
///
/// Uses 4 independent accumulators (8 f64 per iteration) to hide
/// FMA latency (~4 cycles on Apple Silicon).
#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    let n = a.len();
    let chunks = n / 8; // 4 accumulators × 2 lanes

    unsafe {
        let ap = a.as_ptr();
        let bp = b.as_ptr();

        let mut acc0 = vdupq_n_f64(0.0);
        let mut acc1 = vdupq_n_f64(0.0);
        let mut acc2 = vdupq_n_f64(0.0);
        let mut acc3 = vdupq_n_f64(0.0);

        for i in 0..chunks {
            let off = i * 8;
            acc0 = vfmaq_f64(acc0, vld1q_f64(ap.add(off)), vld1q_f64(bp.add(off)));
            acc1 = vfmaq_f64(acc1, vld1q_f64(ap.add(off + 2)), vld1q_f64(bp.add(off + 2)));
            acc2 = vfmaq_f64(acc2, vld1q_f64(ap.add(off + 4)), vld1q_f64(bp.add(off + 4)));
            acc3 = vfmaq_f64(acc3, vld1q_f64(ap.add(off + 6)), vld1q_f64(bp.add(off + 6)));
        }

        // Reduce 4 accumulators
        acc0 = vaddq_f64(acc0, acc1);
        acc2 = vaddq_f64(acc2, acc3);
        acc0 = vaddq_f64(acc0, acc2);
        let mut sum = vaddvq_f64(acc0);

        // Remainder: up to 7 elements — handle pairs then scalar
        let tail = chunks * 8;
        let remaining = n - tail;
        let rem_pairs = remaining / 2;
        let mut acc_rem = vdupq_n_f64(0.0);
        for i in 0..rem_pairs {
            let off = tail + i * 2;
            acc_rem = vfmaq_f64(acc_rem, vld1q_f64(ap.add(off)), vld1q_f64(bp.add(off)));
        }
        sum += vaddvq_f64(acc_rem);

        let scalar_start = tail + rem_pairs * 2;
        for i in scalar_start..n {
            sum += a[i] * b[i];
        }
        sum
    }
}

/// Matrix multiply C += A * B using NEON with register-blocked micro-kernel.
///
/// Uses an MR×NR (4×4) register-blocked micro-kernel that accumulates the full
/// k-sum in 8 NEON registers before writing back to C, reducing memory traffic
/// from O(m·k·n) to O(m·n) stores. Technique inspired by nano-gemm
/// (Sarah Quinones, <https://github.com/sarah-quinones/nano-gemm>).
///
/// `a` is m×k, `b` is k×n, `c` is m×n (row-major flat slices).
/// Row-major indexing: element (row, col) is at `row * ncols + col`.
#[inline]
pub fn gemm(a: &[f64], b: &[f64], c: &mut [f64], m: usize, k: usize, n: usize) {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(c.len(), m * n);

    const MR: usize = 4;
    const NR: usize = 4; // 2 NEON registers × 2 f64 lanes

    let m_full = (m / MR) * MR;
    let n_full = (n / NR) * NR;

    // Interior: full MR×NR tiles, register-blocked
    for ib in 0..m_full / MR {
        let i0 = ib * MR;
        for jb in 0..n_full / NR {
            let j0 = jb * NR;
            unsafe { microkernel_4x4(a, b, c, k, n, i0, j0); }
        }
    }

    // Right edge: cols n_full..n, rows 0..m_full
    // Handle pairs of remaining columns with MR×2 SIMD mini-kernel
    let mut j0 = n_full;
    while j0 + 2 <= n {
        for ib in 0..m_full / MR {
            let i0 = ib * MR;
            unsafe { microkernel_4x2(a, b, c, k, n, i0, j0); }
        }
        j0 += 2;
    }

    // Scalar tail: any single remaining column
    if j0 < n {
        for i in 0..m_full {
            for p in 0..k {
                c[i * n + j0] += a[i * k + p] * b[p * n + j0];
            }
        }
    }

    // Bottom edge: rows m_full..m, all cols (SIMD i-p-j on inner loop)
    let j_simd = n / 2;
    let j_tail = j_simd * 2;
    for i in m_full..m {
        for p in 0..k {
            let a_ip = a[i * k + p];
            let b_row = p * n;
            let c_row = i * n;
            unsafe {
                let va = vdupq_n_f64(a_ip);
                for j in 0..j_simd {
                    let offset = j * 2;
                    let vc = vld1q_f64(c.as_ptr().add(c_row + offset));
                    let vb = vld1q_f64(b.as_ptr().add(b_row + offset));
                    vst1q_f64(c.as_mut_ptr().add(c_row + offset), vfmaq_f64(vc, va, vb));
                }
            }
            for j in j_tail..n {
                c[c_row + j] += a_ip * b[b_row + j];
            }
        }
    }
}

/// Register-blocked 4×4 micro-kernel: accumulates C[i0..i0+4, j0..j0+4] in
/// 8 NEON registers across the full k-loop, writing C only once.
#[inline(always)]
unsafe fn microkernel_4x4(
    a: &[f64], b: &[f64], c: &mut [f64],
    k: usize, n: usize, i0: usize, j0: usize,
) {
    unsafe {
        let a_ptr = a.as_ptr();
        let b_ptr = b.as_ptr();

        // 8 accumulator registers: 4 rows × 2 vectors
        let mut acc00 = vdupq_n_f64(0.0);
        let mut acc01 = vdupq_n_f64(0.0);
        let mut acc10 = vdupq_n_f64(0.0);
        let mut acc11 = vdupq_n_f64(0.0);
        let mut acc20 = vdupq_n_f64(0.0);
        let mut acc21 = vdupq_n_f64(0.0);
        let mut acc30 = vdupq_n_f64(0.0);
        let mut acc31 = vdupq_n_f64(0.0);

        for p in 0..k {
            let b_off = p * n + j0;
            let b0 = vld1q_f64(b_ptr.add(b_off));
            let b1 = vld1q_f64(b_ptr.add(b_off + 2));

            let a0 = vdupq_n_f64(*a_ptr.add(i0 * k + p));
            acc00 = vfmaq_f64(acc00, b0, a0);
            acc01 = vfmaq_f64(acc01, b1, a0);

            let a1 = vdupq_n_f64(*a_ptr.add((i0 + 1) * k + p));
            acc10 = vfmaq_f64(acc10, b0, a1);
            acc11 = vfmaq_f64(acc11, b1, a1);

            let a2 = vdupq_n_f64(*a_ptr.add((i0 + 2) * k + p));
            acc20 = vfmaq_f64(acc20, b0, a2);
            acc21 = vfmaq_f64(acc21, b1, a2);

            let a3 = vdupq_n_f64(*a_ptr.add((i0 + 3) * k + p));
            acc30 = vfmaq_f64(acc30, b0, a3);
            acc31 = vfmaq_f64(acc31, b1, a3);
        }

        // Write back: C += acc
        let c_ptr = c.as_mut_ptr();

        let off0 = i0 * n + j0;
        vst1q_f64(c_ptr.add(off0), vaddq_f64(vld1q_f64(c_ptr.add(off0)), acc00));
        vst1q_f64(c_ptr.add(off0 + 2), vaddq_f64(vld1q_f64(c_ptr.add(off0 + 2)), acc01));

        let off1 = (i0 + 1) * n + j0;
        vst1q_f64(c_ptr.add(off1), vaddq_f64(vld1q_f64(c_ptr.add(off1)), acc10));
        vst1q_f64(c_ptr.add(off1 + 2), vaddq_f64(vld1q_f64(c_ptr.add(off1 + 2)), acc11));

        let off2 = (i0 + 2) * n + j0;
        vst1q_f64(c_ptr.add(off2), vaddq_f64(vld1q_f64(c_ptr.add(off2)), acc20));
        vst1q_f64(c_ptr.add(off2 + 2), vaddq_f64(vld1q_f64(c_ptr.add(off2 + 2)), acc21));

        let off3 = (i0 + 3) * n + j0;
        vst1q_f64(c_ptr.add(off3), vaddq_f64(vld1q_f64(c_ptr.add(off3)), acc30));
        vst1q_f64(c_ptr.add(off3 + 2), vaddq_f64(vld1q_f64(c_ptr.add(off3 + 2)), acc31));
    }
}

/// Register-blocked 4×2 mini-kernel for right-edge columns: accumulates
/// C[i0..i0+4, j0..j0+2] in 4 NEON registers across the full k-loop.
#[inline(always)]
unsafe fn microkernel_4x2(
    a: &[f64], b: &[f64], c: &mut [f64],
    k: usize, n: usize, i0: usize, j0: usize,
) {
    unsafe {
        let a_ptr = a.as_ptr();
        let b_ptr = b.as_ptr();

        // 4 accumulator registers: 4 rows × 1 vector (2 f64)
        let mut acc0 = vdupq_n_f64(0.0);
        let mut acc1 = vdupq_n_f64(0.0);
        let mut acc2 = vdupq_n_f64(0.0);
        let mut acc3 = vdupq_n_f64(0.0);

        for p in 0..k {
            let b0 = vld1q_f64(b_ptr.add(p * n + j0));

            acc0 = vfmaq_f64(acc0, b0, vdupq_n_f64(*a_ptr.add(i0 * k + p)));
            acc1 = vfmaq_f64(acc1, b0, vdupq_n_f64(*a_ptr.add((i0 + 1) * k + p)));
            acc2 = vfmaq_f64(acc2, b0, vdupq_n_f64(*a_ptr.add((i0 + 2) * k + p)));
            acc3 = vfmaq_f64(acc3, b0, vdupq_n_f64(*a_ptr.add((i0 + 3) * k + p)));
        }

        let c_ptr = c.as_mut_ptr();
        let off0 = i0 * n + j0;
        vst1q_f64(c_ptr.add(off0), vaddq_f64(vld1q_f64(c_ptr.add(off0)), acc0));
        let off1 = (i0 + 1) * n + j0;
        vst1q_f64(c_ptr.add(off1), vaddq_f64(vld1q_f64(c_ptr.add(off1)), acc1));
        let off2 = (i0 + 2) * n + j0;
        vst1q_f64(c_ptr.add(off2), vaddq_f64(vld1q_f64(c_ptr.add(off2)), acc2));
        let off3 = (i0 + 3) * n + j0;
        vst1q_f64(c_ptr.add(off3), vaddq_f64(vld1q_f64(c_ptr.add(off3)), acc3));
    }
}

/// Out-of-place transpose: dst (cols×rows) = src (rows×cols)ᵀ using NEON
/// 2×2 micro-tiles inside 32×32 cache blocks.
///
/// A 2×2 tile is transposed entirely in registers with zip shuffles, so
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
                        let r0 = vld1q_f64(sp.add(i * cols + j));
                        let r1 = vld1q_f64(sp.add((i + 1) * cols + j));
                        // [src(i,j), src(i+1,j)] and [src(i,j+1), src(i+1,j+1)]
                        let t0 = vzip1q_f64(r0, r1);
                        let t1 = vzip2q_f64(r0, r1);
                        vst1q_f64(dp.add(j * rows + i), t0);
                        vst1q_f64(dp.add((j + 1) * rows + i), t1);
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
            let va = vld1q_f64(a.as_ptr().add(offset));
            let vb = vld1q_f64(b.as_ptr().add(offset));
            vst1q_f64(out.as_mut_ptr().add(offset), vaddq_f64(va, vb));
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
            let va = vld1q_f64(a.as_ptr().add(offset));
            let vb = vld1q_f64(b.as_ptr().add(offset));
            vst1q_f64(out.as_mut_ptr().add(offset), vsubq_f64(va, vb));
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
            let va = vld1q_f64(a.as_ptr().add(offset));
            let vb = vld1q_f64(b.as_ptr().add(offset));
            vst1q_f64(out.as_mut_ptr().add(offset), vmulq_f64(va, vb));
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
            let va = vld1q_f64(a.as_ptr().add(offset));
            let vb = vld1q_f64(b.as_ptr().add(offset));
            vst1q_f64(out.as_mut_ptr().add(offset), vdivq_f64(va, vb));
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
            let va = vld1q_f64(a.as_ptr().add(offset));
            let vb = vld1q_f64(b.as_ptr().add(offset));
            vst1q_f64(a.as_mut_ptr().add(offset), vaddq_f64(va, vb));
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
        let vs = vdupq_n_f64(scalar);
        for i in 0..chunks {
            let offset = i * 2;
            let va = vld1q_f64(a.as_ptr().add(offset));
            vst1q_f64(out.as_mut_ptr().add(offset), vmulq_f64(va, vs));
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
        let va = vdupq_n_f64(alpha);
        for i in 0..chunks {
            let offset = i * 2;
            let vy = vld1q_f64(y.as_ptr().add(offset));
            let vx = vld1q_f64(x.as_ptr().add(offset));
            vst1q_f64(y.as_mut_ptr().add(offset), vfmsq_f64(vy, va, vx));
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
            let va = vld1q_f64(a.as_ptr().add(offset));
            vst1q_f64(out.as_mut_ptr().add(offset), vsqrtq_f64(va));
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

        let mut acc0 = vdupq_n_f64(0.0);
        let mut acc1 = vdupq_n_f64(0.0);
        let mut acc2 = vdupq_n_f64(0.0);
        let mut acc3 = vdupq_n_f64(0.0);

        for i in 0..chunks {
            let off = i * 8;
            acc0 = vaddq_f64(acc0, vld1q_f64(ap.add(off)));
            acc1 = vaddq_f64(acc1, vld1q_f64(ap.add(off + 2)));
            acc2 = vaddq_f64(acc2, vld1q_f64(ap.add(off + 4)));
            acc3 = vaddq_f64(acc3, vld1q_f64(ap.add(off + 6)));
        }

        acc0 = vaddq_f64(acc0, acc1);
        acc2 = vaddq_f64(acc2, acc3);
        acc0 = vaddq_f64(acc0, acc2);
        let mut total = vaddvq_f64(acc0);

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
        let mut acc = vdupq_n_f64(0.0);
        for i in 0..chunks {
            let va = vld1q_f64(a.as_ptr().add(i * 2));
            acc = vfmaq_f64(acc, va, va);
        }
        let mut total = vaddvq_f64(acc);

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
        let mut acc = vdupq_n_f64(0.0);
        for i in 0..chunks {
            let va = vld1q_f64(a.as_ptr().add(i * 2));
            acc = vaddq_f64(acc, vabsq_f64(va));
        }
        let mut total = vaddvq_f64(acc);

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
        let mut vbest = vdupq_n_f64(a[0]);
        for i in 0..chunks {
            vbest = vmaxq_f64(vbest, vld1q_f64(a.as_ptr().add(i * 2)));
        }
        let mut best = vmaxvq_f64(vbest);

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
        let mut vbest = vdupq_n_f64(a[0]);
        for i in 0..chunks {
            vbest = vminq_f64(vbest, vld1q_f64(a.as_ptr().add(i * 2)));
        }
        let mut best = vminvq_f64(vbest);

        for i in chunks * 2..n {
            best = best.min(a[i]);
        }
        best
    }
}
