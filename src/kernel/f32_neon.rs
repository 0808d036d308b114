//! NEON-accelerated f32 kernels for aarch64.
//!
//! NEON provides 128-bit registers → 4×f32 lanes.

use core::arch::aarch64::*;

/// Dot product of two f32 slices using NEON.
#[inline]
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    let n = a.len();
    let chunks = n / 4;
    let remainder = n % 4;

    unsafe {
        let mut acc = vdupq_n_f32(0.0);

        for i in 0..chunks {
            let va = vld1q_f32(a.as_ptr().add(i * 4));
            let vb = vld1q_f32(b.as_ptr().add(i * 4));
            acc = vfmaq_f32(acc, va, vb);
        }

        let mut sum = vaddvq_f32(acc);

        let tail = chunks * 4;
        for i in 0..remainder {
            sum += a[tail + i] * b[tail + i];
        }
        sum
    }
}

/// Matrix multiply C += A * B using NEON with register-blocked micro-kernel.
///
/// Uses an MR×NR (4×8) register-blocked micro-kernel that accumulates the full
/// k-sum in 8 NEON registers before writing back to C, reducing memory traffic
/// from O(m·k·n) to O(m·n) stores. Technique inspired by nano-gemm
/// (Sarah Quinones, <https://github.com/sarah-quinones/nano-gemm>).
///
/// `a` is m×k, `b` is k×n, `c` is m×n (row-major flat slices).
/// Row-major indexing: element (row, col) is at `row * ncols + col`.
#[inline]
pub fn gemm(a: &[f32], b: &[f32], c: &mut [f32], m: usize, k: usize, n: usize) {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(c.len(), m * n);

    const MR: usize = 4;
    const NR: usize = 8; // 2 NEON registers × 4 f32 lanes

    let m_full = (m / MR) * MR;
    let n_full = (n / NR) * NR;

    // Interior: full MR×NR tiles, register-blocked
    for ib in 0..m_full / MR {
        let i0 = ib * MR;
        for jb in 0..n_full / NR {
            let j0 = jb * NR;
            unsafe { microkernel_4x8(a, b, c, k, n, i0, j0); }
        }
    }

    // Right edge: cols n_full..n, rows 0..m_full
    let mut j0 = n_full;
    while j0 + 4 <= n {
        for ib in 0..m_full / MR {
            let i0 = ib * MR;
            unsafe { microkernel_4x4(a, b, c, k, n, i0, j0); }
        }
        j0 += 4;
    }
    if j0 < n {
        for i in 0..m_full {
            for p in 0..k {
                let a_ip = a[i * k + p];
                let b_row = p * n;
                let c_row = i * n;
                for j in j0..n {
                    c[c_row + j] += a_ip * b[b_row + j];
                }
            }
        }
    }

    // Bottom edge: rows m_full..m, all cols (SIMD i-p-j on inner loop)
    let j_simd = n / 4;
    let j_tail = j_simd * 4;
    for i in m_full..m {
        for p in 0..k {
            let a_ip = a[i * k + p];
            let b_row = p * n;
            let c_row = i * n;
            unsafe {
                let va = vdupq_n_f32(a_ip);
                for j in 0..j_simd {
                    let offset = j * 4;
                    let vc = vld1q_f32(c.as_ptr().add(c_row + offset));
                    let vb = vld1q_f32(b.as_ptr().add(b_row + offset));
                    vst1q_f32(c.as_mut_ptr().add(c_row + offset), vfmaq_f32(vc, va, vb));
                }
            }
            for j in j_tail..n {
                c[c_row + j] += a_ip * b[b_row + j];
            }
        }
    }
}

/// Register-blocked 4×8 micro-kernel: accumulates C[i0..i0+4, j0..j0+8] in
/// 8 NEON registers across the full k-loop, writing C only once.
#[inline(always)]
unsafe fn microkernel_4x8(
    a: &[f32], b: &[f32], c: &mut [f32],
    k: usize, n: usize, i0: usize, j0: usize,
) {
    unsafe {
        let a_ptr = a.as_ptr();
        let b_ptr = b.as_ptr();

        // 8 accumulator registers: 4 rows × 2 vectors
        let mut acc00 = vdupq_n_f32(0.0);
        let mut acc01 = vdupq_n_f32(0.0);
        let mut acc10 = vdupq_n_f32(0.0);
        let mut acc11 = vdupq_n_f32(0.0);
        let mut acc20 = vdupq_n_f32(0.0);
        let mut acc21 = vdupq_n_f32(0.0);
        let mut acc30 = vdupq_n_f32(0.0);
        let mut acc31 = vdupq_n_f32(0.0);

        for p in 0..k {
            let b_off = p * n + j0;
            let b0 = vld1q_f32(b_ptr.add(b_off));
            let b1 = vld1q_f32(b_ptr.add(b_off + 4));

            let a0 = vdupq_n_f32(*a_ptr.add(i0 * k + p));
            acc00 = vfmaq_f32(acc00, b0, a0);
            acc01 = vfmaq_f32(acc01, b1, a0);

            let a1 = vdupq_n_f32(*a_ptr.add((i0 + 1) * k + p));
            acc10 = vfmaq_f32(acc10, b0, a1);
            acc11 = vfmaq_f32(acc11, b1, a1);

            let a2 = vdupq_n_f32(*a_ptr.add((i0 + 2) * k + p));
            acc20 = vfmaq_f32(acc20, b0, a2);
            acc21 = vfmaq_f32(acc21, b1, a2);

            let a3 = vdupq_n_f32(*a_ptr.add((i0 + 3) * k + p));
            acc30 = vfmaq_f32(acc30, b0, a3);
            acc31 = vfmaq_f32(acc31, b1, a3);
        }

        // Write back: C += acc
        let c_ptr = c.as_mut_ptr();

        let off0 = i0 * n + j0;
        vst1q_f32(c_ptr.add(off0), vaddq_f32(vld1q_f32(c_ptr.add(off0)), acc00));
        vst1q_f32(c_ptr.add(off0 + 4), vaddq_f32(vld1q_f32(c_ptr.add(off0 + 4)), acc01));

        let off1 = (i0 + 1) * n + j0;
        vst1q_f32(c_ptr.add(off1), vaddq_f32(vld1q_f32(c_ptr.add(off1)), acc10));
        vst1q_f32(c_ptr.add(off1 + 4), vaddq_f32(vld1q_f32(c_ptr.add(off1 + 4)), acc11));

        let off2 = (i0 + 2) * n + j0;
        vst1q_f32(c_ptr.add(off2), vaddq_f32(vld1q_f32(c_ptr.add(off2)), acc20));
        vst1q_f32(c_ptr.add(off2 + 4), vaddq_f32(vld1q_f32(c_ptr.add(off2 + 4)), acc21));

        let off3 = (i0 + 3) * n + j0;
        vst1q_f32(c_ptr.add(off3), vaddq_f32(vld1q_f32(c_ptr.add(off3)), acc30));
        vst1q_f32(c_ptr.add(off3 + 4), vaddq_f32(vld1q_f32(c_ptr.add(off3 + 4)), acc31));
    }
}

/// Register-blocked 4×4 mini-kernel for right-edge columns: accumulates
/// C[i0..i0+4, j0..j0+4] in 4 NEON registers across the full k-loop.
#[inline(always)]
unsafe fn microkernel_4x4(
    a: &[f32], b: &[f32], c: &mut [f32],
    k: usize, n: usize, i0: usize, j0: usize,
) {
    unsafe {
        let a_ptr = a.as_ptr();
        let b_ptr = b.as_ptr();

        let mut acc0 = vdupq_n_f32(0.0);
        let mut acc1 = vdupq_n_f32(0.0);
        let mut acc2 = vdupq_n_f32(0.0);
        let mut acc3 = vdupq_n_f32(0.0);

        for p in 0..k {
            let b0 = vld1q_f32(b_ptr.add(p * n + j0));

            acc0 = vfmaq_f32(acc0, b0, vdupq_n_f32(*a_ptr.add(i0 * k + p)));
            acc1 = vfmaq_f32(acc1, b0, vdupq_n_f32(*a_ptr.add((i0 + 1) * k + p)));
            acc2 = vfmaq_f32(acc2, b0, vdupq_n_f32(*a_ptr.add((i0 + 2) * k + p)));
            acc3 = vfmaq_f32(acc3, b0, vdupq_n_f32(*a_ptr.add((i0 + 3) * k + p)));
        }

        let c_ptr = c.as_mut_ptr();
        let off0 = i0 * n + j0;
        vst1q_f32(c_ptr.add(off0), vaddq_f32(vld1q_f32(c_ptr.add(off0)), acc0));
        let off1 = (i0 + 1) * n + j0;
        vst1q_f32(c_ptr.add(off1), vaddq_f32(vld1q_f32(c_ptr.add(off1)), acc1));
        let off2 = (i0 + 2) * n + j0;
        vst1q_f32(c_ptr.add(off2), vaddq_f32(vld1q_f32(c_ptr.add(off2)), acc2));
        let off3 = (i0 + 3) * n + j0;
        vst1q_f32(c_ptr.add(off3), vaddq_f32(vld1q_f32(c_ptr.add(off3)), acc3));
    }
}

/// Out-of-place transpose: dst (cols×rows) = src (rows×cols)ᵀ using NEON
/// 4×4 micro-tiles inside 32×32 cache blocks.
///
/// A 4×4 tile is transposed entirely in registers: two rounds of transpose
/// shuffles (32-bit lanes, then 64-bit lanes), so both loads and stores move
/// full 128-bit lanes.
#[inline]
pub fn transpose(src: &[f32], dst: &mut [f32], rows: usize, cols: usize) {
    debug_assert_eq!(src.len(), rows * cols);
    debug_assert_eq!(dst.len(), rows * cols);

    const B: usize = 32;

    let mut i0 = 0;
    while i0 < rows {
        let i_end = (i0 + B).min(rows);
        let i_quads = i0 + ((i_end - i0) / 4) * 4;
        let mut j0 = 0;
        while j0 < cols {
            let j_end = (j0 + B).min(cols);
            let j_quads = j0 + ((j_end - j0) / 4) * 4;

            unsafe {
                let sp = src.as_ptr();
                let dp = dst.as_mut_ptr();
                let mut i = i0;
                while i < i_quads {
                    let mut j = j0;
                    while j < j_quads {
                        let r0 = vld1q_f32(sp.add(i * cols + j));
                        let r1 = vld1q_f32(sp.add((i + 1) * cols + j));
                        let r2 = vld1q_f32(sp.add((i + 2) * cols + j));
                        let r3 = vld1q_f32(sp.add((i + 3) * cols + j));

                        let t0 = vtrn1q_f32(r0, r1);
                        let t1 = vtrn2q_f32(r0, r1);
                        let t2 = vtrn1q_f32(r2, r3);
                        let t3 = vtrn2q_f32(r2, r3);

                        let out0 = vreinterpretq_f32_f64(vtrn1q_f64(
                            vreinterpretq_f64_f32(t0), vreinterpretq_f64_f32(t2)));
                        let out1 = vreinterpretq_f32_f64(vtrn1q_f64(
                            vreinterpretq_f64_f32(t1), vreinterpretq_f64_f32(t3)));
                        let out2 = vreinterpretq_f32_f64(vtrn2q_f64(
                            vreinterpretq_f64_f32(t0), vreinterpretq_f64_f32(t2)));
                        let out3 = vreinterpretq_f32_f64(vtrn2q_f64(
                            vreinterpretq_f64_f32(t1), vreinterpretq_f64_f32(t3)));

                        vst1q_f32(dp.add(j * rows + i), out0);
                        vst1q_f32(dp.add((j + 1) * rows + i), out1);
                        vst1q_f32(dp.add((j + 2) * rows + i), out2);
                        vst1q_f32(dp.add((j + 3) * rows + i), out3);
                        j += 4;
                    }
                    // Trailing columns (up to 3)
                    for j in j_quads..j_end {
                        for r in 0..4 {
                            dst[j * rows + i + r] = src[(i + r) * cols + j];
                        }
                    }
                    i += 4;
                }
            }
            // Trailing rows (up to 3)
            for i in i_quads..i_end {
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
pub fn add_slices(a: &[f32], b: &[f32], out: &mut [f32]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    let n = a.len();
    let chunks = n / 4;

    unsafe {
        for i in 0..chunks {
            let offset = i * 4;
            let va = vld1q_f32(a.as_ptr().add(offset));
            let vb = vld1q_f32(b.as_ptr().add(offset));
            vst1q_f32(out.as_mut_ptr().add(offset), vaddq_f32(va, vb));
        }
    }

    let tail = chunks * 4;
    for i in tail..n {
        out[i] = a[i] + b[i];
    }
}

/// Element-wise subtraction: out[i] = a[i] - b[i].
#[inline]
pub fn sub_slices(a: &[f32], b: &[f32], out: &mut [f32]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    let n = a.len();
    let chunks = n / 4;

    unsafe {
        for i in 0..chunks {
            let offset = i * 4;
            let va = vld1q_f32(a.as_ptr().add(offset));
            let vb = vld1q_f32(b.as_ptr().add(offset));
            vst1q_f32(out.as_mut_ptr().add(offset), vsubq_f32(va, vb));
        }
    }

    let tail = chunks * 4;
    for i in tail..n {
        out[i] = a[i] - b[i];
    }
}

/// Element-wise product: out[i] = a[i] * b[i].
#[inline]
pub fn mul_slices(a: &[f32], b: &[f32], out: &mut [f32]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    let n = a.len();
    let chunks = n / 4;

    unsafe {
        for i in 0..chunks {
            let offset = i * 4;
            let va = vld1q_f32(a.as_ptr().add(offset));
            let vb = vld1q_f32(b.as_ptr().add(offset));
            vst1q_f32(out.as_mut_ptr().add(offset), vmulq_f32(va, vb));
        }
    }

    let tail = chunks * 4;
    for i in tail..n {
        out[i] = a[i] * b[i];
    }
}

/// Element-wise quotient: out[i] = a[i] / b[i].
#[inline]
pub fn div_slices(a: &[f32], b: &[f32], out: &mut [f32]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    let n = a.len();
    let chunks = n / 4;

    unsafe {
        for i in 0..chunks {
            let offset = i * 4;
            let va = vld1q_f32(a.as_ptr().add(offset));
            let vb = vld1q_f32(b.as_ptr().add(offset));
            vst1q_f32(out.as_mut_ptr().add(offset), vdivq_f32(va, vb));
        }
    }

    let tail = chunks * 4;
    for i in tail..n {
        out[i] = a[i] / b[i];
    }
}

/// In-place accumulate: a[i] += b[i].
#[inline]
pub fn add_assign_slices(a: &mut [f32], b: &[f32]) {
    debug_assert_eq!(a.len(), b.len());
    let n = a.len();
    let chunks = n / 4;

    unsafe {
        for i in 0..chunks {
            let offset = i * 4;
            let va = vld1q_f32(a.as_ptr().add(offset));
            let vb = vld1q_f32(b.as_ptr().add(offset));
            vst1q_f32(a.as_mut_ptr().add(offset), vaddq_f32(va, vb));
        }
    }

    let tail = chunks * 4;
    for i in tail..n {
        a[i] += b[i];
    }
}

/// Scalar multiplication: out[i] = a[i] * scalar.
#[inline]
pub fn scale_slices(a: &[f32], scalar: f32, out: &mut [f32]) {
    debug_assert_eq!(a.len(), out.len());
    let n = a.len();
    let chunks = n / 4;

    unsafe {
        let vs = vdupq_n_f32(scalar);
        for i in 0..chunks {
            let offset = i * 4;
            let va = vld1q_f32(a.as_ptr().add(offset));
            vst1q_f32(out.as_mut_ptr().add(offset), vmulq_f32(va, vs));
        }
    }

    let tail = chunks * 4;
    for i in tail..n {
        out[i] = a[i] * scalar;
    }
}

/// AXPY: y[i] -= alpha * x[i].
#[inline]
pub fn axpy_neg(y: &mut [f32], alpha: f32, x: &[f32]) {
    debug_assert_eq!(y.len(), x.len());
    let n = y.len();
    let chunks = n / 4;

    unsafe {
        let va = vdupq_n_f32(alpha);
        for i in 0..chunks {
            let offset = i * 4;
            let vy = vld1q_f32(y.as_ptr().add(offset));
            let vx = vld1q_f32(x.as_ptr().add(offset));
            vst1q_f32(y.as_mut_ptr().add(offset), vfmsq_f32(vy, va, vx));
        }
    }

    let tail = chunks * 4;
    for i in tail..n {
        y[i] -= alpha * x[i];
    }
}

/// Element-wise square root: out[i] = sqrt(a[i]).
#[inline]
pub fn sqrt_slices(a: &[f32], out: &mut [f32]) {
    debug_assert_eq!(a.len(), out.len());
    let n = a.len();
    let chunks = n / 4;

    unsafe {
        for i in 0..chunks {
            let offset = i * 4;
            let va = vld1q_f32(a.as_ptr().add(offset));
            vst1q_f32(out.as_mut_ptr().add(offset), vsqrtq_f32(va));
        }
    }

    let tail = chunks * 4;
    for i in tail..n {
        out[i] = a[i].sqrt();
    }
}

/// Sum of all elements.
#[inline]
pub fn sum(a: &[f32]) -> f32 {
    let n = a.len();
    let chunks = n / 4;

    unsafe {
        let mut acc = vdupq_n_f32(0.0);
        for i in 0..chunks {
            acc = vaddq_f32(acc, vld1q_f32(a.as_ptr().add(i * 4)));
        }
        let mut total = vaddvq_f32(acc);

        for i in chunks * 4..n {
            total += a[i];
        }
        total
    }
}

/// Sum of squared elements.
#[inline]
pub fn sumsq(a: &[f32]) -> f32 {
    let n = a.len();
    let chunks = n / 4;

    unsafe {
        let mut acc = vdupq_n_f32(0.0);
        for i in 0..chunks {
            let va = vld1q_f32(a.as_ptr().add(i * 4));
            acc = vfmaq_f32(acc, va, va);
        }
        let mut total = vaddvq_f32(acc);

        for i in chunks * 4..n {
            total += a[i] * a[i];
        }
        total
    }
}

/// Sum of absolute values.
#[inline]
pub fn asum(a: &[f32]) -> f32 {
    let n = a.len();
    let chunks = n / 4;

    unsafe {
        let mut acc = vdupq_n_f32(0.0);
        for i in 0..chunks {
            let va = vld1q_f32(a.as_ptr().add(i * 4));
            acc = vaddq_f32(acc, vabsq_f32(va));
        }
        let mut total = vaddvq_f32(acc);

        for i in chunks * 4..n {
            total += a[i].abs();
        }
        total
    }
}

/// Largest element. Caller guarantees a non-empty slice.
#[inline]
pub fn max_val(a: &[f32]) -> f32 {
    debug_assert!(!a.is_empty());
    let n = a.len();
    let chunks = n / 4;

    unsafe {
        let mut vbest = vdupq_n_f32(a[0]);
        for i in 0..chunks {
            vbest = vmaxq_f32(vbest, vld1q_f32(a.as_ptr().add(i * 4)));
        }
        let mut best = vmaxvq_f32(vbest);

        for i in chunks * 4..n {
            best = best.max(a[i]);
        }
        best
    }
}

/// Smallest element. Caller guarantees a non-empty slice.
#[inline]
pub fn min_val(a: &[f32]) -> f32 {
    debug_assert!(!a.is_empty());
    let n = a.len();
    let chunks = n / 4;

    unsafe {
        let mut vbest = vdupq_n_f32(a[0]);
        for i in 0..chunks {
            vbest = vminq_f32(vbest, vld1q_f32(a.as_ptr().add(i * 4)));
        }
        let mut best = vminvq_f32(vbest);

        for i in chunks * 4..n {
            best = best.min(a[i]);
        }
        best
    }
}
