//! SSE2-accelerated f32 kernels for x86_64.
//!
//! SSE2 provides 128-bit registers → 4×f32 lanes.

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Horizontal sum of the 4 lanes of an __m128.
#[inline(always)]
unsafe fn hsum(v: __m128) -> f32 {
    unsafe {
        let shuf = _mm_movehl_ps(v, v);
        let sums = _mm_add_ps(v, shuf);
        let shuf2 = _mm_shuffle_ps(sums, sums, 1);
        _mm_cvtss_f32(_mm_add_ss(sums, shuf2))
    }
}

/// Dot product of two f32 slices using SSE2.
///
/// Uses 4 independent accumulators (16 f32 per iteration) to hide
/// multiply-add latency.
#[inline]
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    let n = a.len();
    let chunks = n / 16; // 4 accumulators × 4 lanes

    unsafe {
        let ap = a.as_ptr();
        let bp = b.as_ptr();

        let mut acc0 = _mm_setzero_ps();
        let mut acc1 = _mm_setzero_ps();
        let mut acc2 = _mm_setzero_ps();
        let mut acc3 = _mm_setzero_ps();

        for i in 0..chunks {
            let off = i * 16;
            acc0 = _mm_add_ps(acc0, _mm_mul_ps(_mm_loadu_ps(ap.add(off)), _mm_loadu_ps(bp.add(off))));
            acc1 = _mm_add_ps(acc1, _mm_mul_ps(_mm_loadu_ps(ap.add(off + 4)), _mm_loadu_ps(bp.add(off + 4))));
            acc2 = _mm_add_ps(acc2, _mm_mul_ps(_mm_loadu_ps(ap.add(off + 8)), _mm_loadu_ps(bp.add(off + 8))));
            acc3 = _mm_add_ps(acc3, _mm_mul_ps(_mm_loadu_ps(ap.add(off + 12)), _mm_loadu_ps(bp.add(off + 12))));
        }

        acc0 = _mm_add_ps(acc0, acc1);
        acc2 = _mm_add_ps(acc2, acc3);
        acc0 = _mm_add_ps(acc0, acc2);
        let mut sum = hsum(acc0);

        // Remainder: up to 15 elements — handle quads then scalar
        let tail = chunks * 16;
        let remaining = n - tail;
        let rem_quads = remaining / 4;
        let mut acc_rem = _mm_setzero_ps();
        for i in 0..rem_quads {
            let off = tail + i * 4;
            acc_rem = _mm_add_ps(acc_rem, _mm_mul_ps(_mm_loadu_ps(ap.add(off)), _mm_loadu_ps(bp.add(off))));
        }
        sum += hsum(acc_rem);

        let scalar_start = tail + rem_quads * 4;
        for i in scalar_start..n {
            sum += a[i] * b[i];
        }
        sum
    }
}

/// Matrix multiply C += A * B using SSE2 with register-blocked micro-kernel.
///
/// Uses an MR×NR (4×8) register-blocked micro-kernel that accumulates the full
/// k-sum in 8 SSE2 registers before writing back to C, reducing memory traffic
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
    const NR: usize = 8; // 2 __m128 vectors × 4 f32 lanes

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
                let va = _mm_set1_ps(a_ip);
                for j in 0..j_simd {
                    let offset = j * 4;
                    let vc = _mm_loadu_ps(c.as_ptr().add(c_row + offset));
                    let vb = _mm_loadu_ps(b.as_ptr().add(b_row + offset));
                    _mm_storeu_ps(c.as_mut_ptr().add(c_row + offset), _mm_add_ps(vc, _mm_mul_ps(va, vb)));
                }
            }
            for j in j_tail..n {
                c[c_row + j] += a_ip * b[b_row + j];
            }
        }
    }
}

/// Register-blocked 4×8 micro-kernel: accumulates C[i0..i0+4, j0..j0+8] in
/// 8 SSE2 registers across the full k-loop, writing C only once.
#[inline(always)]
unsafe fn microkernel_4x8(
    a: &[f32], b: &[f32], c: &mut [f32],
    k: usize, n: usize, i0: usize, j0: usize,
) {
    unsafe {
        let a_ptr = a.as_ptr();
        let b_ptr = b.as_ptr();

        // 8 accumulator registers: 4 rows × 2 vectors
        let mut acc00 = _mm_setzero_ps();
        let mut acc01 = _mm_setzero_ps();
        let mut acc10 = _mm_setzero_ps();
        let mut acc11 = _mm_setzero_ps();
        let mut acc20 = _mm_setzero_ps();
        let mut acc21 = _mm_setzero_ps();
        let mut acc30 = _mm_setzero_ps();
        let mut acc31 = _mm_setzero_ps();

        for p in 0..k {
            let b_off = p * n + j0;
            let b0 = _mm_loadu_ps(b_ptr.add(b_off));
            let b1 = _mm_loadu_ps(b_ptr.add(b_off + 4));

            let a0 = _mm_set1_ps(*a_ptr.add(i0 * k + p));
            acc00 = _mm_add_ps(acc00, _mm_mul_ps(a0, b0));
            acc01 = _mm_add_ps(acc01, _mm_mul_ps(a0, b1));

            let a1 = _mm_set1_ps(*a_ptr.add((i0 + 1) * k + p));
            acc10 = _mm_add_ps(acc10, _mm_mul_ps(a1, b0));
            acc11 = _mm_add_ps(acc11, _mm_mul_ps(a1, b1));

            let a2 = _mm_set1_ps(*a_ptr.add((i0 + 2) * k + p));
            acc20 = _mm_add_ps(acc20, _mm_mul_ps(a2, b0));
            acc21 = _mm_add_ps(acc21, _mm_mul_ps(a2, b1));

            let a3 = _mm_set1_ps(*a_ptr.add((i0 + 3) * k + p));
            acc30 = _mm_add_ps(acc30, _mm_mul_ps(a3, b0));
            acc31 = _mm_add_ps(acc31, _mm_mul_ps(a3, b1));
        }

        // Write back: C += acc
        let c_ptr = c.as_mut_ptr();

        let off0 = i0 * n + j0;
        _mm_storeu_ps(c_ptr.add(off0), _mm_add_ps(_mm_loadu_ps(c_ptr.add(off0)), acc00));
        _mm_storeu_ps(c_ptr.add(off0 + 4), _mm_add_ps(_mm_loadu_ps(c_ptr.add(off0 + 4)), acc01));

        let off1 = (i0 + 1) * n + j0;
        _mm_storeu_ps(c_ptr.add(off1), _mm_add_ps(_mm_loadu_ps(c_ptr.add(off1)), acc10));
        _mm_storeu_ps(c_ptr.add(off1 + 4), _mm_add_ps(_mm_loadu_ps(c_ptr.add(off1 + 4)), acc11));

        let off2 = (i0 + 2) * n + j0;
        _mm_storeu_ps(c_ptr.add(off2), _mm_add_ps(_mm_loadu_ps(c_ptr.add(off2)), acc20));
        _mm_storeu_ps(c_ptr.add(off2 + 4), _mm_add_ps(_mm_loadu_ps(c_ptr.add(off2 + 4)), acc21));

        let off3 = (i0 + 3) * n + j0;
        _mm_storeu_ps(c_ptr.add(off3), _mm_add_ps(_mm_loadu_ps(c_ptr.add(off3)), acc30));
        _mm_storeu_ps(c_ptr.add(off3 + 4), _mm_add_ps(_mm_loadu_ps(c_ptr.add(off3 + 4)), acc31));
    }
}

/// Register-blocked 4×4 mini-kernel for right-edge columns: accumulates
/// C[i0..i0+4, j0..j0+4] in 4 SSE2 registers across the full k-loop.
#[inline(always)]
unsafe fn microkernel_4x4(
    a: &[f32], b: &[f32], c: &mut [f32],
    k: usize, n: usize, i0: usize, j0: usize,
) {
    unsafe {
        let a_ptr = a.as_ptr();
        let b_ptr = b.as_ptr();

        let mut acc0 = _mm_setzero_ps();
        let mut acc1 = _mm_setzero_ps();
        let mut acc2 = _mm_setzero_ps();
        let mut acc3 = _mm_setzero_ps();

        for p in 0..k {
            let b0 = _mm_loadu_ps(b_ptr.add(p * n + j0));

            acc0 = _mm_add_ps(acc0, _mm_mul_ps(_mm_set1_ps(*a_ptr.add(i0 * k + p)), b0));
            acc1 = _mm_add_ps(acc1, _mm_mul_ps(_mm_set1_ps(*a_ptr.add((i0 + 1) * k + p)), b0));
            acc2 = _mm_add_ps(acc2, _mm_mul_ps(_mm_set1_ps(*a_ptr.add((i0 + 2) * k + p)), b0));
            acc3 = _mm_add_ps(acc3, _mm_mul_ps(_mm_set1_ps(*a_ptr.add((i0 + 3) * k + p)), b0));
        }

        let c_ptr = c.as_mut_ptr();
        let off0 = i0 * n + j0;
        _mm_storeu_ps(c_ptr.add(off0), _mm_add_ps(_mm_loadu_ps(c_ptr.add(off0)), acc0));
        let off1 = (i0 + 1) * n + j0;
        _mm_storeu_ps(c_ptr.add(off1), _mm_add_ps(_mm_loadu_ps(c_ptr.add(off1)), acc1));
        let off2 = (i0 + 2) * n + j0;
        _mm_storeu_ps(c_ptr.add(off2), _mm_add_ps(_mm_loadu_ps(c_ptr.add(off2)), acc2));
        let off3 = (i0 + 3) * n + j0;
        _mm_storeu_ps(c_ptr.add(off3), _mm_add_ps(_mm_loadu_ps(c_ptr.add(off3)), acc3));
    }
}

/// Out-of-place transpose: dst (cols×rows) = src (rows×cols)ᵀ using SSE2
/// 4×4 micro-tiles inside 32×32 cache blocks.
///
/// A 4×4 tile is transposed entirely in registers with unpack and move
/// shuffles, so both loads and stores move full 128-bit lanes.
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
                        let r0 = _mm_loadu_ps(sp.add(i * cols + j));
                        let r1 = _mm_loadu_ps(sp.add((i + 1) * cols + j));
                        let r2 = _mm_loadu_ps(sp.add((i + 2) * cols + j));
                        let r3 = _mm_loadu_ps(sp.add((i + 3) * cols + j));

                        let t0 = _mm_unpacklo_ps(r0, r1);
                        let t1 = _mm_unpackhi_ps(r0, r1);
                        let t2 = _mm_unpacklo_ps(r2, r3);
                        let t3 = _mm_unpackhi_ps(r2, r3);

                        let out0 = _mm_movelh_ps(t0, t2);
                        let out1 = _mm_movehl_ps(t2, t0);
                        let out2 = _mm_movelh_ps(t1, t3);
                        let out3 = _mm_movehl_ps(t3, t1);

                        _mm_storeu_ps(dp.add(j * rows + i), out0);
                        _mm_storeu_ps(dp.add((j + 1) * rows + i), out1);
                        _mm_storeu_ps(dp.add((j + 2) * rows + i), out2);
                        _mm_storeu_ps(dp.add((j + 3) * rows + i), out3);
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
            let va = _mm_loadu_ps(a.as_ptr().add(offset));
            let vb = _mm_loadu_ps(b.as_ptr().add(offset));
            _mm_storeu_ps(out.as_mut_ptr().add(offset), _mm_add_ps(va, vb));
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
            let va = _mm_loadu_ps(a.as_ptr().add(offset));
            let vb = _mm_loadu_ps(b.as_ptr().add(offset));
            _mm_storeu_ps(out.as_mut_ptr().add(offset), _mm_sub_ps(va, vb));
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
            let va = _mm_loadu_ps(a.as_ptr().add(offset));
            let vb = _mm_loadu_ps(b.as_ptr().add(offset));
            _mm_storeu_ps(out.as_mut_ptr().add(offset), _mm_mul_ps(va, vb));
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
            let va = _mm_loadu_ps(a.as_ptr().add(offset));
            let vb = _mm_loadu_ps(b.as_ptr().add(offset));
            _mm_storeu_ps(out.as_mut_ptr().add(offset), _mm_div_ps(va, vb));
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
            let va = _mm_loadu_ps(a.as_ptr().add(offset));
            let vb = _mm_loadu_ps(b.as_ptr().add(offset));
            _mm_storeu_ps(a.as_mut_ptr().add(offset), _mm_add_ps(va, vb));
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
        let vs = _mm_set1_ps(scalar);
        for i in 0..chunks {
            let offset = i * 4;
            let va = _mm_loadu_ps(a.as_ptr().add(offset));
            _mm_storeu_ps(out.as_mut_ptr().add(offset), _mm_mul_ps(va, vs));
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
        let va = _mm_set1_ps(alpha);
        for i in 0..chunks {
            let offset = i * 4;
            let vy = _mm_loadu_ps(y.as_ptr().add(offset));
            let vx = _mm_loadu_ps(x.as_ptr().add(offset));
            let result = _mm_sub_ps(vy, _mm_mul_ps(va, vx));
            _mm_storeu_ps(y.as_mut_ptr().add(offset), result);
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
            let va = _mm_loadu_ps(a.as_ptr().add(offset));
            _mm_storeu_ps(out.as_mut_ptr().add(offset), _mm_sqrt_ps(va));
        }
    }

    let tail = chunks * 4;
    for i in tail..n {
        out[i] = a[i].sqrt();
    }
}

/// Sum of all elements.
///
/// Uses 4 independent accumulators (16 f32 per iteration) to hide add latency.
#[inline]
pub fn sum(a: &[f32]) -> f32 {
    let n = a.len();
    let chunks = n / 16;

    unsafe {
        let ap = a.as_ptr();

        let mut acc0 = _mm_setzero_ps();
        let mut acc1 = _mm_setzero_ps();
        let mut acc2 = _mm_setzero_ps();
        let mut acc3 = _mm_setzero_ps();

        for i in 0..chunks {
            let off = i * 16;
            acc0 = _mm_add_ps(acc0, _mm_loadu_ps(ap.add(off)));
            acc1 = _mm_add_ps(acc1, _mm_loadu_ps(ap.add(off + 4)));
            acc2 = _mm_add_ps(acc2, _mm_loadu_ps(ap.add(off + 8)));
            acc3 = _mm_add_ps(acc3, _mm_loadu_ps(ap.add(off + 12)));
        }

        acc0 = _mm_add_ps(acc0, acc1);
        acc2 = _mm_add_ps(acc2, acc3);
        acc0 = _mm_add_ps(acc0, acc2);
        let mut total = hsum(acc0);

        for i in chunks * 16..n {
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
        let mut acc = _mm_setzero_ps();
        for i in 0..chunks {
            let va = _mm_loadu_ps(a.as_ptr().add(i * 4));
            acc = _mm_add_ps(acc, _mm_mul_ps(va, va));
        }
        let mut total = hsum(acc);

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
        // Clearing the sign bit is abs for IEEE floats
        let sign = _mm_set1_ps(-0.0);
        let mut acc = _mm_setzero_ps();
        for i in 0..chunks {
            let va = _mm_loadu_ps(a.as_ptr().add(i * 4));
            acc = _mm_add_ps(acc, _mm_andnot_ps(sign, va));
        }
        let mut total = hsum(acc);

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
        let mut vbest = _mm_set1_ps(a[0]);
        for i in 0..chunks {
            vbest = _mm_max_ps(vbest, _mm_loadu_ps(a.as_ptr().add(i * 4)));
        }
        let shuf = _mm_movehl_ps(vbest, vbest);
        let maxes = _mm_max_ps(vbest, shuf);
        let shuf2 = _mm_shuffle_ps(maxes, maxes, 1);
        let mut best = _mm_cvtss_f32(_mm_max_ss(maxes, shuf2));

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
        let mut vbest = _mm_set1_ps(a[0]);
        for i in 0..chunks {
            vbest = _mm_min_ps(vbest, _mm_loadu_ps(a.as_ptr().add(i * 4)));
        }
        let shuf = _mm_movehl_ps(vbest, vbest);
        let mins = _mm_min_ps(vbest, shuf);
        let shuf2 = _mm_shuffle_ps(mins, mins, 1);
        let mut best = _mm_cvtss_f32(_mm_min_ss(mins, shuf2));

        for i in chunks * 4..n {
            best = best.min(a[i]);
        }
        best
    }
}
