//! SIMD-accelerated kernels with compile-time architecture dispatch.
//!
//! This module is private — it provides internal acceleration for matrix
//! and vector operations. The public API is unchanged.
//!
//! ## Dispatch strategy
//!
//! TypeId-based dispatch at monomorphization time: for `f32`/`f64`, the
//! compiler selects SIMD kernels and dead-code-eliminates the fallback.
//! For all other types (integers), the scalar fallback is used.
//!
//! ## Matrix multiply
//!
//! All gemm kernels use register-blocked MR×NR micro-kernels that
//! accumulate the k-sum in SIMD registers before writing C once,
//! reducing memory traffic from O(m·k·n) to O(m·n) stores. This technique
//! is inspired by [nano-gemm](https://github.com/sarah-quinones/nano-gemm)
//! and [faer](https://github.com/sarah-quinones/faer-rs) by Sarah Quinones.
//!
//! Storage is row-major, so micro-kernels vectorize along matrix rows:
//! B rows are loaded as vectors and A elements are broadcast.
//!
//! ## Architecture support
//!
//! | Arch      | ISA    | f64 tile | f32 tile |
//! |-----------|--------|----------|----------|
//! | `aarch64` | NEON   | 4×4      | 4×8      |
//! | `x86_64`  | SSE2   | 4×4      | 4×8      |
//! | other     | scalar | 4×4      | 4×4      |

pub(crate) mod scalar;

#[cfg(target_arch = "aarch64")]
pub(crate) mod f64_neon;
#[cfg(target_arch = "aarch64")]
pub(crate) mod f32_neon;

#[cfg(target_arch = "x86_64")]
pub(crate) mod f64_sse2;
#[cfg(target_arch = "x86_64")]
pub(crate) mod f32_sse2;

use core::any::TypeId;

use crate::traits::{FloatScalar, Scalar};

/// Dispatch dot product to SIMD or scalar fallback.
#[inline]
pub(crate) fn dot_dispatch<T: Scalar>(a: &[T], b: &[T]) -> T {
    #[cfg(target_arch = "aarch64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let b = unsafe { &*(b as *const [T] as *const [f64]) };
            let result = f64_neon::dot(a, b);
            return unsafe { *(&result as *const f64 as *const T) };
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let b = unsafe { &*(b as *const [T] as *const [f32]) };
            let result = f32_neon::dot(a, b);
            return unsafe { *(&result as *const f32 as *const T) };
        }
    }
    #[cfg(target_arch = "x86_64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let b = unsafe { &*(b as *const [T] as *const [f64]) };
            let result = f64_sse2::dot(a, b);
            return unsafe { *(&result as *const f64 as *const T) };
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let b = unsafe { &*(b as *const [T] as *const [f32]) };
            let result = f32_sse2::dot(a, b);
            return unsafe { *(&result as *const f32 as *const T) };
        }
    }
    scalar::dot(a, b)
}

/// Dispatch matrix multiply to SIMD or scalar fallback.
///
/// `c` must be zero-initialized. Computes `C += A * B` in-place.
#[inline]
pub(crate) fn gemm_dispatch<T: Scalar>(
    a: &[T],
    b: &[T],
    c: &mut [T],
    m: usize,
    k: usize,
    n: usize,
) {
    #[cfg(target_arch = "aarch64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let b = unsafe { &*(b as *const [T] as *const [f64]) };
            let c = unsafe { &mut *(c as *mut [T] as *mut [f64]) };
            f64_neon::gemm(a, b, c, m, k, n);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let b = unsafe { &*(b as *const [T] as *const [f32]) };
            let c = unsafe { &mut *(c as *mut [T] as *mut [f32]) };
            f32_neon::gemm(a, b, c, m, k, n);
            return;
        }
    }
    #[cfg(target_arch = "x86_64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let b = unsafe { &*(b as *const [T] as *const [f64]) };
            let c = unsafe { &mut *(c as *mut [T] as *mut [f64]) };
            f64_sse2::gemm(a, b, c, m, k, n);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let b = unsafe { &*(b as *const [T] as *const [f32]) };
            let c = unsafe { &mut *(c as *mut [T] as *mut [f32]) };
            f32_sse2::gemm(a, b, c, m, k, n);
            return;
        }
    }
    scalar::gemm(a, b, c, m, k, n);
}

/// Dispatch out-of-place transpose to SIMD or scalar fallback.
///
/// `dst` (cols×rows) receives `src` (rows×cols) transposed, both row-major.
#[inline]
pub(crate) fn transpose_dispatch<T: Scalar>(src: &[T], dst: &mut [T], rows: usize, cols: usize) {
    #[cfg(target_arch = "aarch64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let src = unsafe { &*(src as *const [T] as *const [f64]) };
            let dst = unsafe { &mut *(dst as *mut [T] as *mut [f64]) };
            f64_neon::transpose(src, dst, rows, cols);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let src = unsafe { &*(src as *const [T] as *const [f32]) };
            let dst = unsafe { &mut *(dst as *mut [T] as *mut [f32]) };
            f32_neon::transpose(src, dst, rows, cols);
            return;
        }
    }
    #[cfg(target_arch = "x86_64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let src = unsafe { &*(src as *const [T] as *const [f64]) };
            let dst = unsafe { &mut *(dst as *mut [T] as *mut [f64]) };
            f64_sse2::transpose(src, dst, rows, cols);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let src = unsafe { &*(src as *const [T] as *const [f32]) };
            let dst = unsafe { &mut *(dst as *mut [T] as *mut [f32]) };
            f32_sse2::transpose(src, dst, rows, cols);
            return;
        }
    }
    scalar::transpose(src, dst, rows, cols);
}

/// Dispatch element-wise addition to SIMD or scalar fallback.
#[inline]
pub(crate) fn add_slices_dispatch<T: Scalar>(a: &[T], b: &[T], out: &mut [T]) {
    #[cfg(target_arch = "aarch64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let b = unsafe { &*(b as *const [T] as *const [f64]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f64]) };
            f64_neon::add_slices(a, b, out);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let b = unsafe { &*(b as *const [T] as *const [f32]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f32]) };
            f32_neon::add_slices(a, b, out);
            return;
        }
    }
    #[cfg(target_arch = "x86_64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let b = unsafe { &*(b as *const [T] as *const [f64]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f64]) };
            f64_sse2::add_slices(a, b, out);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let b = unsafe { &*(b as *const [T] as *const [f32]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f32]) };
            f32_sse2::add_slices(a, b, out);
            return;
        }
    }
    scalar::add_slices(a, b, out);
}

/// Dispatch element-wise subtraction to SIMD or scalar fallback.
#[inline]
pub(crate) fn sub_slices_dispatch<T: Scalar>(a: &[T], b: &[T], out: &mut [T]) {
    #[cfg(target_arch = "aarch64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let b = unsafe { &*(b as *const [T] as *const [f64]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f64]) };
            f64_neon::sub_slices(a, b, out);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let b = unsafe { &*(b as *const [T] as *const [f32]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f32]) };
            f32_neon::sub_slices(a, b, out);
            return;
        }
    }
    #[cfg(target_arch = "x86_64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let b = unsafe { &*(b as *const [T] as *const [f64]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f64]) };
            f64_sse2::sub_slices(a, b, out);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let b = unsafe { &*(b as *const [T] as *const [f32]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f32]) };
            f32_sse2::sub_slices(a, b, out);
            return;
        }
    }
    scalar::sub_slices(a, b, out);
}

/// Dispatch element-wise multiplication to SIMD or scalar fallback.
#[inline]
pub(crate) fn mul_slices_dispatch<T: Scalar>(a: &[T], b: &[T], out: &mut [T]) {
    #[cfg(target_arch = "aarch64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let b = unsafe { &*(b as *const [T] as *const [f64]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f64]) };
            f64_neon::mul_slices(a, b, out);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let b = unsafe { &*(b as *const [T] as *const [f32]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f32]) };
            f32_neon::mul_slices(a, b, out);
            return;
        }
    }
    #[cfg(target_arch = "x86_64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let b = unsafe { &*(b as *const [T] as *const [f64]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f64]) };
            f64_sse2::mul_slices(a, b, out);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let b = unsafe { &*(b as *const [T] as *const [f32]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f32]) };
            f32_sse2::mul_slices(a, b, out);
            return;
        }
    }
    scalar::mul_slices(a, b, out);
}

/// Dispatch element-wise division to SIMD or scalar fallback.
#[inline]
pub(crate) fn div_slices_dispatch<T: Scalar>(a: &[T], b: &[T], out: &mut [T]) {
    #[cfg(target_arch = "aarch64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let b = unsafe { &*(b as *const [T] as *const [f64]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f64]) };
            f64_neon::div_slices(a, b, out);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let b = unsafe { &*(b as *const [T] as *const [f32]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f32]) };
            f32_neon::div_slices(a, b, out);
            return;
        }
    }
    #[cfg(target_arch = "x86_64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let b = unsafe { &*(b as *const [T] as *const [f64]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f64]) };
            f64_sse2::div_slices(a, b, out);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let b = unsafe { &*(b as *const [T] as *const [f32]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f32]) };
            f32_sse2::div_slices(a, b, out);
            return;
        }
    }
    scalar::div_slices(a, b, out);
}

/// Dispatch in-place accumulation to SIMD or scalar fallback.
#[inline]
pub(crate) fn add_assign_slices_dispatch<T: Scalar>(a: &mut [T], b: &[T]) {
    #[cfg(target_arch = "aarch64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &mut *(a as *mut [T] as *mut [f64]) };
            let b = unsafe { &*(b as *const [T] as *const [f64]) };
            f64_neon::add_assign_slices(a, b);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &mut *(a as *mut [T] as *mut [f32]) };
            let b = unsafe { &*(b as *const [T] as *const [f32]) };
            f32_neon::add_assign_slices(a, b);
            return;
        }
    }
    #[cfg(target_arch = "x86_64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &mut *(a as *mut [T] as *mut [f64]) };
            let b = unsafe { &*(b as *const [T] as *const [f64]) };
            f64_sse2::add_assign_slices(a, b);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &mut *(a as *mut [T] as *mut [f32]) };
            let b = unsafe { &*(b as *const [T] as *const [f32]) };
            f32_sse2::add_assign_slices(a, b);
            return;
        }
    }
    scalar::add_assign_slices(a, b);
}

/// Dispatch scalar multiplication to SIMD or scalar fallback.
#[inline]
pub(crate) fn scale_slices_dispatch<T: Scalar>(a: &[T], scalar: T, out: &mut [T]) {
    #[cfg(target_arch = "aarch64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let s = unsafe { *(&scalar as *const T as *const f64) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f64]) };
            f64_neon::scale_slices(a, s, out);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let s = unsafe { *(&scalar as *const T as *const f32) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f32]) };
            f32_neon::scale_slices(a, s, out);
            return;
        }
    }
    #[cfg(target_arch = "x86_64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let s = unsafe { *(&scalar as *const T as *const f64) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f64]) };
            f64_sse2::scale_slices(a, s, out);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let s = unsafe { *(&scalar as *const T as *const f32) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f32]) };
            f32_sse2::scale_slices(a, s, out);
            return;
        }
    }
    scalar::scale_slices(a, scalar, out);
}

/// Dispatch AXPY: y[i] -= alpha * x[i].
///
/// For short slices (< 8 elements), uses a scalar loop to avoid the overhead
/// of SIMD dispatch and register setup, which dominates at small sizes.
#[inline]
pub(crate) fn axpy_neg_dispatch<T: Scalar>(y: &mut [T], alpha: T, x: &[T]) {
    let n = y.len();
    if n < 8 {
        for i in 0..n {
            y[i] = y[i] - alpha * x[i];
        }
        return;
    }
    #[cfg(target_arch = "aarch64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let y = unsafe { &mut *(y as *mut [T] as *mut [f64]) };
            let a = unsafe { *(&alpha as *const T as *const f64) };
            let x = unsafe { &*(x as *const [T] as *const [f64]) };
            f64_neon::axpy_neg(y, a, x);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let y = unsafe { &mut *(y as *mut [T] as *mut [f32]) };
            let a = unsafe { *(&alpha as *const T as *const f32) };
            let x = unsafe { &*(x as *const [T] as *const [f32]) };
            f32_neon::axpy_neg(y, a, x);
            return;
        }
    }
    #[cfg(target_arch = "x86_64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let y = unsafe { &mut *(y as *mut [T] as *mut [f64]) };
            let a = unsafe { *(&alpha as *const T as *const f64) };
            let x = unsafe { &*(x as *const [T] as *const [f64]) };
            f64_sse2::axpy_neg(y, a, x);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let y = unsafe { &mut *(y as *mut [T] as *mut [f32]) };
            let a = unsafe { *(&alpha as *const T as *const f32) };
            let x = unsafe { &*(x as *const [T] as *const [f32]) };
            f32_sse2::axpy_neg(y, a, x);
            return;
        }
    }
    scalar::axpy_neg(y, alpha, x);
}

/// Dispatch element-wise square root to SIMD or scalar fallback.
#[inline]
pub(crate) fn sqrt_slices_dispatch<T: FloatScalar>(a: &[T], out: &mut [T]) {
    #[cfg(target_arch = "aarch64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f64]) };
            f64_neon::sqrt_slices(a, out);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f32]) };
            f32_neon::sqrt_slices(a, out);
            return;
        }
    }
    #[cfg(target_arch = "x86_64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f64]) };
            f64_sse2::sqrt_slices(a, out);
            return;
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f32]) };
            f32_sse2::sqrt_slices(a, out);
            return;
        }
    }
    scalar::sqrt_slices(a, out);
}

/// Dispatch element sum to SIMD or scalar fallback.
#[inline]
pub(crate) fn sum_dispatch<T: Scalar>(a: &[T]) -> T {
    #[cfg(target_arch = "aarch64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let result = f64_neon::sum(a);
            return unsafe { *(&result as *const f64 as *const T) };
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let result = f32_neon::sum(a);
            return unsafe { *(&result as *const f32 as *const T) };
        }
    }
    #[cfg(target_arch = "x86_64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let result = f64_sse2::sum(a);
            return unsafe { *(&result as *const f64 as *const T) };
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let result = f32_sse2::sum(a);
            return unsafe { *(&result as *const f32 as *const T) };
        }
    }
    scalar::sum(a)
}

/// Dispatch sum of squares to SIMD or scalar fallback.
#[inline]
pub(crate) fn sumsq_dispatch<T: Scalar>(a: &[T]) -> T {
    #[cfg(target_arch = "aarch64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let result = f64_neon::sumsq(a);
            return unsafe { *(&result as *const f64 as *const T) };
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let result = f32_neon::sumsq(a);
            return unsafe { *(&result as *const f32 as *const T) };
        }
    }
    #[cfg(target_arch = "x86_64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let result = f64_sse2::sumsq(a);
            return unsafe { *(&result as *const f64 as *const T) };
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let result = f32_sse2::sumsq(a);
            return unsafe { *(&result as *const f32 as *const T) };
        }
    }
    scalar::sumsq(a)
}

/// Dispatch sum of magnitudes to SIMD or scalar fallback.
#[inline]
pub(crate) fn asum_dispatch<T>(a: &[T]) -> T
where
    T: Scalar + core::ops::Neg<Output = T> + PartialOrd,
{
    #[cfg(target_arch = "aarch64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let result = f64_neon::asum(a);
            return unsafe { *(&result as *const f64 as *const T) };
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let result = f32_neon::asum(a);
            return unsafe { *(&result as *const f32 as *const T) };
        }
    }
    #[cfg(target_arch = "x86_64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let result = f64_sse2::asum(a);
            return unsafe { *(&result as *const f64 as *const T) };
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let result = f32_sse2::asum(a);
            return unsafe { *(&result as *const f32 as *const T) };
        }
    }
    scalar::asum(a)
}

/// Dispatch max element to SIMD or scalar fallback. Caller guarantees a
/// non-empty slice.
#[inline]
pub(crate) fn max_val_dispatch<T: Scalar + PartialOrd>(a: &[T]) -> T {
    #[cfg(target_arch = "aarch64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let result = f64_neon::max_val(a);
            return unsafe { *(&result as *const f64 as *const T) };
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let result = f32_neon::max_val(a);
            return unsafe { *(&result as *const f32 as *const T) };
        }
    }
    #[cfg(target_arch = "x86_64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let result = f64_sse2::max_val(a);
            return unsafe { *(&result as *const f64 as *const T) };
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let result = f32_sse2::max_val(a);
            return unsafe { *(&result as *const f32 as *const T) };
        }
    }
    scalar::max_val(a)
}

/// Dispatch min element to SIMD or scalar fallback. Caller guarantees a
/// non-empty slice.
#[inline]
pub(crate) fn min_val_dispatch<T: Scalar + PartialOrd>(a: &[T]) -> T {
    #[cfg(target_arch = "aarch64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let result = f64_neon::min_val(a);
            return unsafe { *(&result as *const f64 as *const T) };
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let result = f32_neon::min_val(a);
            return unsafe { *(&result as *const f32 as *const T) };
        }
    }
    #[cfg(target_arch = "x86_64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f64>() {
            let a = unsafe { &*(a as *const [T] as *const [f64]) };
            let result = f64_sse2::min_val(a);
            return unsafe { *(&result as *const f64 as *const T) };
        }
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let result = f32_sse2::min_val(a);
            return unsafe { *(&result as *const f32 as *const T) };
        }
    }
    scalar::min_val(a)
}
