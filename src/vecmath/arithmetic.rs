//! Element-wise arithmetic over slices.
//!
//! Binary slice-slice operations go through the kernel dispatchers, so
//! `f32`/`f64` take the SIMD paths. Scalar-broadcast variants and the modulo
//! pair are plain loops.

use alloc::vec;
use alloc::vec::Vec;

use crate::kernel;
use crate::traits::{FloatScalar, Scalar};

/// Element-wise sum of two equal-length slices.
///
/// # Panics
///
/// Panics if the slices differ in length.
///
/// # Example
///
/// ```
/// use densa::vecmath::add;
///
/// assert_eq!(add(&[1.0, 2.0], &[3.0, 4.0]), vec![4.0, 6.0]);
/// ```
pub fn add<T: Scalar>(x: &[T], y: &[T]) -> Vec<T> {
    assert_eq!(x.len(), y.len(), "length mismatch: {} vs {}", x.len(), y.len());
    let mut out = vec![T::zero(); x.len()];
    kernel::add_slices_dispatch(x, y, &mut out);
    out
}

/// Adds `y` to every element of `x`.
pub fn add_scalar<T: Scalar>(x: &[T], y: T) -> Vec<T> {
    x.iter().map(|&v| v + y).collect()
}

/// Element-wise difference `x[i] - y[i]`.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn sub<T: Scalar>(x: &[T], y: &[T]) -> Vec<T> {
    assert_eq!(x.len(), y.len(), "length mismatch: {} vs {}", x.len(), y.len());
    let mut out = vec![T::zero(); x.len()];
    kernel::sub_slices_dispatch(x, y, &mut out);
    out
}

/// Subtracts `y` from every element of `x`.
pub fn sub_scalar<T: Scalar>(x: &[T], y: T) -> Vec<T> {
    x.iter().map(|&v| v - y).collect()
}

/// Element-wise product `x[i] * y[i]`.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn mul<T: Scalar>(x: &[T], y: &[T]) -> Vec<T> {
    assert_eq!(x.len(), y.len(), "length mismatch: {} vs {}", x.len(), y.len());
    let mut out = vec![T::zero(); x.len()];
    kernel::mul_slices_dispatch(x, y, &mut out);
    out
}

/// Multiplies every element of `x` by `y`.
pub fn mul_scalar<T: Scalar>(x: &[T], y: T) -> Vec<T> {
    let mut out = vec![T::zero(); x.len()];
    kernel::scale_slices_dispatch(x, y, &mut out);
    out
}

/// Element-wise quotient `x[i] / y[i]`.
///
/// # Panics
///
/// Panics if the slices differ in length.
pub fn div<T: Scalar>(x: &[T], y: &[T]) -> Vec<T> {
    assert_eq!(x.len(), y.len(), "length mismatch: {} vs {}", x.len(), y.len());
    let mut out = vec![T::zero(); x.len()];
    kernel::div_slices_dispatch(x, y, &mut out);
    out
}

/// Divides every element of `x` by `y`.
pub fn div_scalar<T: Scalar>(x: &[T], y: T) -> Vec<T> {
    x.iter().map(|&v| v / y).collect()
}

/// Element-wise truncated modulo `x[i] % y[i]`.
///
/// The result carries the sign of the dividend, matching C's `fmod`.
///
/// # Panics
///
/// Panics if the slices differ in length.
///
/// # Example
///
/// ```
/// use densa::vecmath::fmod;
///
/// assert_eq!(fmod(&[5.0, -5.0], &[3.0, 3.0]), vec![2.0, -2.0]);
/// ```
pub fn fmod<T: FloatScalar>(x: &[T], y: &[T]) -> Vec<T> {
    assert_eq!(x.len(), y.len(), "length mismatch: {} vs {}", x.len(), y.len());
    x.iter().zip(y.iter()).map(|(&a, &b)| a % b).collect()
}

/// Element-wise IEEE 754 remainder.
///
/// `x[i] - n * y[i]` where `n` is the integer nearest `x[i] / y[i]`, ties
/// rounding to even. Unlike [`fmod`] the result can have either sign and its
/// magnitude is at most half of `|y[i]|`.
///
/// # Panics
///
/// Panics if the slices differ in length.
///
/// # Example
///
/// ```
/// use densa::vecmath::remainder;
///
/// // 5/3 rounds to 2, so the remainder is 5 - 2*3 = -1
/// assert_eq!(remainder(&[5.0], &[3.0]), vec![-1.0]);
/// ```
pub fn remainder<T: FloatScalar>(x: &[T], y: &[T]) -> Vec<T> {
    assert_eq!(x.len(), y.len(), "length mismatch: {} vs {}", x.len(), y.len());
    x.iter()
        .zip(y.iter())
        .map(|(&a, &b)| {
            let q = a / b;
            let r = q.round();
            // round() breaks ties away from zero; IEEE wants ties to even
            let two = T::one() + T::one();
            let half = T::one() / two;
            let n = if (r - q).abs() == half {
                (q * half).round() * two
            } else {
                r
            };
            a - n * b
        })
        .collect()
}

/// Element-wise square root.
///
/// # Example
///
/// ```
/// use densa::vecmath::sqrt;
///
/// assert_eq!(sqrt(&[4.0, 9.0]), vec![2.0, 3.0]);
/// ```
pub fn sqrt<T: FloatScalar>(x: &[T]) -> Vec<T> {
    let mut out = vec![T::zero(); x.len()];
    kernel::sqrt_slices_dispatch(x, &mut out);
    out
}

/// Dot product of two equal-length slices.
///
/// # Panics
///
/// Panics if the slices differ in length.
///
/// # Example
///
/// ```
/// use densa::vecmath::dot;
///
/// assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
/// ```
pub fn dot<T: Scalar>(x: &[T], y: &[T]) -> T {
    assert_eq!(x.len(), y.len(), "length mismatch: {} vs {}", x.len(), y.len());
    kernel::dot_dispatch(x, y)
}

/// Euclidean distance `‖x - y‖₂`.
///
/// # Panics
///
/// Panics if the slices differ in length.
///
/// # Example
///
/// ```
/// use densa::vecmath::dist;
///
/// assert_eq!(dist(&[0.0, 3.0], &[4.0, 0.0]), 5.0);
/// ```
pub fn dist<T: FloatScalar>(x: &[T], y: &[T]) -> T {
    assert_eq!(x.len(), y.len(), "length mismatch: {} vs {}", x.len(), y.len());
    let d = sub(x, y);
    kernel::dot_dispatch(&d, &d).sqrt()
}
