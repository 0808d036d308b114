//! Element-wise exponential and logarithm family.
//!
//! Plain per-element loops over [`FloatScalar`]; the baseline ISAs carry no
//! vector versions of these, so each element goes through libm (or the
//! software float path under the `libm` feature).

use alloc::vec::Vec;

use crate::traits::FloatScalar;

/// Element-wise eˣ.
///
/// # Example
///
/// ```
/// use densa::vecmath::exp;
///
/// let out = exp(&[0.0_f64, 1.0]);
/// assert_eq!(out[0], 1.0);
/// assert!((out[1] - core::f64::consts::E).abs() < 1e-15);
/// ```
pub fn exp<T: FloatScalar>(x: &[T]) -> Vec<T> {
    x.iter().map(|&v| v.exp()).collect()
}

/// Element-wise 2ˣ.
pub fn exp2<T: FloatScalar>(x: &[T]) -> Vec<T> {
    x.iter().map(|&v| v.exp2()).collect()
}

/// Element-wise natural logarithm.
pub fn ln<T: FloatScalar>(x: &[T]) -> Vec<T> {
    x.iter().map(|&v| v.ln()).collect()
}

/// Element-wise base-2 logarithm.
pub fn log2<T: FloatScalar>(x: &[T]) -> Vec<T> {
    x.iter().map(|&v| v.log2()).collect()
}

/// Element-wise base-10 logarithm.
pub fn log10<T: FloatScalar>(x: &[T]) -> Vec<T> {
    x.iter().map(|&v| v.log10()).collect()
}

/// Element-wise `x[i]` raised to `y[i]`.
///
/// # Panics
///
/// Panics if the slices differ in length.
///
/// # Example
///
/// ```
/// use densa::vecmath::pow;
///
/// assert_eq!(pow(&[2.0, 3.0], &[3.0, 2.0]), vec![8.0, 9.0]);
/// ```
pub fn pow<T: FloatScalar>(x: &[T], y: &[T]) -> Vec<T> {
    assert_eq!(x.len(), y.len(), "length mismatch: {} vs {}", x.len(), y.len());
    x.iter().zip(y.iter()).map(|(&a, &b)| a.powf(b)).collect()
}

/// Element-wise `x[i]` raised to one scalar exponent `y`.
///
/// # Example
///
/// ```
/// use densa::vecmath::powf;
///
/// assert_eq!(powf(&[2.0, 3.0, 4.0], 2.0), vec![4.0, 9.0, 16.0]);
/// ```
pub fn powf<T: FloatScalar>(x: &[T], y: T) -> Vec<T> {
    x.iter().map(|&v| v.powf(y)).collect()
}
