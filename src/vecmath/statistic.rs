//! Reductions over slices: sums, means, extrema.
//!
//! The sum family dispatches to the SIMD kernels for `f32`/`f64`. The mean
//! family divides by the element count and so returns NaN on empty input;
//! [`max`] and [`min`] return `None` instead.

use core::ops::Neg;

use crate::kernel;
use crate::traits::{FloatScalar, Scalar};

fn count<T: FloatScalar>(n: usize) -> T {
    T::from(n).unwrap()
}

/// Sum of all elements. Zero on empty input.
///
/// # Example
///
/// ```
/// use densa::vecmath::sum;
///
/// assert_eq!(sum(&[1.0, 2.0, 3.0, 4.0]), 10.0);
/// ```
pub fn sum<T: Scalar>(x: &[T]) -> T {
    kernel::sum_dispatch(x)
}

/// Sum of element magnitudes `Σ |x[i]|`. Zero on empty input.
pub fn asum<T>(x: &[T]) -> T
where
    T: Scalar + Neg<Output = T> + PartialOrd,
{
    kernel::asum_dispatch(x)
}

/// Sum of squared elements `Σ x[i]²`. Zero on empty input.
pub fn sumsq<T: Scalar>(x: &[T]) -> T {
    kernel::sumsq_dispatch(x)
}

/// Arithmetic mean. NaN on empty input.
///
/// # Example
///
/// ```
/// use densa::vecmath::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
/// ```
pub fn mean<T: FloatScalar>(x: &[T]) -> T {
    kernel::sum_dispatch(x) / count(x.len())
}

/// Mean of element magnitudes. NaN on empty input.
pub fn meamg<T: FloatScalar>(x: &[T]) -> T {
    kernel::asum_dispatch(x) / count(x.len())
}

/// Mean of squared elements. NaN on empty input.
pub fn measq<T: FloatScalar>(x: &[T]) -> T {
    kernel::sumsq_dispatch(x) / count(x.len())
}

/// Root mean square `√(Σ x[i]² / n)`. NaN on empty input.
pub fn rms<T: FloatScalar>(x: &[T]) -> T {
    measq(x).sqrt()
}

/// Largest element, or `None` on empty input.
///
/// # Example
///
/// ```
/// use densa::vecmath::max;
///
/// assert_eq!(max(&[1.0, 4.0, 2.0]), Some(4.0));
/// assert_eq!(max::<f64>(&[]), None);
/// ```
pub fn max<T: Scalar + PartialOrd>(x: &[T]) -> Option<T> {
    if x.is_empty() {
        None
    } else {
        Some(kernel::max_val_dispatch(x))
    }
}

/// Smallest element, or `None` on empty input.
pub fn min<T: Scalar + PartialOrd>(x: &[T]) -> Option<T> {
    if x.is_empty() {
        None
    } else {
        Some(kernel::min_val_dispatch(x))
    }
}
