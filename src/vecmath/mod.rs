//! Element-wise vector math over plain slices.
//!
//! Free functions that take `&[T]` and return an owned `Vec<T>` or a scalar.
//! Binary operations require equal-length inputs and panic on mismatch;
//! recoverable shape checking lives at the matrix layer, not here.
//!
//! Arithmetic and the reductions route through the same SIMD kernels as the
//! matrix operations for `f32`/`f64`; the exponential and logarithm family
//! are per-element float loops.
//!
//! # Functions
//!
//! Arithmetic:
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`add`], [`add_scalar`] | element-wise / broadcast sum |
//! | [`sub`], [`sub_scalar`] | element-wise / broadcast difference |
//! | [`mul`], [`mul_scalar`] | element-wise / broadcast product |
//! | [`div`], [`div_scalar`] | element-wise / broadcast quotient |
//! | [`fmod`] | element-wise truncated modulo, sign of the dividend |
//! | [`remainder`] | element-wise IEEE 754 remainder, ties to even |
//! | [`sqrt`] | element-wise square root |
//! | [`dot`] | dot product |
//! | [`dist`] | Euclidean distance |
//!
//! Exponential family:
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`exp`], [`exp2`] | eˣ and 2ˣ |
//! | [`ln`], [`log2`], [`log10`] | natural, base-2, base-10 logarithm |
//! | [`pow`] | xᵢ^yᵢ with per-element exponents |
//! | [`powf`] | xᵢ^y with one scalar exponent |
//!
//! Statistics:
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`sum`], [`asum`], [`sumsq`] | sum, sum of magnitudes, sum of squares |
//! | [`mean`], [`meamg`], [`measq`] | mean, mean magnitude, mean square |
//! | [`rms`] | root mean square |
//! | [`max`], [`min`] | extrema, `None` on empty input |
//!
//! # Example
//!
//! ```
//! use densa::vecmath;
//!
//! let x = [1.0_f64, 2.0, 3.0, 4.0];
//! let y = [5.0_f64, 6.0, 7.0, 8.0];
//!
//! assert_eq!(vecmath::add(&x, &y), vec![6.0, 8.0, 10.0, 12.0]);
//! assert_eq!(vecmath::dot(&x, &y), 70.0);
//! assert_eq!(vecmath::mean(&x), 2.5);
//! assert_eq!(vecmath::max(&x), Some(4.0));
//! ```

mod arithmetic;
mod exp;
mod statistic;

#[cfg(test)]
mod tests;

pub use arithmetic::{
    add, add_scalar, dist, div, div_scalar, dot, fmod, mul, mul_scalar, remainder, sqrt, sub,
    sub_scalar,
};
pub use exp::{exp, exp2, ln, log10, log2, pow, powf};
pub use statistic::{asum, max, meamg, mean, measq, min, rms, sum, sumsq};
