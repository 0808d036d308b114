//! # densa
//!
//! Dense row-major matrix algebra and element-wise vector math, no-std
//! compatible. Generic over element precision (`f32`/`f64` take SIMD kernel
//! paths, integers fall back to scalar loops), with LU-backed inversion and
//! determinants.
//!
//! ## Quick start
//!
//! ```
//! use densa::Matrix;
//!
//! let a = Matrix::from_rows(&[[4.0_f64, 7.0], [2.0, 6.0]]);
//!
//! // Determinant via LU pivots
//! let det = a.det().unwrap();
//! assert!((det - 10.0).abs() < 1e-12);
//!
//! // Inverse, then A · A⁻¹ ≈ I
//! let inv = a.inverse().unwrap();
//! let id = &a * &inv;
//! assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
//! assert!(id[(0, 1)].abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Heap-allocated `Matrix<T>` with runtime dimensions and
//!   `Vec<T>` row-major storage. Construction, indexing, row iteration,
//!   operator overloads, checked arithmetic free functions ([`add`], [`sub`],
//!   [`mul`], [`div`], [`scale`]), element-wise product/quotient, transpose,
//!   axis sums, `powf`/`exp`, and LU-backed `inverse()` / `det()`. Checked
//!   operations report [`MatrixError`]; operators panic on shape mismatch.
//!
//! - [`vecmath`] — Element-wise helpers over plain `&[T]` slices: arithmetic,
//!   the exponential/logarithm family, dot product and Euclidean distance,
//!   and statistics (sums, means, RMS, extrema).
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float`), required by
//!     inverse/determinant and the transcendental helpers
//!   - [`MatrixRef`] / [`MatrixMut`] — generic read/write access for
//!     algorithms over any dense row-major container
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Hardware float math via system libm |
//! | `libm`  | no       | Pure-Rust software float fallback; required for `no_std` builds |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod error;
mod kernel;
mod linalg;
pub mod matrix;
pub mod traits;
pub mod vecmath;

pub use error::MatrixError;
pub use matrix::{add, div, mul, scale, sub, Axis, Matrix, Rows};
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
