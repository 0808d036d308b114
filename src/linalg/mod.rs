//! LU factorization primitives backing [`Matrix::inverse`] and
//! [`Matrix::det`].
//!
//! [`Matrix::inverse`]: crate::Matrix::inverse
//! [`Matrix::det`]: crate::Matrix::det

pub(crate) mod lu;
