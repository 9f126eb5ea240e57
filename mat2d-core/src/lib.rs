//! # Matrix Algebra Core Library
//!
//! Provides a dense 2D matrix type backed by a single flat row-major
//! buffer, with the element-wise arithmetic, matrix products, small
//! inversions, and reshaping needed to solve simple systems of linear
//! equations of the form Ax = b.

// Declare modules. The flat buffer is an implementation detail of
// Matrix and stays crate-internal: its index arithmetic is unchecked,
// and all bounds validation happens at the Matrix boundary.
mod array2d;
pub mod error;
pub mod matrix;

// Re-export public types
pub use error::MatrixError;
pub use matrix::Matrix;
