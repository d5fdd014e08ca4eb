//! # LUP Core Library
//!
//! Provides the data structures shared by the LU decomposition kernel: a dense
//! square matrix with O(1) row exchange, the row permutation record, and the
//! common error type.

pub mod error;
pub mod matrix;
pub mod permutation;
pub mod traits;

// Re-export public types
pub use error::{LupCoreError, Result};
pub use matrix::SquareMatrix;
pub use permutation::Permutation;
pub use traits::Matrix;
