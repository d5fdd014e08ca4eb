//! `lup-solver`: dense LU decomposition with partial pivoting.
//!
//! The decomposition overwrites a [`SquareMatrix`] with its combined `L`/`U`
//! factors and returns the row [`Permutation`]. The solve, inverse and
//! determinant routines consume that output independently of each other:
//!
//! ```
//! use lup_solver::{algorithms, SquareMatrix};
//!
//! let mut a = SquareMatrix::from_rows(vec![vec![2.0f64, 1.0], vec![1.0, 4.0]]).unwrap();
//! let p = algorithms::decompose(&mut a, 1e-10).unwrap();
//! assert!((algorithms::determinant(&a, &p) - 7.0).abs() < 1e-12);
//! let x = algorithms::solve(&a, &p, &[5.0, 6.0]);
//! assert!((x[0] - 2.0).abs() < 1e-12 && (x[1] - 1.0).abs() < 1e-12);
//! ```

pub mod algorithms;
pub mod factorization;

pub use algorithms::{LinearSolver, LupDecomposition};
pub use factorization::LuFactorization;

// Re-export from lup_core
pub use lup_core::{LupCoreError, Matrix, Permutation, Result, SquareMatrix};
