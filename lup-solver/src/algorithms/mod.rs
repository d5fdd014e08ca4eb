use lup_core::{LupCoreError, Matrix, SquareMatrix};
use num_traits::Float;
use std::fmt::Debug;

use crate::factorization::LuFactorization;

// --- Solver Trait Definition ---
/// Trait representing something that can solve `A x = b` for a fixed `A`.
pub trait LinearSolver: Matrix {
    /// Solves the linear system Ax = b for x.
    ///
    /// # Returns
    ///
    /// A `Result` containing the solution vector x or an `LupCoreError`.
    fn solve(&self, b: &[Self::Value]) -> Result<Vec<Self::Value>, LupCoreError>;

    // Helper for input validation, can be called by implementations.
    fn validate_rhs(&self, b: &[Self::Value]) -> Result<(), LupCoreError> {
        let (rows, cols) = self.dims();
        if !self.is_square() {
            return Err(LupCoreError::InvalidDimensions(format!(
                "Matrix A must be square (dims: {}x{})",
                rows, cols
            )));
        }
        if rows != b.len() {
            return Err(LupCoreError::InvalidDimensions(format!(
                "Matrix A rows ({}) must match RHS vector b length ({})",
                rows,
                b.len()
            )));
        }
        Ok(())
    }
}

// --- Algorithm Implementations ---

pub mod decompose; // In-place LU with partial pivoting
pub mod determinant;
pub mod invert;
pub mod solve; // Forward / back substitution

pub use decompose::{decompose, decompose_with_observer, PivotStep};
pub use determinant::determinant;
pub use invert::{invert, invert_into};
pub use solve::{solve, solve_into};

// --- Algorithm Struct Definitions ---

/// LU decomposition with partial pivoting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LupDecomposition {
    /// Pivots with a magnitude strictly below this are treated as zero.
    pub tolerance: f64,
}

impl Default for LupDecomposition {
    fn default() -> Self {
        Self {
            tolerance: 1e-10, // Default degeneracy threshold
        }
    }
}

impl LupDecomposition {
    /// Creates a new instance with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new instance with the given tolerance, which must be positive and finite.
    pub fn with_tolerance(tolerance: f64) -> Result<Self, LupCoreError> {
        let params = Self { tolerance };
        params.validate()?;
        Ok(params)
    }

    fn validate(&self) -> Result<(), LupCoreError> {
        if self.tolerance > 0.0 && self.tolerance.is_finite() {
            Ok(())
        } else {
            Err(LupCoreError::InvalidTolerance(self.tolerance))
        }
    }

    /// Factors `matrix`, taking ownership of it as the storage for `L` and `U`.
    pub fn factor<T: Float + Debug>(
        &self,
        mut matrix: SquareMatrix<T>,
    ) -> Result<LuFactorization<T>, LupCoreError> {
        self.validate()?;
        // Narrowing to T can round a tiny tolerance down to zero.
        let tolerance = T::from(self.tolerance)
            .filter(|t| *t > T::zero() && t.is_finite())
            .ok_or(LupCoreError::InvalidTolerance(self.tolerance))?;
        let permutation = decompose(&mut matrix, tolerance)?;
        LuFactorization::from_parts(matrix, permutation)
    }
}
