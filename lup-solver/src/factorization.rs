use lup_core::{LupCoreError, Matrix, Permutation, Result, SquareMatrix};
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::algorithms::{self, LinearSolver};

/// An owned `P * A = L * U` factorization, as produced by
/// [`LupDecomposition::factor`](crate::LupDecomposition::factor).
///
/// Bundles the combined `L`/`U` matrix with its permutation so the two can't
/// drift apart, and exposes the solve / inverse / determinant routines as methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "RawFactorization<T>",
    bound(
        serialize = "T: Clone + Serialize",
        deserialize = "T: Float + Deserialize<'de>"
    )
)]
pub struct LuFactorization<T> {
    lu: SquareMatrix<T>,
    permutation: Permutation,
}

#[derive(Deserialize)]
#[serde(bound(deserialize = "T: Float + Deserialize<'de>"))]
struct RawFactorization<T> {
    lu: SquareMatrix<T>,
    permutation: Permutation,
}

impl<T: Float> LuFactorization<T> {
    /// Pairs an already factored matrix with its permutation.
    /// Only the dimensions are checked, not the numeric content.
    pub fn from_parts(lu: SquareMatrix<T>, permutation: Permutation) -> Result<Self> {
        if lu.dim() != permutation.len() {
            return Err(LupCoreError::InvalidDimensions(format!(
                "Permutation length ({}) does not match matrix dimension ({})",
                permutation.len(),
                lu.dim()
            )));
        }
        Ok(Self { lu, permutation })
    }

    pub fn into_parts(self) -> (SquareMatrix<T>, Permutation) {
        (self.lu, self.permutation)
    }

    pub fn dim(&self) -> usize {
        self.lu.dim()
    }

    /// The combined matrix: `L` below the diagonal, `U` on and above it.
    pub fn lu(&self) -> &SquareMatrix<T> {
        &self.lu
    }

    pub fn permutation(&self) -> &Permutation {
        &self.permutation
    }

    pub fn inverse(&self) -> SquareMatrix<T> {
        algorithms::invert(&self.lu, &self.permutation)
    }

    pub fn determinant(&self) -> T {
        algorithms::determinant(&self.lu, &self.permutation)
    }

    /// Extract the lower triangular matrix `L` (with unit diagonal).
    pub fn lower(&self) -> SquareMatrix<T> {
        let n = self.dim();
        let mut l = SquareMatrix::identity(n);
        for i in 0..n {
            l.row_mut(i)[..i].copy_from_slice(&self.lu.row(i)[..i]);
        }
        l
    }

    /// Extract the upper triangular matrix `U`.
    pub fn upper(&self) -> SquareMatrix<T> {
        let n = self.dim();
        let mut u = SquareMatrix::zeros(n);
        for i in 0..n {
            u.row_mut(i)[i..].copy_from_slice(&self.lu.row(i)[i..]);
        }
        u
    }

    pub fn permutation_matrix(&self) -> SquareMatrix<T> {
        self.permutation.to_matrix()
    }

    /// Returns `L * U`, which equals `P * A` for the original matrix `A`.
    pub fn reconstruct(&self) -> SquareMatrix<T> {
        let (l, u) = (self.lower(), self.upper());
        let n = self.dim();
        let mut out = SquareMatrix::zeros(n);
        for i in 0..n {
            for j in 0..n {
                // L is unit lower triangular and U upper triangular.
                out[(i, j)] = (0..=i.min(j))
                    .fold(T::zero(), |acc, k| acc + l[(i, k)] * u[(k, j)]);
            }
        }
        out
    }
}

impl<T: Float + Debug> Matrix for LuFactorization<T> {
    type Value = T;

    fn dims(&self) -> (usize, usize) {
        self.lu.dims()
    }
}

impl<T: Float + Debug> LinearSolver for LuFactorization<T> {
    fn solve(&self, b: &[T]) -> Result<Vec<T>> {
        self.validate_rhs(b)?;
        Ok(algorithms::solve(&self.lu, &self.permutation, b))
    }
}

impl<T: Float> TryFrom<RawFactorization<T>> for LuFactorization<T> {
    type Error = LupCoreError;

    fn try_from(raw: RawFactorization<T>) -> Result<Self> {
        Self::from_parts(raw.lu, raw.permutation)
    }
}
