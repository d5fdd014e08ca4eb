use lup_core::{Permutation, SquareMatrix};
use num_traits::Float;

/// Determinant of the original matrix: the product of the `U` diagonal,
/// negated when the decomposition performed an odd number of row swaps.
///
/// An empty matrix yields 1.
pub fn determinant<T: Float>(lu: &SquareMatrix<T>, permutation: &Permutation) -> T {
    let det = lu
        .rows()
        .enumerate()
        .fold(T::one(), |acc, (i, row)| acc * row[i]);
    if permutation.is_odd() {
        -det
    } else {
        det
    }
}
