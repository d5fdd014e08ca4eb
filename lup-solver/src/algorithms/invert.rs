use lup_core::{Permutation, SquareMatrix};
use num_traits::Float;

/// Computes the inverse of the original matrix from its factorization.
///
/// Each column `j` is solved against the unit vector `e_j` without
/// materializing it. Same precondition as [`solve`](super::solve).
pub fn invert<T: Float>(lu: &SquareMatrix<T>, permutation: &Permutation) -> SquareMatrix<T> {
    let mut inverse = SquareMatrix::zeros(lu.dim());
    invert_into(lu, permutation, &mut inverse);
    inverse
}

/// Like [`invert`], writing into `inverse`.
///
/// # Panics
/// If `inverse` or `permutation` does not match the dimension of `lu`.
pub fn invert_into<T: Float>(
    lu: &SquareMatrix<T>,
    permutation: &Permutation,
    inverse: &mut SquareMatrix<T>,
) {
    let n = lu.dim();
    assert_eq!(permutation.len(), n, "permutation length must match matrix dimension");
    assert_eq!(inverse.dim(), n, "inverse dimension must match matrix dimension");
    let p = permutation.indices();

    for j in 0..n {
        for i in 0..n {
            let mut acc = if p[i] == j { T::one() } else { T::zero() };
            for k in 0..i {
                acc = acc - lu[(i, k)] * inverse[(k, j)];
            }
            inverse[(i, j)] = acc;
        }

        for i in (0..n).rev() {
            let mut acc = inverse[(i, j)];
            for k in i + 1..n {
                acc = acc - lu[(i, k)] * inverse[(k, j)];
            }
            inverse[(i, j)] = acc / lu[(i, i)];
        }
    }
}
