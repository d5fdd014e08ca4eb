use lup_core::{Permutation, SquareMatrix};
use num_traits::Float;

/// Solves `A * x = b` from the output of [`decompose`](super::decompose).
///
/// `lu` and `permutation` must come from a successful decomposition; no
/// check is made for a near-zero diagonal.
///
/// # Panics
/// If `b` or `permutation` does not match the dimension of `lu`.
pub fn solve<T: Float>(lu: &SquareMatrix<T>, permutation: &Permutation, b: &[T]) -> Vec<T> {
    let mut x = vec![T::zero(); lu.dim()];
    solve_into(lu, permutation, b, &mut x);
    x
}

/// Like [`solve`], writing the solution into `x`, which is fully overwritten.
///
/// # Panics
/// If `b`, `x` or `permutation` does not match the dimension of `lu`.
pub fn solve_into<T: Float>(lu: &SquareMatrix<T>, permutation: &Permutation, b: &[T], x: &mut [T]) {
    let n = lu.dim();
    assert_eq!(permutation.len(), n, "permutation length must match matrix dimension");
    assert_eq!(b.len(), n, "right-hand side length must match matrix dimension");
    assert_eq!(x.len(), n, "solution length must match matrix dimension");
    let p = permutation.indices();

    // Forward substitution with the unit lower triangle: L y = P b
    for i in 0..n {
        let (solved, rest) = x.split_at_mut(i);
        rest[0] = lu.row(i)[..i]
            .iter()
            .zip(solved.iter())
            .fold(b[p[i]], |acc, (&l, &xk)| acc - l * xk);
    }

    // Back substitution with the upper triangle: U x = y
    for i in (0..n).rev() {
        let row = lu.row(i);
        let (head, solved) = x.split_at_mut(i + 1);
        let acc = row[i + 1..]
            .iter()
            .zip(solved.iter())
            .fold(head[i], |acc, (&u, &xk)| acc - u * xk);
        head[i] = acc / row[i];
    }
}
