use lup_core::{LupCoreError, Permutation, Result, SquareMatrix};
use num_traits::Float;
use std::fmt::Debug;

/// State of the decomposition after the pivot for `column` has been moved
/// into place and before the entries below it are eliminated.
#[derive(Debug)]
pub struct PivotStep<'a, T> {
    pub column: usize,
    /// Row the pivot was taken from, before the exchange.
    pub pivot_row: usize,
    pub pivot: T,
    pub matrix: &'a SquareMatrix<T>,
}

/// Factors `matrix` in place so that `P * A = L * U`.
///
/// On success the strictly lower part of `matrix` holds `L` without its unit
/// diagonal and the rest holds `U`. The returned permutation maps each row of
/// the factored matrix to the row of `A` it came from.
///
/// Pivots are chosen by largest magnitude in the column, earliest row on ties.
/// A pivot magnitude strictly below `tolerance` aborts with
/// [`LupCoreError::DegenerateMatrix`]; columns before the failing one are left
/// fully processed and the rest untouched.
pub fn decompose<T: Float + Debug>(
    matrix: &mut SquareMatrix<T>,
    tolerance: T,
) -> Result<Permutation> {
    decompose_with_observer(matrix, tolerance, |_| {})
}

/// Same as [`decompose`], calling `observer` once per pivot column.
pub fn decompose_with_observer<T, F>(
    matrix: &mut SquareMatrix<T>,
    tolerance: T,
    mut observer: F,
) -> Result<Permutation>
where
    T: Float + Debug,
    F: FnMut(&PivotStep<'_, T>),
{
    let n = matrix.dim();
    let mut permutation = Permutation::identity(n);

    for i in 0..n {
        let (imax, max_abs) = select_pivot(matrix, i);

        if max_abs < tolerance {
            log::warn!(
                "Degenerate matrix: column {} pivot {:?} below tolerance {:?}",
                i,
                max_abs,
                tolerance
            );
            return Err(LupCoreError::DegenerateMatrix {
                column: i,
                pivot: max_abs.to_f64().unwrap_or(f64::NAN),
                tolerance: tolerance.to_f64().unwrap_or(f64::NAN),
            });
        }

        if imax != i {
            permutation.swap(i, imax);
            matrix.swap_rows(i, imax);
        }

        log::trace!("Column {}: pivot row {} (|a| = {:?})", i, imax, max_abs);
        log::trace!("Matrix before elimination: {:?}", matrix);
        observer(&PivotStep {
            column: i,
            pivot_row: imax,
            pivot: matrix[(i, i)],
            matrix: &*matrix,
        });

        eliminate_below(matrix, i);
    }

    log::debug!(
        "LU decomposition of {}x{} matrix done with {} row swaps",
        n,
        n,
        permutation.swap_count()
    );
    Ok(permutation)
}

/// Row index and magnitude of the largest entry in `column` at or below the diagonal.
fn select_pivot<T: Float>(matrix: &SquareMatrix<T>, column: usize) -> (usize, T) {
    let mut imax = column;
    let mut max_abs = T::zero();
    for (k, row) in matrix.rows().enumerate().skip(column) {
        let abs = row[column].abs();
        if abs > max_abs {
            max_abs = abs;
            imax = k;
        }
    }
    (imax, max_abs)
}

fn eliminate_below<T: Float>(matrix: &mut SquareMatrix<T>, i: usize) {
    let (pivot_row, below) = matrix.pivot_and_below(i);
    let pivot = pivot_row[i];
    for row in below {
        row[i] = row[i] / pivot;
        let factor = row[i];
        for (a, &u) in row[i + 1..].iter_mut().zip(&pivot_row[i + 1..]) {
            *a = *a - factor * u;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat(rows: &[&[f64]]) -> SquareMatrix<f64> {
        SquareMatrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn empty_and_single_element() {
        let mut empty = SquareMatrix::<f64>::zeros(0);
        let p = decompose(&mut empty, 1e-10).unwrap();
        assert!(p.is_empty());
        assert_eq!(p.to_flat(), vec![0]);

        let mut one = mat(&[&[-3.0]]);
        let p = decompose(&mut one, 1e-10).unwrap();
        assert_eq!(p.indices(), &[0]);
        assert_eq!(one[(0, 0)], -3.0);
    }

    #[test]
    fn stores_multipliers_below_diagonal() {
        // [[2, 1], [4, 3]] pivots on row 1: L = [[1, 0], [0.5, 1]], U = [[4, 3], [0, -0.5]]
        let mut a = mat(&[&[2.0, 1.0], &[4.0, 3.0]]);
        let p = decompose(&mut a, 1e-10).unwrap();
        assert_eq!(p.indices(), &[1, 0]);
        assert_eq!(p.swap_count(), 1);
        assert_eq!(a.to_rows(), vec![vec![4.0, 3.0], vec![0.5, -0.5]]);
    }

    #[test]
    fn ties_pick_the_earliest_row() {
        let mut a = mat(&[&[1.0, 2.0, 0.0], &[-3.0, 1.0, 1.0], &[3.0, 0.0, 1.0]]);
        let p = decompose_with_observer(&mut a, 1e-10, |step| {
            if step.column == 0 {
                assert_eq!(step.pivot_row, 1);
                assert_eq!(step.pivot, -3.0);
            }
        })
        .unwrap();
        assert_eq!(p.indices()[0], 1);
    }

    #[test]
    fn pivot_equal_to_tolerance_is_accepted() {
        let mut a = mat(&[&[0.5, 0.0], &[0.0, 0.5]]);
        assert!(decompose(&mut a, 0.5).is_ok());

        let mut b = mat(&[&[0.5, 0.0], &[0.0, 0.25]]);
        let err = decompose(&mut b, 0.5).unwrap_err();
        assert_eq!(
            err,
            LupCoreError::DegenerateMatrix {
                column: 1,
                pivot: 0.25,
                tolerance: 0.5
            }
        );
    }

    #[test]
    fn zero_leading_column_fails_immediately() {
        let mut a = mat(&[&[0.0, 1.0], &[0.0, 2.0]]);
        let err = decompose(&mut a, 1e-300).unwrap_err();
        assert!(matches!(err, LupCoreError::DegenerateMatrix { column: 0, .. }));
        assert_eq!(a.to_rows(), vec![vec![0.0, 1.0], vec![0.0, 2.0]]);
    }

    #[test]
    fn failure_keeps_processed_columns() {
        // Second column becomes zero after eliminating the first.
        let mut a = mat(&[&[1.0, 2.0, 3.0], &[2.0, 4.0, 1.0], &[3.0, 6.0, 2.0]]);
        let err = decompose(&mut a, 1e-10).unwrap_err();
        assert!(matches!(err, LupCoreError::DegenerateMatrix { column: 1, .. }));
        // Row 2 was the first pivot and the multipliers are stored beneath it.
        assert_eq!(a.row(0), &[3.0, 6.0, 2.0]);
        assert!((a[(1, 0)] - 2.0 / 3.0).abs() < 1e-15);
        assert!((a[(2, 0)] - 1.0 / 3.0).abs() < 1e-15);
        assert!(a[(1, 1)].abs() < 1e-10 && a[(2, 1)].abs() < 1e-10);
    }

    #[test]
    fn observer_sees_every_column() {
        let mut a = mat(&[&[4.0, 1.0, 0.0], &[1.0, 4.0, 1.0], &[0.0, 1.0, 4.0]]);
        let mut columns = Vec::new();
        decompose_with_observer(&mut a, 1e-10, |step| {
            assert_eq!(step.matrix[(step.column, step.column)], step.pivot);
            columns.push(step.column);
        })
        .unwrap();
        assert_eq!(columns, vec![0, 1, 2]);
    }
}
