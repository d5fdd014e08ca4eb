use num_traits::Float;
use std::fmt::Debug;

/// Generic trait representing a dense matrix.
/// Implemented by the matrix buffer itself and by anything wrapping one.
pub trait Matrix: Debug {
    /// The underlying numeric type of the matrix elements (e.g., f32, f64).
    type Value: Float + Debug;

    /// Returns the dimensions of the matrix as (rows, columns).
    fn dims(&self) -> (usize, usize);

    /// Returns the number of rows.
    fn rows_count(&self) -> usize {
        self.dims().0
    }

    /// Returns the number of columns.
    fn cols_count(&self) -> usize {
        self.dims().1
    }

    /// Checks if the matrix is square.
    fn is_square(&self) -> bool {
        let (rows, cols) = self.dims();
        rows == cols
    }
}
