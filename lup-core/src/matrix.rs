use crate::error::{LupCoreError, Result};
use crate::traits::Matrix;
use num_traits::Float;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A dense N x N matrix stored as independently owned rows.
///
/// Each row is its own buffer, so exchanging two rows swaps the row handles
/// in O(1) instead of copying N elements. The decomposition relies on this
/// when it pivots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<Vec<T>>",
    into = "Vec<Vec<T>>",
    bound(
        serialize = "T: Clone + Serialize",
        deserialize = "T: Float + Deserialize<'de>"
    )
)]
pub struct SquareMatrix<T> {
    rows: Vec<Vec<T>>,
}

impl<T: Float> SquareMatrix<T> {
    /// Creates a matrix from a list of rows. Every row must have as many
    /// elements as there are rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(LupCoreError::InvalidDimensions(format!(
                "Row {} has length {} but the matrix has {} rows",
                i,
                row.len(),
                n
            )));
        }
        Ok(Self { rows })
    }

    /// Creates a matrix from a row-major buffer of `n * n` elements.
    pub fn from_row_major(n: usize, data: Vec<T>) -> Result<Self> {
        if data.len() != n * n {
            return Err(LupCoreError::InvalidDimensions(format!(
                "Data length ({}) does not match dimensions ({}x{})",
                data.len(),
                n,
                n
            )));
        }
        let rows = if n == 0 {
            Vec::new()
        } else {
            data.chunks(n).map(<[T]>::to_vec).collect()
        };
        Ok(Self { rows })
    }

    /// Creates a new matrix filled with zeros.
    pub fn zeros(n: usize) -> Self {
        Self {
            rows: vec![vec![T::zero(); n]; n],
        }
    }

    /// Creates the n x n identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m.rows[i][i] = T::one();
        }
        m
    }

    /// Number of rows (and columns).
    pub fn dim(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Gets the element at the specified row and column.
    /// Returns None if indices are out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn row(&self, i: usize) -> &[T] {
        &self.rows[i]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.rows[i]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows.clone()
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }

    pub fn diagonal(&self) -> Vec<T> {
        self.rows.iter().enumerate().map(|(i, row)| row[i]).collect()
    }

    /// Exchanges rows `i` and `j` by swapping their buffers.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.rows.swap(i, j);
    }

    /// Borrows row `pivot` immutably together with every row below it mutably.
    pub fn pivot_and_below(&mut self, pivot: usize) -> (&[T], impl Iterator<Item = &mut [T]> + '_) {
        let (head, tail) = self.rows.split_at_mut(pivot + 1);
        (&head[pivot], tail.iter_mut().map(Vec::as_mut_slice))
    }

    /// Computes `self * rhs`.
    pub fn matmul(&self, rhs: &Self) -> Result<Self> {
        if self.dim() != rhs.dim() {
            return Err(LupCoreError::InvalidDimensions(format!(
                "Cannot multiply {}x{} by {}x{}",
                self.dim(),
                self.dim(),
                rhs.dim(),
                rhs.dim()
            )));
        }
        let n = self.dim();
        let mut out = Self::zeros(n);
        for (out_row, lhs_row) in out.rows.iter_mut().zip(&self.rows) {
            for (k, &a) in lhs_row.iter().enumerate() {
                for (o, &b) in out_row.iter_mut().zip(&rhs.rows[k]) {
                    *o = *o + a * b;
                }
            }
        }
        Ok(out)
    }

    /// Computes the matrix-vector product `self * x`.
    pub fn mul_vec(&self, x: &[T]) -> Result<Vec<T>> {
        if x.len() != self.dim() {
            return Err(LupCoreError::InvalidDimensions(format!(
                "Matrix dimension ({}) must match vector length ({})",
                self.dim(),
                x.len()
            )));
        }
        Ok(self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .zip(x)
                    .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
            })
            .collect())
    }

    pub fn transpose(&self) -> Self {
        let n = self.dim();
        let rows = (0..n)
            .map(|c| self.rows.iter().map(|row| row[c]).collect())
            .collect();
        Self { rows }
    }

    /// Largest absolute element-wise difference, or None if the dimensions differ.
    pub fn max_abs_diff(&self, other: &Self) -> Option<T> {
        if self.dim() != other.dim() {
            return None;
        }
        let diff = self
            .rows
            .iter()
            .flatten()
            .zip(other.rows.iter().flatten())
            .fold(T::zero(), |acc, (&a, &b)| acc.max((a - b).abs()));
        Some(diff)
    }
}

impl<T: Float> TryFrom<Vec<Vec<T>>> for SquareMatrix<T> {
    type Error = LupCoreError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl<T> From<SquareMatrix<T>> for Vec<Vec<T>> {
    fn from(matrix: SquareMatrix<T>) -> Self {
        matrix.rows
    }
}

impl<T: Float + fmt::Debug> Matrix for SquareMatrix<T> {
    type Value = T;

    fn dims(&self) -> (usize, usize) {
        (self.rows.len(), self.rows.len())
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.rows[row][col]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.rows[row][col]
    }
}

impl<T: fmt::Display> fmt::Display for SquareMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let mut first = true;
            for value in row {
                if !first {
                    write!(f, " ")?;
                }
                first = false;
                match f.precision() {
                    Some(p) => write!(f, "{:.*}", p, value)?,
                    None => write!(f, "{}", value)?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
