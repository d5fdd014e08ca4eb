use crate::error::{LupCoreError, Result};
use crate::matrix::SquareMatrix;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Row permutation recorded by a pivoting decomposition.
///
/// `indices[i]` is the original row index now stored at row `i`. `swaps`
/// counts the row exchanges actually executed; it is not necessarily minimal
/// but always has the parity of the permutation.
///
/// Serializes to the flat layout described in [`Permutation::to_flat`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Permutation {
    indices: Vec<usize>,
    swaps: usize,
}

impl Permutation {
    /// The identity permutation on `0..n` with no recorded swaps.
    pub fn identity(n: usize) -> Self {
        Self {
            indices: (0..n).collect(),
            swaps: 0,
        }
    }

    /// Rebuilds a permutation from the flat `N + 1` layout, where the last
    /// entry is `N` plus the number of swaps.
    pub fn from_flat(flat: &[usize]) -> Result<Self> {
        let Some((&counter, indices)) = flat.split_last() else {
            return Err(LupCoreError::InvalidPermutation(
                "flat permutation must have at least one entry".to_string(),
            ));
        };
        let n = indices.len();
        if counter < n {
            return Err(LupCoreError::InvalidPermutation(format!(
                "swap counter ({}) is below the dimension ({})",
                counter, n
            )));
        }
        let mut seen = vec![false; n];
        for &idx in indices {
            if idx >= n || seen[idx] {
                return Err(LupCoreError::InvalidPermutation(format!(
                    "{:?} is not a permutation of 0..{}",
                    indices, n
                )));
            }
            seen[idx] = true;
        }
        Ok(Self {
            indices: indices.to_vec(),
            swaps: counter - n,
        })
    }

    /// Flat `N + 1` layout: the indices followed by `N + swaps`.
    pub fn to_flat(&self) -> Vec<usize> {
        let mut flat = self.indices.clone();
        flat.push(self.indices.len() + self.swaps);
        flat
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn swap_count(&self) -> usize {
        self.swaps
    }

    pub fn is_odd(&self) -> bool {
        self.swaps % 2 == 1
    }

    /// Determinant of the permutation matrix: -1 for an odd number of swaps, 1 otherwise.
    pub fn sign<T: Float>(&self) -> T {
        if self.is_odd() {
            -T::one()
        } else {
            T::one()
        }
    }

    /// Exchanges entries `i` and `j` and records the swap. Does nothing when `i == j`.
    pub fn swap(&mut self, i: usize, j: usize) {
        if i != j {
            self.indices.swap(i, j);
            self.swaps += 1;
        }
    }

    /// Returns `P * b`, i.e. `out[i] = b[indices[i]]`.
    pub fn apply_to_slice<T: Copy>(&self, b: &[T]) -> Result<Vec<T>> {
        if b.len() != self.len() {
            return Err(LupCoreError::InvalidDimensions(format!(
                "Permutation length ({}) must match vector length ({})",
                self.len(),
                b.len()
            )));
        }
        Ok(self.indices.iter().map(|&i| b[i]).collect())
    }

    /// Explicit permutation matrix with `P[i][indices[i]] = 1`.
    pub fn to_matrix<T: Float>(&self) -> SquareMatrix<T> {
        let mut p = SquareMatrix::zeros(self.len());
        for (row, &col) in self.indices.iter().enumerate() {
            p[(row, col)] = T::one();
        }
        p
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = LupCoreError;

    fn try_from(flat: Vec<usize>) -> Result<Self> {
        Self::from_flat(&flat)
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(permutation: Permutation) -> Self {
        permutation.to_flat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_counts_only_real_exchanges() {
        let mut p = Permutation::identity(3);
        p.swap(1, 1);
        assert_eq!(p.swap_count(), 0);
        p.swap(0, 2);
        assert_eq!(p.indices(), &[2, 1, 0]);
        assert_eq!(p.swap_count(), 1);
        assert!(p.is_odd());
        assert_eq!(p.sign::<f64>(), -1.0);
    }

    #[test]
    fn flat_layout_carries_counter() {
        let mut p = Permutation::identity(4);
        p.swap(0, 3);
        p.swap(1, 2);
        assert_eq!(p.to_flat(), vec![3, 2, 1, 0, 6]);
        assert_eq!(Permutation::from_flat(&p.to_flat()).unwrap(), p);
        assert_eq!(serde_json::to_string(&p).unwrap(), "[3,2,1,0,6]");
        assert!(serde_json::from_str::<Permutation>("[0,0,2]").is_err());
    }

    #[test]
    fn from_flat_rejects_bad_input() {
        assert!(Permutation::from_flat(&[]).is_err());
        assert!(Permutation::from_flat(&[0, 0, 2]).is_err());
        assert!(Permutation::from_flat(&[0, 2, 2]).is_err());
        assert!(Permutation::from_flat(&[1, 0, 1]).is_err());
        assert_eq!(Permutation::from_flat(&[0]).unwrap(), Permutation::identity(0));
    }

    #[test]
    fn apply_and_matrix_agree() {
        let mut p = Permutation::identity(3);
        p.swap(0, 2);
        let b = [10.0, 20.0, 30.0];
        let applied = p.apply_to_slice(&b).unwrap();
        assert_eq!(applied, vec![30.0, 20.0, 10.0]);
        assert_eq!(p.to_matrix::<f64>().mul_vec(&b).unwrap(), applied);
        assert!(p.apply_to_slice(&[1.0]).is_err());
    }
}
