use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LupCoreError {
    #[error("Degenerate matrix: best pivot {pivot:e} in column {column} is below tolerance {tolerance:e}")]
    DegenerateMatrix {
        column: usize,
        pivot: f64,
        tolerance: f64,
    },

    #[error("Invalid matrix dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Invalid permutation: {0}")]
    InvalidPermutation(String),

    #[error("Tolerance must be positive and finite, got {0}")]
    InvalidTolerance(f64),
}

pub type Result<T> = core::result::Result<T, LupCoreError>;

#[cfg(feature = "wasm")]
impl From<LupCoreError> for wasm_bindgen::JsValue {
    fn from(err: LupCoreError) -> Self {
        Self::from_str(&err.to_string())
    }
}
