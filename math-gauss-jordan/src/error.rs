//! Error types for Gauss-Jordan elimination.
//!
//! Both singularity kinds are deterministic functions of the input, so callers
//! should report them rather than retry. Dimension errors are raised before
//! any buffer is touched.

use thiserror::Error;

/// Errors that can occur while inverting a matrix or solving its systems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GaussJordanError {
    /// A candidate pivot column had already been used twice, so the remaining
    /// unreduced submatrix has no available pivot.
    #[error("singular matrix: pivot column exhausted during search at step {step}")]
    SingularMatrixDuringPivotSearch {
        /// Reduction step (0-based) at which the search failed
        step: usize,
    },

    /// The selected pivot was exactly zero after the row interchange.
    #[error("singular matrix: zero pivot in column {column} at step {step}")]
    SingularMatrixZeroPivot {
        /// Reduction step (0-based)
        step: usize,
        /// Column of the zero pivot
        column: usize,
    },

    /// The coefficient matrix is not square.
    #[error("coefficient matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// The right-hand side row count does not match the coefficient matrix.
    #[error("right-hand side dimension mismatch: expected {expected} rows, got {got}")]
    DimensionMismatch {
        /// Order of the coefficient matrix
        expected: usize,
        /// Rows in the right-hand side
        got: usize,
    },

    /// The coefficient matrix has no rows.
    #[error("coefficient matrix is empty")]
    EmptyMatrix,
}

/// A specialized `Result` type for Gauss-Jordan operations.
pub type Result<T> = std::result::Result<T, GaussJordanError>;

impl GaussJordanError {
    /// Returns `true` for either singularity kind.
    pub fn is_singular(&self) -> bool {
        matches!(
            self,
            GaussJordanError::SingularMatrixDuringPivotSearch { .. }
                | GaussJordanError::SingularMatrixZeroPivot { .. }
        )
    }

    /// Returns `true` if the inputs had incompatible shapes.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            GaussJordanError::NotSquare { .. }
                | GaussJordanError::DimensionMismatch { .. }
                | GaussJordanError::EmptyMatrix
        )
    }
}
