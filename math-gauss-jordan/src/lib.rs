//! Dense Gauss-Jordan solver
//!
//! This crate inverts small dense matrices and solves any number of linear
//! systems sharing the same coefficient matrix in a single elimination pass.
//! It is the numerical kernel behind curve fitting and geometric alignment
//! code that needs both the inverse and the solutions.
//!
//! # Features
//!
//! - **Full pivoting**: pivot search over the whole unreduced submatrix, with a
//!   deterministic tie-break (the last scanned maximum wins)
//! - **Simultaneous inverse and solutions**: the coefficient buffer becomes the
//!   inverse, the RHS buffer the solution columns
//! - **Atomic failure by default**: singular inputs leave the buffers untouched;
//!   an in-place mode is available for callers that do not need that
//! - **Generic Scalar Types**: Works with f64, f32, Complex64, Complex32
//! - **Batches**: independent systems reduced in parallel with rayon
//!
//! # Example
//!
//! ```
//! use math_audio_gauss_jordan::gauss_jordan;
//! use ndarray::array;
//!
//! let mut a = array![[2.0_f64, 1.0], [1.0, 3.0]];
//! let mut b = array![[1.0_f64], [2.0]];
//!
//! gauss_jordan(&mut a, &mut b).expect("matrix is invertible");
//!
//! assert!((a[[0, 0]] - 0.6).abs() < 1e-12);
//! assert!((b[[1, 0]] - 0.6).abs() < 1e-12);
//! ```

pub mod batch;
pub mod direct;
pub mod error;
pub mod parallel;
pub mod traits;

pub use traits::ComplexField;

pub use error::{GaussJordanError, Result};

pub use direct::{
    FailureMode, GaussJordanConfig, GaussJordanSolution, gauss_jordan,
    gauss_jordan_in_place, gauss_jordan_with_config, invert, solve, solve_multiple,
};

pub use batch::{LinearSystem, gauss_jordan_batch, invert_batch};
