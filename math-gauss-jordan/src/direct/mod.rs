//! Direct solvers for dense linear systems
//!
//! - [`gauss_jordan`]: Gauss-Jordan elimination with full pivoting, producing
//!   the inverse and the solutions of any number of right-hand sides at once

mod gauss_jordan;

pub use gauss_jordan::{
    FailureMode, GaussJordanConfig, GaussJordanSolution, gauss_jordan,
    gauss_jordan_in_place, gauss_jordan_with_config, invert, solve, solve_multiple,
};
