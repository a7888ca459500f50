//! Gauss-Jordan elimination with full pivoting
//!
//! Reduces a square coefficient matrix to the identity while applying the same
//! row operations to a block of right-hand sides. On success the coefficient
//! buffer holds the inverse and each RHS column holds its solution vector.
//!
//! Columns are never physically exchanged during the reduction. The pivot of
//! step `i` is moved onto the diagonal by a row interchange and the implied
//! column relabeling is undone at the end by swapping columns of the inverse
//! in reverse order. The RHS block needs no unscrambling.

use crate::error::{GaussJordanError, Result};
use crate::traits::ComplexField;
use ndarray::{Array1, Array2, Axis};
use num_traits::Zero;

/// Row and column selected as the pivot of one reduction step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Pivot {
    pub(crate) row: usize,
    pub(crate) col: usize,
}

/// What happens to the caller's buffers when elimination fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailureMode {
    /// Work on private copies; the buffers are only written on success
    #[default]
    Atomic,
    /// Reduce the buffers directly; a failure leaves them partially reduced
    InPlace,
}

/// Gauss-Jordan configuration
#[derive(Debug, Clone, Default)]
pub struct GaussJordanConfig {
    /// Buffer handling on failure
    pub failure_mode: FailureMode,
    /// Emit a warning through `log` when the matrix is singular
    pub log_failures: bool,
}

/// Inverse and solution block produced by [`solve_multiple`]
#[derive(Debug, Clone)]
pub struct GaussJordanSolution<T: ComplexField> {
    /// Inverse of the coefficient matrix
    pub inverse: Array2<T>,
    /// One solution vector per RHS column
    pub solution: Array2<T>,
}

/// Invert `a` and solve `a * x = b` for every column of `b`, in place.
///
/// Failures leave `a` and `b` unmodified. Use [`gauss_jordan_in_place`] when
/// the partially reduced buffers are acceptable on failure.
pub fn gauss_jordan<T: ComplexField>(a: &mut Array2<T>, b: &mut Array2<T>) -> Result<()> {
    gauss_jordan_with_config(a, b, &GaussJordanConfig::default())
}

/// Invert `a` and solve `a * x = b` directly in the caller's buffers.
///
/// After a singular-matrix error the contents of both buffers are
/// meaningless and must be discarded.
pub fn gauss_jordan_in_place<T: ComplexField>(a: &mut Array2<T>, b: &mut Array2<T>) -> Result<()> {
    let config = GaussJordanConfig {
        failure_mode: FailureMode::InPlace,
        log_failures: false,
    };
    gauss_jordan_with_config(a, b, &config)
}

/// Invert `a` and solve `a * x = b` using an explicit configuration.
pub fn gauss_jordan_with_config<T: ComplexField>(
    a: &mut Array2<T>,
    b: &mut Array2<T>,
    config: &GaussJordanConfig,
) -> Result<()> {
    check_dimensions(a, b)?;

    let result = match config.failure_mode {
        FailureMode::InPlace => reduce(a, b).map(|_| ()),
        FailureMode::Atomic => {
            let mut work_a = a.clone();
            let mut work_b = b.clone();
            reduce(&mut work_a, &mut work_b).map(|_| {
                *a = work_a;
                *b = work_b;
            })
        }
    };

    if config.log_failures {
        if let Err(err) = &result {
            log::warn!("Gauss-Jordan elimination failed: {}", err);
        }
    }

    result
}

/// Compute the inverse of `a` without touching it.
pub fn invert<T: ComplexField>(a: &Array2<T>) -> Result<Array2<T>> {
    let mut inverse = a.clone();
    let mut rhs = Array2::zeros((a.nrows(), 0));
    gauss_jordan_in_place(&mut inverse, &mut rhs)?;
    Ok(inverse)
}

/// Solve `a * x = b` for a single right-hand side vector.
pub fn solve<T: ComplexField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    let mut work = a.clone();
    let mut rhs = b.clone().insert_axis(Axis(1));
    gauss_jordan_in_place(&mut work, &mut rhs)?;
    Ok(rhs.column(0).to_owned())
}

/// Solve `a * X = b` for a block of right-hand sides, returning the inverse too.
pub fn solve_multiple<T: ComplexField>(
    a: &Array2<T>,
    b: &Array2<T>,
) -> Result<GaussJordanSolution<T>> {
    let mut inverse = a.clone();
    let mut solution = b.clone();
    gauss_jordan_in_place(&mut inverse, &mut solution)?;
    Ok(GaussJordanSolution { inverse, solution })
}

fn check_dimensions<T>(a: &Array2<T>, b: &Array2<T>) -> Result<()> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(GaussJordanError::NotSquare { rows, cols });
    }
    if rows == 0 {
        return Err(GaussJordanError::EmptyMatrix);
    }
    if b.nrows() != rows {
        return Err(GaussJordanError::DimensionMismatch {
            expected: rows,
            got: b.nrows(),
        });
    }
    Ok(())
}

/// Elimination kernel. Dimensions must already be checked.
///
/// Returns the pivot chosen at every step.
pub(crate) fn reduce<T: ComplexField>(a: &mut Array2<T>, b: &mut Array2<T>) -> Result<Vec<Pivot>> {
    let n = a.nrows();
    let m = b.ncols();

    // Times each column has been chosen as pivot. After the row interchange
    // the pivot of column c sits in row c, so the count also marks used rows.
    let mut use_count = vec![0usize; n];
    let mut pivots = Vec::with_capacity(n);

    // Persist across steps: a search that finds nothing reuses the last pick.
    let mut irow = 0;
    let mut icol = 0;

    for step in 0..n {
        let mut big = T::Real::zero();
        for j in 0..n {
            if use_count[j] == 1 {
                continue;
            }
            for k in 0..n {
                match use_count[k] {
                    0 => {
                        // >= keeps the last of several equal maxima
                        let magnitude = a[[j, k]].norm();
                        if magnitude >= big {
                            big = magnitude;
                            irow = j;
                            icol = k;
                        }
                    }
                    1 => {}
                    _ => return Err(GaussJordanError::SingularMatrixDuringPivotSearch { step }),
                }
            }
        }
        use_count[icol] += 1;

        if irow != icol {
            for l in 0..n {
                a.swap([irow, l], [icol, l]);
            }
            for l in 0..m {
                b.swap([irow, l], [icol, l]);
            }
        }
        pivots.push(Pivot {
            row: irow,
            col: icol,
        });

        let pivot = a[[icol, icol]];
        if pivot == T::zero() {
            return Err(GaussJordanError::SingularMatrixZeroPivot { step, column: icol });
        }

        // The diagonal slot is reused for the inverse, so it becomes 1/pivot.
        let pivinv = pivot.inv();
        a[[icol, icol]] = T::one();
        a.row_mut(icol).mapv_inplace(|v| v * pivinv);
        b.row_mut(icol).mapv_inplace(|v| v * pivinv);

        for ll in 0..n {
            if ll == icol {
                continue;
            }
            let dum = a[[ll, icol]];
            a[[ll, icol]] = T::zero();
            for l in 0..n {
                let p = a[[icol, l]];
                a[[ll, l]] -= p * dum;
            }
            for l in 0..m {
                let p = b[[icol, l]];
                b[[ll, l]] -= p * dum;
            }
        }
    }

    // A column picked twice on the final step is never rescanned.
    if use_count.iter().any(|&count| count > 1) {
        return Err(GaussJordanError::SingularMatrixDuringPivotSearch { step: n - 1 });
    }

    for pivot in pivots.iter().rev() {
        if pivot.row != pivot.col {
            for k in 0..n {
                a.swap([k, pivot.row], [k, pivot.col]);
            }
        }
    }

    Ok(pivots)
}
