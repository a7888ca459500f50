//! Batch solving of independent systems
//!
//! Each [`LinearSystem`] owns its buffers, so the systems of a batch never
//! alias and can be reduced concurrently. Results come back in input order.

use crate::direct::{gauss_jordan, invert};
use crate::error::Result;
use crate::parallel::{is_parallel_available, parallel_map, parallel_map_mut};
use crate::traits::ComplexField;
use ndarray::Array2;

/// A coefficient matrix together with its block of right-hand sides
#[derive(Debug, Clone)]
pub struct LinearSystem<T: ComplexField> {
    /// Coefficient matrix, replaced by its inverse on success
    pub a: Array2<T>,
    /// Right-hand sides, replaced by the solutions on success
    pub b: Array2<T>,
}

impl<T: ComplexField> LinearSystem<T> {
    /// Create a system from a coefficient matrix and its right-hand sides
    pub fn new(a: Array2<T>, b: Array2<T>) -> Self {
        Self { a, b }
    }

    /// Create a system with no right-hand sides (inversion only)
    pub fn inversion(a: Array2<T>) -> Self {
        let b = Array2::zeros((a.nrows(), 0));
        Self { a, b }
    }
}

/// Reduce every system of the batch in place.
///
/// Uses [`gauss_jordan`], so a failing system keeps its original buffers while
/// the others are still solved.
pub fn gauss_jordan_batch<T: ComplexField>(systems: &mut [LinearSystem<T>]) -> Vec<Result<()>> {
    log::debug!(
        "Gauss-Jordan batch: {} systems (parallel: {})",
        systems.len(),
        is_parallel_available()
    );
    parallel_map_mut(systems, |system| gauss_jordan(&mut system.a, &mut system.b))
}

/// Invert every matrix of the batch, leaving the inputs untouched.
pub fn invert_batch<T: ComplexField>(matrices: &[Array2<T>]) -> Vec<Result<Array2<T>>> {
    parallel_map(matrices, invert)
}
