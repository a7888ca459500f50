//! Scalar abstraction for the elimination kernel
//!
//! [`ComplexField`] lets the Gauss-Jordan routines run unchanged over real and
//! complex matrices. Pivot selection only needs a magnitude that can be ordered,
//! an exact comparison against zero and a reciprocal.

use num_complex::{Complex32, Complex64};
use num_traits::{Float, NumAssign, One, Zero};
use std::fmt::Debug;
use std::ops::Neg;

/// Trait for scalar types that can be used as matrix entries.
///
/// # Implementations
///
/// Provided for:
/// - `f32` (single precision, matches the classic single-float routine)
/// - `f64` (default for most fitting and alignment problems)
/// - `Complex32`
/// - `Complex64`
pub trait ComplexField:
    NumAssign + Clone + Copy + Send + Sync + Debug + Zero + One + Neg<Output = Self> + 'static
{
    /// The real number type underlying this field
    type Real: Float + Send + Sync + Debug + 'static;

    /// Magnitude |z|
    ///
    /// Must be exact for reals and free of intermediate overflow for complex
    /// values, so that equal magnitudes compare equal during pivot search.
    fn norm(&self) -> Self::Real;

    /// Multiplicative inverse (1/z), finite for every finite nonzero z
    /// whose reciprocal is representable
    fn inv(&self) -> Self;
}

impl ComplexField for Complex64 {
    type Real = f64;

    #[inline]
    fn norm(&self) -> f64 {
        self.re.hypot(self.im)
    }

    #[inline]
    fn inv(&self) -> Self {
        // Scales by |z| twice instead of dividing by |z|², which under- or
        // overflows for magnitudes beyond 1e±154.
        self.finv()
    }
}

impl ComplexField for Complex32 {
    type Real = f32;

    #[inline]
    fn norm(&self) -> f32 {
        self.re.hypot(self.im)
    }

    #[inline]
    fn inv(&self) -> Self {
        self.finv()
    }
}

impl ComplexField for f64 {
    type Real = f64;

    #[inline]
    fn norm(&self) -> f64 {
        self.abs()
    }

    #[inline]
    fn inv(&self) -> Self {
        1.0 / *self
    }
}

impl ComplexField for f32 {
    type Real = f32;

    #[inline]
    fn norm(&self) -> f32 {
        self.abs()
    }

    #[inline]
    fn inv(&self) -> Self {
        1.0 / *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_complex64_field() {
        let z = Complex64::new(3.0, 4.0);
        assert_relative_eq!(ComplexField::norm(&z), 5.0);

        let product = z * ComplexField::inv(&z);
        assert_relative_eq!(product.re, 1.0, epsilon = 1e-12);
        assert_relative_eq!(product.im, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_f64_field() {
        let x: f64 = -3.0;
        assert_eq!(ComplexField::norm(&x), 3.0);
        assert_relative_eq!(ComplexField::inv(&x), -1.0 / 3.0);
    }

    #[test]
    fn test_real_norm_is_exact_for_large_values() {
        // sqrt(x * x) would overflow to infinity here
        let x: f64 = 1e200;
        assert_eq!(ComplexField::norm(&x), 1e200);
        let y: f32 = -1e30;
        assert_eq!(ComplexField::norm(&y), 1e30);
    }

    #[test]
    fn test_complex_inverse_of_tiny_and_huge_values() {
        let tiny = ComplexField::inv(&Complex64::new(1e-200, 0.0));
        assert_relative_eq!(tiny.re, 1e200, max_relative = 1e-12);
        assert_eq!(tiny.im, 0.0);

        let huge = ComplexField::inv(&Complex64::new(1e200, 0.0));
        assert_relative_eq!(huge.re, 1e-200, max_relative = 1e-12);
        assert_eq!(huge.im, 0.0);

        // 1 / (3 + 4i) * 1e200 = (0.12 - 0.16i) * 1e200
        let mixed = ComplexField::inv(&Complex64::new(3e-200, 4e-200));
        assert_relative_eq!(mixed.re, 1.2e199, max_relative = 1e-12);
        assert_relative_eq!(mixed.im, -1.6e199, max_relative = 1e-12);

        let single = ComplexField::inv(&Complex32::new(1e-30, 0.0));
        assert_relative_eq!(single.re, 1e30, max_relative = 1e-5);
    }
}
