//! Finite-checked `f64` arithmetic.
//!
//! The pool engine works in IEEE 754 double precision.  [`CheckedFloat`]
//! wraps the four basic operations so that a `NaN` or `±∞` result becomes
//! an [`AmmError`] instead of silently poisoning pool state.
//!
//! # Precision characteristics
//!
//! | Aspect | Value |
//! |--------|-------|
//! | Significant digits | ~15–17 |
//! | Range | ±2^1024 |
//! | Determinism | Subject to IEEE 754 rounding |

use crate::error::AmmError;

/// Checked arithmetic on `f64`.
///
/// All methods return [`Err`] when the result is non-finite.  Division
/// additionally rejects an exact zero divisor with
/// [`AmmError::DivisionByZero`].
///
/// # Examples
///
/// ```
/// use token_swap::math::CheckedFloat;
///
/// let sum = 10.0_f64.checked_add_f(3.0);
/// assert_eq!(sum, Ok(13.0));
/// assert!(1.0_f64.checked_div_f(0.0).is_err());
/// ```
pub trait CheckedFloat: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the sum is not finite.
    fn checked_add_f(self, other: Self) -> Result<Self, AmmError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the difference is not finite.
    fn checked_sub_f(self, other: Self) -> Result<Self, AmmError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the product is not finite.
    fn checked_mul_f(self, other: Self) -> Result<Self, AmmError>;

    /// Checked division.
    ///
    /// # Errors
    ///
    /// - [`AmmError::DivisionByZero`] if `other` is zero.
    /// - [`AmmError::Overflow`] if the quotient is not finite.
    fn checked_div_f(self, other: Self) -> Result<Self, AmmError>;
}

impl CheckedFloat for f64 {
    #[inline]
    fn checked_add_f(self, other: Self) -> Result<Self, AmmError> {
        finite(self + other, "float addition overflow")
    }

    #[inline]
    fn checked_sub_f(self, other: Self) -> Result<Self, AmmError> {
        finite(self - other, "float subtraction overflow")
    }

    #[inline]
    fn checked_mul_f(self, other: Self) -> Result<Self, AmmError> {
        finite(self * other, "float multiplication overflow")
    }

    fn checked_div_f(self, other: Self) -> Result<Self, AmmError> {
        if other == 0.0 {
            return Err(AmmError::DivisionByZero);
        }
        finite(self / other, "float division overflow")
    }
}

#[inline]
fn finite(value: f64, context: &'static str) -> Result<f64, AmmError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AmmError::Overflow(context))
    }
}
