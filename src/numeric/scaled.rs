// ============================================================================
// Scaled Integer
// Decomposes a binary float into an integer significand and a power-of-ten
// scale, so arithmetic can run in the exact integer domain
// ============================================================================

use super::errors::{ArithmeticError, ArithmeticResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 2^63 as f64. Finite inputs at or beyond this magnitude cannot be held in
/// an i64 significand.
const SIGNIFICAND_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// A float decomposed into `significand / scale`.
///
/// `scale` is always a power of ten and at least 1. A whole-number input
/// short-circuits to `(value, 1)`; a fractional input is magnified by the
/// number of digits in its decimal rendering, so `3.14` becomes `(314, 100)`.
///
/// Values are created per operand, never mutated, and discarded once the
/// operation completes.
///
/// # Supported Range
/// Whole inputs must fit in an i64; fractional inputs may carry at most 18
/// digits after the decimal point (the largest power of ten an i64 holds).
/// Inputs outside that range fail with [`ArithmeticError::Overflow`].
///
/// # Example
/// ```
/// use decimal_engine::numeric::ScaledInteger;
///
/// let pi = ScaledInteger::from_f64(3.14)?;
/// assert_eq!(pi.significand(), 314);
/// assert_eq!(pi.scale(), 100);
/// # Ok::<(), decimal_engine::numeric::ArithmeticError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScaledInteger {
    significand: i64,
    scale: i64,
}

impl ScaledInteger {
    /// Zero value (significand 0, scale 1)
    pub const ZERO: Self = Self {
        significand: 0,
        scale: 1,
    };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Decompose a float, rejecting non-finite input.
    ///
    /// # Errors
    /// - `InvalidOperand` if the value is NaN or infinite
    /// - `Overflow` if the significand or scale cannot fit in an i64
    pub fn from_f64(value: f64) -> ArithmeticResult<Self> {
        if !value.is_finite() {
            return Err(ArithmeticError::InvalidOperand);
        }
        Self::extract(value)
    }

    /// Decompose a float, coercing non-finite input to zero.
    ///
    /// This is the lenient policy of the engine: a NaN or infinite operand
    /// becomes `(0, 1)` instead of an error.
    ///
    /// # Errors
    /// Returns `Overflow` if the significand or scale cannot fit in an i64.
    pub fn from_f64_or_zero(value: f64) -> ArithmeticResult<Self> {
        if !value.is_finite() {
            tracing::debug!(%value, "non-numeric operand coerced to zero");
            return Ok(Self::ZERO);
        }
        Self::extract(value)
    }

    /// The conversion itself. `value` is finite here.
    ///
    /// A whole number is returned unscaled. Anything else is rendered in
    /// fixed decimal form (Rust's `Display` for f64 is shortest-round-trip
    /// and never exponential), the digits after the point determine the
    /// scale, and the significand is the magnified magnitude truncated
    /// toward zero with the sign restored. Truncation, not rounding, is the
    /// contract: a value whose magnified form lands just below the next
    /// integer keeps the lower significand.
    fn extract(value: f64) -> ArithmeticResult<Self> {
        if value.floor() == value {
            if value < -SIGNIFICAND_LIMIT || value >= SIGNIFICAND_LIMIT {
                return Err(ArithmeticError::Overflow);
            }
            return Ok(Self {
                significand: value as i64,
                scale: 1,
            });
        }

        let rendered = value.to_string();
        let point = rendered
            .find('.')
            .expect("non-integral f64 renders with a decimal point");
        let fraction_digits = (rendered.len() - point - 1) as u32;

        let scale = 10i64
            .checked_pow(fraction_digits)
            .ok_or(ArithmeticError::Overflow)?;

        let magnified = value.abs() * scale as f64;
        if magnified >= SIGNIFICAND_LIMIT {
            return Err(ArithmeticError::Overflow);
        }

        let magnitude = magnified as i64;
        Ok(Self {
            significand: if value < 0.0 { -magnitude } else { magnitude },
            scale,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The integer numerator.
    #[inline]
    pub const fn significand(self) -> i64 {
        self.significand
    }

    /// The power-of-ten denominator (always >= 1).
    #[inline]
    pub const fn scale(self) -> i64 {
        self.scale
    }

    /// Number of digits after the decimal point (log10 of the scale).
    #[inline]
    pub fn decimal_places(self) -> u32 {
        self.scale.ilog10()
    }

    /// Whether the original value was a whole number.
    #[inline]
    pub const fn is_integral(self) -> bool {
        self.scale == 1
    }

    /// Reconstruct the float this pair represents.
    #[inline]
    pub fn value(self) -> f64 {
        self.significand as f64 / self.scale as f64
    }

    // ========================================================================
    // Conversion to rust_decimal (for API boundaries)
    // ========================================================================

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// Intended for display and interop at API boundaries; the engine itself
    /// operates on the raw pair.
    pub fn to_decimal(self) -> rust_decimal::Decimal {
        rust_decimal::Decimal::from_i128_with_scale(self.significand as i128, self.decimal_places())
    }
}

impl fmt::Display for ScaledInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

// ============================================================================
// Tests
// ============================================================================
