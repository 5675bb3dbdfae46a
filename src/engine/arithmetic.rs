// ============================================================================
// Aligned Integer Arithmetic
// The four decimal-safe operations over scale-aligned significands
// ============================================================================

use super::policy::InputPolicy;
use crate::numeric::{ArithmeticError, ArithmeticResult, ScaledInteger};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The four supported operation kinds.
///
/// Dispatch is an exhaustive match, so an unsupported kind cannot be
/// expressed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    /// Exact addition over aligned significands
    Add,
    /// Exact subtraction over aligned significands
    Subtract,
    /// Integer product over the product of scales
    Multiply,
    /// Significand quotient rescaled by the scale quotient.
    ///
    /// A zero divisor propagates infinity or NaN per IEEE-754; it is not
    /// trapped.
    Divide,
}

impl Operation {
    /// Lower-case name, for logs and messages.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Core Operation
// ============================================================================

/// Apply `op` to two operands under the default lenient policy.
///
/// Both operands are decomposed into scaled integers, aligned to a common
/// power-of-ten scale, combined in the integer domain, and rescaled with a
/// single float division. For typical decimal inputs the result carries no
/// binary rounding artifact: `operate(Operation::Add, 0.1, 0.2)` is exactly
/// `0.3`.
///
/// # Errors
/// Returns `Overflow` if an operand or an aligned intermediate leaves the
/// i64 range.
#[inline]
pub fn operate(op: Operation, lhs: f64, rhs: f64) -> ArithmeticResult<f64> {
    operate_with(InputPolicy::default(), op, lhs, rhs)
}

/// Apply `op` to two operands under an explicit input policy.
///
/// # Errors
/// - `InvalidOperand` for a non-finite operand under `InputPolicy::Strict`
/// - `Overflow` if an operand or an aligned intermediate leaves the i64
///   range
pub fn operate_with(
    policy: InputPolicy,
    op: Operation,
    lhs: f64,
    rhs: f64,
) -> ArithmeticResult<f64> {
    let a = policy.convert(lhs)?;
    let b = policy.convert(rhs)?;

    match op {
        Operation::Add => {
            let (n1, n2, scale) = align(a, b)?;
            let sum = n1.checked_add(n2).ok_or(ArithmeticError::Overflow)?;
            Ok(sum as f64 / scale as f64)
        },
        Operation::Subtract => {
            let (n1, n2, scale) = align(a, b)?;
            let difference = n1.checked_sub(n2).ok_or(ArithmeticError::Overflow)?;
            Ok(difference as f64 / scale as f64)
        },
        Operation::Multiply => {
            // i128 intermediates keep the integer product exact; the single
            // float division at the end is the only rounding step.
            let product = a.significand() as i128 * b.significand() as i128;
            let scale = a.scale() as i128 * b.scale() as i128;
            Ok(product as f64 / scale as f64)
        },
        Operation::Divide => Ok((a.significand() as f64 / b.significand() as f64)
            * (b.scale() as f64 / a.scale() as f64)),
    }
}

/// Lift both significands to the larger of the two scales.
///
/// The scale ratio is an exact integer because both scales are powers of
/// ten. Returns `(n1, n2, common_scale)`.
fn align(a: ScaledInteger, b: ScaledInteger) -> ArithmeticResult<(i64, i64, i64)> {
    let (t1, t2) = (a.scale(), b.scale());

    if t1 == t2 {
        Ok((a.significand(), b.significand(), t1))
    } else if t1 > t2 {
        let lifted = b
            .significand()
            .checked_mul(t1 / t2)
            .ok_or(ArithmeticError::Overflow)?;
        Ok((a.significand(), lifted, t1))
    } else {
        let lifted = a
            .significand()
            .checked_mul(t2 / t1)
            .ok_or(ArithmeticError::Overflow)?;
        Ok((lifted, b.significand(), t2))
    }
}

// ============================================================================
// Convenience Wrappers
// ============================================================================

/// Decimal-safe `lhs + rhs` under the lenient policy.
#[inline]
pub fn add(lhs: f64, rhs: f64) -> ArithmeticResult<f64> {
    operate(Operation::Add, lhs, rhs)
}

/// Decimal-safe `lhs - rhs` under the lenient policy.
#[inline]
pub fn subtract(lhs: f64, rhs: f64) -> ArithmeticResult<f64> {
    operate(Operation::Subtract, lhs, rhs)
}

/// Decimal-safe `lhs * rhs` under the lenient policy.
#[inline]
pub fn multiply(lhs: f64, rhs: f64) -> ArithmeticResult<f64> {
    operate(Operation::Multiply, lhs, rhs)
}

/// Decimal-safe `lhs / rhs` under the lenient policy.
///
/// A zero divisor yields infinity or NaN per IEEE-754.
#[inline]
pub fn divide(lhs: f64, rhs: f64) -> ArithmeticResult<f64> {
    operate(Operation::Divide, lhs, rhs)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_exact() {
        // Plain f64 gives 0.30000000000000004 here
        assert_eq!(add(0.1, 0.2).unwrap(), 0.3);
        assert_eq!(add(0.2, 0.4).unwrap(), 0.6);
        assert_eq!(add(1.0, 2.0).unwrap(), 3.0);
    }

    #[test]
    fn test_add_mixed_scales() {
        // Scales 10 and 100 align to 100
        assert_eq!(add(0.1, 0.25).unwrap(), 0.35);
        assert_eq!(add(19.9, 0.1).unwrap(), 20.0);
        assert_eq!(add(5.0, 0.75).unwrap(), 5.75);
    }

    #[test]
    fn test_subtract_exact() {
        // Plain f64 gives 0.19999999999999998 here
        assert_eq!(subtract(0.3, 0.1).unwrap(), 0.2);
        assert_eq!(subtract(1.5, 1.2).unwrap(), 0.3);
        assert_eq!(subtract(0.1, 0.3).unwrap(), -0.2);
    }

    #[test]
    fn test_multiply_exact() {
        // Plain f64 gives 1989.9999999999998 here
        assert_eq!(multiply(19.9, 100.0).unwrap(), 1990.0);
        assert_eq!(multiply(0.1, 0.2).unwrap(), 0.02);
        assert_eq!(multiply(-0.5, 0.5).unwrap(), -0.25);
    }

    #[test]
    fn test_divide_exact() {
        // Plain f64 gives 2.9999999999999996 here
        assert_eq!(divide(0.3, 0.1).unwrap(), 3.0);
        assert_eq!(divide(2.5, 0.5).unwrap(), 5.0);
        assert_eq!(divide(-0.6, 0.2).unwrap(), -3.0);
    }

    #[test]
    fn test_divide_by_zero_propagates() {
        assert_eq!(divide(1.0, 0.0).unwrap(), f64::INFINITY);
        assert_eq!(divide(-1.0, 0.0).unwrap(), f64::NEG_INFINITY);
        assert!(divide(0.0, 0.0).unwrap().is_nan());
    }

    #[test]
    fn test_lenient_coerces_nan_to_zero() {
        assert_eq!(add(f64::NAN, 5.0).unwrap(), 5.0);
        assert_eq!(subtract(5.0, f64::NAN).unwrap(), 5.0);
        assert_eq!(multiply(f64::NAN, 5.0).unwrap(), 0.0);
    }

    #[test]
    fn test_strict_rejects_nan() {
        assert_eq!(
            operate_with(InputPolicy::Strict, Operation::Add, f64::NAN, 5.0),
            Err(ArithmeticError::InvalidOperand)
        );
        assert_eq!(
            operate_with(InputPolicy::Strict, Operation::Divide, 1.0, f64::INFINITY),
            Err(ArithmeticError::InvalidOperand)
        );
    }

    #[test]
    fn test_align_overflow_surfaces() {
        // Lifting a large whole number by 10^18 cannot stay in i64
        let tiny = 1e-18;
        assert_eq!(
            operate(Operation::Add, 1e18, tiny),
            Err(ArithmeticError::Overflow)
        );
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(Operation::Add.to_string(), "add");
        assert_eq!(Operation::Subtract.to_string(), "subtract");
        assert_eq!(Operation::Multiply.to_string(), "multiply");
        assert_eq!(Operation::Divide.to_string(), "divide");
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn add_is_commutative(
            a in any::<f64>().prop_filter("finite", |v| v.is_finite()),
            b in any::<f64>().prop_filter("finite", |v| v.is_finite()),
        ) {
            prop_assert_eq!(add(a, b), add(b, a));
        }

        #[test]
        fn multiply_is_commutative(
            a in any::<f64>().prop_filter("finite", |v| v.is_finite()),
            b in any::<f64>().prop_filter("finite", |v| v.is_finite()),
        ) {
            prop_assert_eq!(multiply(a, b), multiply(b, a));
        }

        #[test]
        fn whole_add_then_subtract_round_trips(a in any::<i32>(), b in any::<i32>()) {
            let sum = add(f64::from(a), f64::from(b)).unwrap();
            let back = subtract(sum, f64::from(b)).unwrap();
            prop_assert_eq!(back, f64::from(a));
        }
    }
}
