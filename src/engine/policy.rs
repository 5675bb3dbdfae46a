// ============================================================================
// Input Policy
// Named policy for handling non-numeric operands
// ============================================================================

use crate::numeric::{ArithmeticResult, ScaledInteger};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the engine treats operands that are not finite numbers.
///
/// The default is [`InputPolicy::Lenient`], which coerces NaN and infinite
/// operands to zero so a stray non-numeric value cannot poison a whole
/// calculation. [`InputPolicy::Strict`] fails fast with
/// [`ArithmeticError::InvalidOperand`](crate::numeric::ArithmeticError::InvalidOperand)
/// instead, for callers who would rather surface the bug than mask it.
///
/// The policy governs operand conversion only; values outside the supported
/// range fail with `Overflow` under both policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InputPolicy {
    /// Coerce NaN and infinite operands to zero
    #[default]
    Lenient,
    /// Reject NaN and infinite operands with `InvalidOperand`
    Strict,
}

impl InputPolicy {
    /// Convert an operand to its scaled-integer form under this policy.
    ///
    /// # Errors
    /// - `InvalidOperand` for non-finite input under `Strict`
    /// - `Overflow` if the value is outside the supported range
    #[inline]
    pub fn convert(self, value: f64) -> ArithmeticResult<ScaledInteger> {
        match self {
            InputPolicy::Lenient => ScaledInteger::from_f64_or_zero(value),
            InputPolicy::Strict => ScaledInteger::from_f64(value),
        }
    }
}
