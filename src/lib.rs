// ============================================================================
// Decimal Engine Library
// Decimal-safe floating-point arithmetic with chainable operations
// ============================================================================

//! # Decimal Engine
//!
//! Exact decimal arithmetic over `f64` operands, without the rounding
//! artifacts of direct binary floating-point math.
//!
//! Plain `f64` gives `0.1 + 0.2 == 0.30000000000000004` and
//! `19.9 * 100.0 == 1989.9999999999998`. This crate decomposes each operand
//! into an integer significand and a power-of-ten scale, aligns the pair to
//! a common scale, combines them in the exact integer domain, and rescales
//! with a single float division at the end.
//!
//! ## Features
//!
//! - **Exact decimal results** for the four basic operations on typical
//!   decimal inputs
//! - **Chainable builder** that left-folds an operation across any number
//!   of operands without consuming them
//! - **Named input policy**: lenient (non-numeric operands coerce to zero)
//!   or strict (they fail with a typed error)
//! - **Closed operation enum** dispatched exhaustively, so an unsupported
//!   kind cannot be expressed
//!
//! ## Example
//!
//! ```rust
//! use decimal_engine::prelude::*;
//!
//! // Binary operations
//! assert_eq!(add(0.1, 0.2)?, 0.3);
//! assert_eq!(multiply(19.9, 100.0)?, 1990.0);
//! assert_eq!(subtract(0.3, 0.1)?, 0.2);
//! assert_eq!(divide(0.3, 0.1)?, 3.0);
//!
//! // Chained operands, finalized by kind
//! let chain = Chain::of([1.0, 2.0, 3.0]);
//! assert_eq!(chain.add()?, 6.0);
//! assert_eq!(chain.multiply()?, 6.0);
//!
//! // Fail-fast on non-numeric input when wanted
//! let strict = Chain::of([f64::NAN, 5.0]).with_policy(InputPolicy::Strict);
//! assert!(strict.add().is_err());
//! # Ok::<(), decimal_engine::numeric::ArithmeticError>(())
//! ```
//!
//! ## Supported Range
//!
//! Operands must decompose into an i64 significand with an i64 power-of-ten
//! scale: whole numbers up to the i64 range, fractional values with at most
//! 18 digits after the decimal point in their shortest rendering. Inputs
//! outside that range fail with [`ArithmeticError::Overflow`]
//! (the binary-float analogue of the exponential-notation limitation in
//! string-based scale extraction).
//!
//! [`ArithmeticError::Overflow`]: crate::numeric::ArithmeticError::Overflow

pub mod engine;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::engine::{
        add, divide, multiply, operate, operate_with, subtract, Chain, InputPolicy, Operation,
    };
    pub use crate::numeric::{ArithmeticError, ArithmeticResult, ScaledInteger};
}
