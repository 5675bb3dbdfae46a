// ============================================================================
// Numeric Module
// Scaled-integer decomposition for decimal-safe arithmetic
// ============================================================================
//
// This module provides:
// - ScaledInteger: a float decomposed into (significand, power-of-ten scale)
// - ArithmeticError: error types for conversion and folding
//
// Design principles:
// - Integer-domain arithmetic wherever exactness matters
// - All conversions return Result (no panics)
// - Pairs are per-operand values with no lifecycle beyond one operation

mod errors;
mod scaled;

pub use errors::{ArithmeticError, ArithmeticResult};
pub use scaled::ScaledInteger;
