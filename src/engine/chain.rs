// ============================================================================
// Chained Arithmetic
// Builder that collects operands and left-folds one operation across them
// ============================================================================

use super::arithmetic::{operate_with, Operation};
use super::policy::InputPolicy;
use crate::numeric::{ArithmeticError, ArithmeticResult};
use smallvec::SmallVec;

/// An ordered sequence of operands with four finalizing operations.
///
/// `Chain` replaces ad-hoc call chaining with an explicit owned sequence:
/// appending returns the extended chain, and finalizing left-folds the
/// chosen operation across the operands without consuming them. The same
/// chain can therefore be finalized several times, with different kinds,
/// and every result is computed from the full original sequence.
///
/// A chain with a single operand returns that operand verbatim; the binary
/// operation only runs between consecutive pairs, as in any left-fold.
///
/// # Example
/// ```
/// use decimal_engine::engine::Chain;
///
/// let total = Chain::of([0.1, 0.2]).add()?;
/// assert_eq!(total, 0.3);
///
/// let scaled = Chain::of([19.9]).push(100.0).multiply()?;
/// assert_eq!(scaled, 1990.0);
/// # Ok::<(), decimal_engine::numeric::ArithmeticError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Chain {
    operands: SmallVec<[f64; 8]>,
    policy: InputPolicy,
}

impl Chain {
    /// Create a chain from zero or more initial operands.
    pub fn of(operands: impl IntoIterator<Item = f64>) -> Self {
        Self {
            operands: operands.into_iter().collect(),
            policy: InputPolicy::default(),
        }
    }

    /// Builder method: set the input policy for every folded operation.
    pub fn with_policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Append one operand, returning the extended chain.
    pub fn push(mut self, operand: f64) -> Self {
        self.operands.push(operand);
        self
    }

    /// Append several operands, returning the extended chain.
    pub fn extend(mut self, operands: impl IntoIterator<Item = f64>) -> Self {
        self.operands.extend(operands);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The collected operands, in append order.
    #[inline]
    pub fn operands(&self) -> &[f64] {
        &self.operands
    }

    /// Number of collected operands.
    #[inline]
    pub fn len(&self) -> usize {
        self.operands.len()
    }

    /// Whether the chain holds no operands.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operands.is_empty()
    }

    /// The active input policy.
    #[inline]
    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    // ========================================================================
    // Finalizers
    // ========================================================================

    /// Left-fold decimal-safe addition across the operands.
    #[inline]
    pub fn add(&self) -> ArithmeticResult<f64> {
        self.fold(Operation::Add)
    }

    /// Left-fold decimal-safe subtraction across the operands.
    #[inline]
    pub fn subtract(&self) -> ArithmeticResult<f64> {
        self.fold(Operation::Subtract)
    }

    /// Left-fold decimal-safe multiplication across the operands.
    #[inline]
    pub fn multiply(&self) -> ArithmeticResult<f64> {
        self.fold(Operation::Multiply)
    }

    /// Left-fold decimal-safe division across the operands.
    #[inline]
    pub fn divide(&self) -> ArithmeticResult<f64> {
        self.fold(Operation::Divide)
    }

    /// Left-fold `op` across the operands.
    ///
    /// Finalizing borrows the chain, so the sequence stays intact for
    /// further appends or another finalize.
    ///
    /// # Errors
    /// - `EmptyChain` if no operands were collected
    /// - Any error from the underlying operation
    pub fn fold(&self, op: Operation) -> ArithmeticResult<f64> {
        let (&first, rest) = self
            .operands
            .split_first()
            .ok_or(ArithmeticError::EmptyChain)?;

        rest.iter()
            .try_fold(first, |accumulator, &operand| {
                operate_with(self.policy, op, accumulator, operand)
            })
    }
}

impl FromIterator<f64> for Chain {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::of(iter)
    }
}

impl From<&[f64]> for Chain {
    fn from(operands: &[f64]) -> Self {
        Self::of(operands.iter().copied())
    }
}

// ============================================================================
// Tests
// ============================================================================
