//! Errors.

//---------------------------------------------------------------------------------------------------- Import
use nplus_helper::float::FloatError;

//---------------------------------------------------------------------------------------------------- IsqrtError
/// An error computing an integer square root.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IsqrtError {
    /// The operand was negative.
    #[error("cannot take the square root of a negative number")]
    NegativeOperand,

    /// The result squared was larger than the operand.
    #[error("internal error: root of a {bits} bit operand was too high")]
    RootTooHigh {
        /// Bit length of the operand.
        bits: u64,
    },

    /// The result plus one squared was not larger than the operand.
    #[error("internal error: root of a {bits} bit operand was too low")]
    RootTooLow {
        /// Bit length of the operand.
        bits: u64,
    },

    /// The hardware square root used as a seed could not be decomposed.
    #[error("internal error: unusable hardware seed")]
    Seed(#[from] FloatError),
}

impl IsqrtError {
    /// Returns `true` if this error is a defect in this crate
    /// rather than caused by the caller.
    ///
    /// ```rust
    /// # use nplus_isqrt::*;
    /// assert!(!IsqrtError::NegativeOperand.is_internal());
    /// assert!(IsqrtError::RootTooLow { bits: 512 }.is_internal());
    /// ```
    pub const fn is_internal(self) -> bool {
        !matches!(self, Self::NegativeOperand)
    }
}
