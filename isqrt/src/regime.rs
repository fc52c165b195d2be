//! Operand magnitude classification.

//---------------------------------------------------------------------------------------------------- Import
use std::fmt::{self, Display};

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::constants::{DOUBLE_EXTRACTION_LIMIT, NATIVE_LIMIT, SINGLE_REFINEMENT_LIMIT};

//---------------------------------------------------------------------------------------------------- Regime
/// The way an operand's root estimate is computed, selected by its magnitude.
///
/// Variants are ordered by the operand sizes they handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Regime {
    /// Hardware square root, see [`NATIVE_LIMIT`].
    Native,
    /// One full width Newton step, see [`SINGLE_REFINEMENT_LIMIT`].
    SingleRefinement,
    /// A decomposed hardware seed and up to two full width Newton steps,
    /// see [`DOUBLE_EXTRACTION_LIMIT`].
    DoubleExtraction,
    /// Precision doubling Newton steps over windows of the operand.
    NewtonPlus,
}

impl Regime {
    /// All regimes, from the smallest operands to the largest.
    pub const ALL: [Self; 4] = [
        Self::Native,
        Self::SingleRefinement,
        Self::DoubleExtraction,
        Self::NewtonPlus,
    ];

    /// Select the regime for `x`.
    ///
    /// The sign of `x` is not checked,
    /// negative operands are rejected before classification.
    ///
    /// ```rust
    /// # use nplus_isqrt::*;
    /// # use num_bigint::BigInt;
    /// assert_eq!(Regime::classify(&BigInt::from(0)), Regime::Native);
    /// assert_eq!(Regime::classify(&BigInt::from(u64::MAX)), Regime::SingleRefinement);
    /// assert_eq!(Regime::classify(&(BigInt::from(1) << 200)), Regime::DoubleExtraction);
    /// assert_eq!(Regime::classify(&(BigInt::from(1) << 2000)), Regime::NewtonPlus);
    /// ```
    pub fn classify(x: &BigInt) -> Self {
        Self::classify_with(x, approximate(x))
    }

    /// [`Self::classify`] with `x` already converted by [`approximate`].
    pub(crate) fn classify_with(x: &BigInt, x_f64: f64) -> Self {
        if x.to_u64().is_some_and(|n| n < NATIVE_LIMIT) {
            Self::Native
        } else if x_f64 < SINGLE_REFINEMENT_LIMIT {
            Self::SingleRefinement
        } else if x_f64 < DOUBLE_EXTRACTION_LIMIT {
            Self::DoubleExtraction
        } else {
            Self::NewtonPlus
        }
    }

    /// A stable, `snake_case` name for this regime.
    ///
    /// ```rust
    /// # use nplus_isqrt::*;
    /// assert_eq!(Regime::NewtonPlus.as_str(), "newton_plus");
    /// assert_eq!(Regime::NewtonPlus.to_string(), "newton_plus");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::SingleRefinement => "single_refinement",
            Self::DoubleExtraction => "double_extraction",
            Self::NewtonPlus => "newton_plus",
        }
    }
}

impl Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//---------------------------------------------------------------------------------------------------- Free functions
/// `x` rounded to the nearest [`f64`], infinite if it is out of range.
pub(crate) fn approximate(x: &BigInt) -> f64 {
    x.to_f64().unwrap_or(f64::INFINITY)
}
