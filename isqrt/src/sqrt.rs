//! Integer square root entry points.

//---------------------------------------------------------------------------------------------------- Import
use num_bigint::{BigInt, BigUint, Sign};
use tracing::trace;

use crate::{
    estimate::{double_extraction, native, single_refinement},
    newton_plus::newton_plus,
    regime::{approximate, Regime},
    tail::correct,
    IsqrtError,
};

//---------------------------------------------------------------------------------------------------- Free functions
/// Returns the floor square root of `x`, the largest `v` where `v * v <= x`.
///
/// ```rust
/// # use nplus_isqrt::*;
/// # use num_bigint::BigInt;
/// assert_eq!(integer_sqrt(&BigInt::from(0)), Ok(BigInt::from(0)));
/// assert_eq!(integer_sqrt(&BigInt::from(2)), Ok(BigInt::from(1)));
/// assert_eq!(integer_sqrt(&BigInt::from(99)), Ok(BigInt::from(9)));
///
/// let root = (BigInt::from(1) << 5000) - 1;
/// assert_eq!(integer_sqrt(&(&root * &root)), Ok(root));
/// ```
///
/// # Errors
/// Returns [`IsqrtError::NegativeOperand`] if `x < 0`.
///
/// Any other error means the result failed validation,
/// see [`IsqrtError::is_internal`].
pub fn integer_sqrt(x: &BigInt) -> Result<BigInt, IsqrtError> {
    if x.sign() == Sign::Minus {
        return Err(IsqrtError::NegativeOperand);
    }

    let x_f64 = approximate(x);
    let regime = Regime::classify_with(x, x_f64);
    trace!(%regime, bits = x.bits(), "integer square root");

    let estimate = match regime {
        Regime::Native => native(x_f64),
        Regime::SingleRefinement => single_refinement(x, x_f64),
        Regime::DoubleExtraction => double_extraction(x, x_f64)?,
        Regime::NewtonPlus => newton_plus(x, x_f64)?,
    };

    correct(x, estimate)
}

/// [`integer_sqrt`] for an unsigned operand.
///
/// ```rust
/// # use nplus_isqrt::*;
/// # use num_bigint::BigUint;
/// assert_eq!(integer_sqrt_unsigned(&BigUint::from(1_000_000_u32)), Ok(BigUint::from(1000_u32)));
/// ```
///
/// # Errors
/// Only internal errors are possible, see [`IsqrtError::is_internal`].
pub fn integer_sqrt_unsigned(x: &BigUint) -> Result<BigUint, IsqrtError> {
    let x = BigInt::from_biguint(Sign::Plus, x.clone());
    let root = integer_sqrt(&x)?;
    Ok(root.magnitude().clone())
}

//---------------------------------------------------------------------------------------------------- IntegerSqrt
/// Types with an exact floor square root.
///
/// ```rust
/// # use nplus_isqrt::*;
/// # use num_bigint::{BigInt, BigUint};
/// assert_eq!(BigInt::from(17).integer_sqrt(), Ok(BigInt::from(4)));
/// assert_eq!(BigUint::from(17_u32).integer_sqrt(), Ok(BigUint::from(4_u32)));
/// ```
pub trait IntegerSqrt {
    /// The type of the root.
    type Output;

    /// Returns the floor square root of `self`.
    ///
    /// # Errors
    /// See [`integer_sqrt`].
    fn integer_sqrt(&self) -> Result<Self::Output, IsqrtError>;
}

impl IntegerSqrt for BigInt {
    type Output = Self;

    #[inline]
    fn integer_sqrt(&self) -> Result<Self, IsqrtError> {
        integer_sqrt(self)
    }
}

impl IntegerSqrt for BigUint {
    type Output = Self;

    #[inline]
    fn integer_sqrt(&self) -> Result<Self, IsqrtError> {
        integer_sqrt_unsigned(self)
    }
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn small() {
        let expected = [0, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 4];
        for (x, root) in expected.into_iter().enumerate() {
            assert_eq!(integer_sqrt(&BigInt::from(x)), Ok(BigInt::from(root)));
        }
    }

    #[test]
    fn negative() {
        for x in [-1, -4, i64::MIN] {
            assert_eq!(integer_sqrt(&BigInt::from(x)), Err(IsqrtError::NegativeOperand));
        }
        assert_eq!(
            BigInt::from(-9).integer_sqrt(),
            Err(IsqrtError::NegativeOperand)
        );
    }

    #[test]
    fn every_regime() {
        for (x, regime) in [
            (BigInt::from(1) << 40, Regime::Native),
            (BigInt::from(1) << 100, Regime::SingleRefinement),
            (BigInt::from(1) << 300, Regime::DoubleExtraction),
            (BigInt::from(1) << 600, Regime::NewtonPlus),
            (BigInt::from(1) << 3000, Regime::NewtonPlus),
        ] {
            assert_eq!(Regime::classify(&x), regime);
            let root = BigInt::from(1) << (x.bits() / 2);
            assert_eq!(integer_sqrt(&x), Ok(root.clone()));
            assert_eq!(integer_sqrt(&(x - 1)), Ok(root - 1));
        }
    }

    #[test]
    fn unsigned_matches_signed() {
        let x = (BigUint::from(3_u32) << 1001_u32) + 12_345_u32;
        let signed = BigInt::from(x.clone()).integer_sqrt().unwrap();
        let unsigned = x.integer_sqrt().unwrap();
        assert_eq!(BigInt::from(unsigned), signed);
    }
}
