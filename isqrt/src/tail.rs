//! The correction and validation every estimate goes through.

//---------------------------------------------------------------------------------------------------- Import
use num_bigint::BigInt;
use tracing::error;

use crate::IsqrtError;

//---------------------------------------------------------------------------------------------------- Free functions
/// Turn `val`, the floor root of `x` or one above it, into the floor root.
///
/// At most one decrement is applied, the result is then checked with
/// `val^2 <= x < (val + 1)^2`.
///
/// # Errors
/// Returns [`IsqrtError::RootTooHigh`] or [`IsqrtError::RootTooLow`]
/// if the estimate was off by more than one in either direction.
pub(crate) fn correct(x: &BigInt, mut val: BigInt) -> Result<BigInt, IsqrtError> {
    let mut square = &val * &val;

    if square > *x {
        // (val - 1)^2 == val^2 - (2 * val - 1)
        square -= (&val << 1_u8) - 1_u32;
        val -= 1_u32;
    }

    if square > *x {
        let bits = x.bits();
        error!(bits, "integer square root too high");
        return Err(IsqrtError::RootTooHigh { bits });
    }

    if square + (&val << 1_u8) + 1_u32 <= *x {
        let bits = x.bits();
        error!(bits, "integer square root too low");
        return Err(IsqrtError::RootTooLow { bits });
    }

    Ok(val)
}
