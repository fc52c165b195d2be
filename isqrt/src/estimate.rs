//! Root estimates for operands small enough to divide at full width.

//---------------------------------------------------------------------------------------------------- Import
use num_bigint::BigInt;

use nplus_helper::float::decompose;

use crate::{constants::SECOND_STEP_THRESHOLD, IsqrtError};

//---------------------------------------------------------------------------------------------------- Native
/// `floor(sqrt(x_f64))`.
///
/// Rounding `x` to an [`f64`] can push this one above the floor root,
/// the correction step takes care of that.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the root of a native operand is a positive 29 bit integer"
)]
pub(crate) fn native(x_f64: f64) -> BigInt {
    BigInt::from(x_f64.sqrt() as u64)
}

//---------------------------------------------------------------------------------------------------- Single refinement
/// One Newton step over the full width of `x`, seeded by the hardware square root.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the root is below 2^62"
)]
pub(crate) fn single_refinement(x: &BigInt, x_f64: f64) -> BigInt {
    let seed = BigInt::from(x_f64.sqrt() as u64);
    (x / &seed + seed) >> 1_u8
}

//---------------------------------------------------------------------------------------------------- Double extraction
/// One or two Newton steps over the full width of `x`,
/// seeded by the exact value of the hardware square root.
pub(crate) fn double_extraction(x: &BigInt, x_f64: f64) -> Result<BigInt, IsqrtError> {
    let mut val = decompose(x_f64.sqrt())?.to_bigint();

    val = (x / &val + &val) >> 1_u8;
    if x_f64 > SECOND_STEP_THRESHOLD {
        val = (x / &val + &val) >> 1_u8;
    }

    Ok(val)
}
