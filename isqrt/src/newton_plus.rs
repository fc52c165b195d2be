//! Newton-Plus, the estimate for operands above [`DOUBLE_EXTRACTION_LIMIT`].
//!
//! Every round doubles the number of correct bits in the approximation.
//! Instead of dividing by the full width operand, a round only reads the top
//! `3 * size` bits of `x`, where `size` is the precision reached so far.
//!
//! Once `x` is past [`ACCELERATED_THRESHOLD`] the rounds switch to a residual form,
//! `val = (val << size) + (x' - (val^2 << (size - 1))) / val`,
//! which keeps the dividend small.
//!
//! [`DOUBLE_EXTRACTION_LIMIT`]: crate::constants::DOUBLE_EXTRACTION_LIMIT

//---------------------------------------------------------------------------------------------------- Import
use num_bigint::BigInt;

use nplus_helper::float::decompose;

use crate::{
    constants::{
        ACCELERATED_THRESHOLD, CLASSICAL_PRECISION_LIMIT, SEED_BITS, SEED_FRACTION_BITS,
        SEED_PRECISION, SEED_WINDOW_BITS,
    },
    regime::approximate,
    window::{rescale, window},
    IsqrtError,
};

//---------------------------------------------------------------------------------------------------- Newton-Plus
/// Estimate the floor root of `x`, possibly one too high.
pub(crate) fn newton_plus(x: &BigInt, x_f64: f64) -> Result<BigInt, IsqrtError> {
    let x_len = x.bits();
    let wanted = x_len.div_ceil(2);
    // The next odd number above `x_len`.
    let x_len_mod = x_len + (x_len & 1) + 1;

    let seed = BigInt::from(seed(x, x_len_mod)?);
    let mut val = (&seed << (SEED_BITS - 1)) + window(x, x_len_mod, 3 * SEED_BITS) / &seed;
    let mut size = SEED_PRECISION;

    while size < CLASSICAL_PRECISION_LIMIT {
        val = (&val << (size - 1)) + window(x, x_len_mod, 3 * size) / &val;
        size <<= 1;
    }

    if x_f64 > ACCELERATED_THRESHOLD {
        let steps = newton_steps(wanted, size);
        let start = (wanted >> steps) + 2;

        val = rescale(val, size, start);
        size = start;

        loop {
            let residual = window(x, x_len_mod, 3 * size) - ((&val * &val) << (size - 1));
            val = (&val << size) + residual / &val;
            size <<= 1;

            if size >= wanted {
                break;
            }
        }
    }

    Ok(rescale(val, size, wanted))
}

/// The 53 bit seed, `floor(sqrt(top) * 2^22)`, where `top` is the
/// [`SEED_WINDOW_BITS`] wide window at the top of `x`.
///
/// When the hardware root rounds up to exactly `2^31` the seed is `2^53`.
fn seed(x: &BigInt, x_len_mod: u64) -> Result<u64, IsqrtError> {
    let top = approximate(&window(x, x_len_mod, SEED_WINDOW_BITS));
    Ok(decompose(top.sqrt())?.scaled(SEED_FRACTION_BITS)?)
}

/// Rounds needed to grow from `size` to `wanted` bits,
/// i.e. the bit length of `wanted / size`.
const fn newton_steps(wanted: u64, size: u64) -> u32 {
    u64::BITS - (wanted / size).leading_zeros()
}
