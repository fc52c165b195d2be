//! Fixed width views of the operand and the approximation.
//!
//! Newton-Plus treats `x` as a number with `x_len_mod` bits and reads only its top
//! bits each round. Early rounds can ask for a window wider than `x` itself,
//! so every shift here may go either way.

//---------------------------------------------------------------------------------------------------- Import
use num_bigint::BigInt;

//---------------------------------------------------------------------------------------------------- Free functions
/// The top `width` bits of `x`, where `x` is taken to be `x_len_mod` bits long.
///
/// `x` is shifted left when `width > x_len_mod`.
#[inline]
pub(crate) fn window(x: &BigInt, x_len_mod: u64, width: u64) -> BigInt {
    if x_len_mod >= width {
        x >> (x_len_mod - width)
    } else {
        x << (width - x_len_mod)
    }
}

/// Move `val` from a precision of `from` bits to `to` bits.
#[inline]
pub(crate) fn rescale(val: BigInt, from: u64, to: u64) -> BigInt {
    if from >= to {
        val >> (from - to)
    } else {
        val << (to - from)
    }
}
