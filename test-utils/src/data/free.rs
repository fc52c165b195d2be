//! Free functions to access data.

//---------------------------------------------------------------------------------------------------- Import
use num_bigint::BigInt;
use num_traits::One;

use crate::data::constants::REGRESSION_OPERANDS;

//---------------------------------------------------------------------------------------------------- Free functions
/// Parse a decimal operand.
///
/// # Panics
/// Panics if `s` is not a decimal integer.
pub fn parse_operand(s: &str) -> BigInt {
    s.trim()
        .parse()
        .unwrap_or_else(|e| panic!("invalid operand {s:?}: {e}"))
}

/// Every operand in [`REGRESSION_OPERANDS`].
///
/// ```rust
/// # use nplus_test_utils::data::*;
/// let v = regression_operands();
/// assert!(v.len() > 10);
/// assert!(v.iter().any(|x| x.bits() > 40_000));
/// ```
pub fn regression_operands() -> Vec<BigInt> {
    REGRESSION_OPERANDS
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_operand)
        .collect()
}

/// `2^1024 + [-1, 1]`, the first operands too large for an [`f64`].
pub fn powers_of_two_past_f64() -> [BigInt; 3] {
    let power = BigInt::one() << 1024_u32;
    [&power - 1_u32, &power + 1_u32, power]
}
