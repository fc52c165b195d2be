//! Operand families.
//!
//! Each function generates operands of one shape known to stress
//! square root code: values next to powers of two, long runs of ones,
//! alternating bits and squares. The generators are lazy, callers decide
//! how many values to take.

//---------------------------------------------------------------------------------------------------- Import
use std::ops::Range;

use num_bigint::{BigInt, BigUint, RandBigInt, Sign};
use num_traits::{One, Zero};
use rand::Rng;

//---------------------------------------------------------------------------------------------------- Constants
/// How far [`powers_of_two_offsets`] steps away from each power of two.
pub const POWER_OF_TWO_RADIUS: i32 = 5;

//---------------------------------------------------------------------------------------------------- Families
/// Every integer in `range`.
pub fn counting(range: Range<u64>) -> impl Iterator<Item = BigInt> {
    range.map(BigInt::from)
}

/// `2^n + [-5, 5]` for every `n` in `exponents`, skipping negative values.
///
/// ```rust
/// # use nplus_test_utils::family::*;
/// let v: Vec<_> = powers_of_two_offsets(0..1).map(|x| x.to_string()).collect();
/// assert_eq!(v, ["0", "1", "2", "3", "4", "5", "6"]);
/// ```
pub fn powers_of_two_offsets(exponents: Range<u64>) -> impl Iterator<Item = BigInt> {
    exponents.flat_map(|n| {
        let power = BigInt::one() << n;
        (-POWER_OF_TWO_RADIUS..=POWER_OF_TWO_RADIUS)
            .map(move |offset| &power + offset)
            .filter(|x| x.sign() != Sign::Minus)
    })
}

/// `length` bit operands made of a run of ones followed by zeros,
/// from `100..0` up to `111..1`.
///
/// ```rust
/// # use nplus_test_utils::family::*;
/// let v: Vec<_> = ones_then_zeros(3).map(|x| x.to_str_radix(2)).collect();
/// assert_eq!(v, ["100", "110", "111"]);
/// ```
pub fn ones_then_zeros(length: u64) -> impl Iterator<Item = BigInt> {
    (1..=length).map(move |ones| ((BigInt::one() << ones) - 1_u32) << (length - ones))
}

/// The `length` bit operand `1010...` with alternating bits.
///
/// Returns `0` for a `length` of `0`.
///
/// ```rust
/// # use nplus_test_utils::family::*;
/// assert_eq!(alternating(1).to_str_radix(2), "1");
/// assert_eq!(alternating(4).to_str_radix(2), "1010");
/// assert_eq!(alternating(7).to_str_radix(2), "1010101");
/// ```
pub fn alternating(length: u64) -> BigInt {
    if length == 0 {
        return BigInt::zero();
    }

    let mut v = BigInt::one();
    for _ in (2..length).step_by(2) {
        v = (v << 2_u8) + 1_u32;
    }
    if length % 2 == 0 {
        v <<= 1_u8;
    }

    v
}

/// The largest and smallest operands sharing the floor square root `n`,
/// i.e. `(n^2, n^2 + 2n)`.
///
/// ```rust
/// # use nplus_test_utils::family::*;
/// # use num_bigint::BigInt;
/// assert_eq!(square_pair(&BigInt::from(3)), (BigInt::from(9), BigInt::from(15)));
/// ```
pub fn square_pair(n: &BigInt) -> (BigInt, BigInt) {
    let square = n * n;
    let last = &square + (n << 1_u8);
    (square, last)
}

/// Every non-negative integer within `radius` of `center`.
pub fn neighbourhood(center: &BigInt, radius: u64) -> impl Iterator<Item = BigInt> {
    let start = center - radius;
    (0..=radius.saturating_mul(2))
        .map(move |i| &start + i)
        .filter(|x| x.sign() != Sign::Minus)
}

/// A random operand whose bit length is drawn uniformly from `bits`.
///
/// The top bit is always set, so the bit length is exact.
///
/// # Panics
/// Panics if `bits` is empty or contains `0`.
pub fn random_operand<R: Rng + ?Sized>(rng: &mut R, bits: Range<u64>) -> BigInt {
    assert!(bits.start > 0, "operands have at least one bit");

    let length = rng.gen_range(bits);
    let low: BigUint = rng.gen_biguint(length - 1);
    BigInt::from(low + (BigUint::one() << (length - 1)))
}
