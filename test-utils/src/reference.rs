//! Reference floor square roots.
//!
//! These are slow and simple on purpose, results from
//! faster implementations are compared against them.

//---------------------------------------------------------------------------------------------------- Import
use num_bigint::{BigInt, Sign};
use num_traits::{One, Zero};

//---------------------------------------------------------------------------------------------------- Free functions
/// Returns `true` if `root` is the floor square root of `x`,
/// i.e. `root^2 <= x < (root + 1)^2`.
///
/// ```rust
/// # use nplus_test_utils::reference::*;
/// # use num_bigint::BigInt;
/// assert!(is_floor_sqrt(&BigInt::from(15), &BigInt::from(3)));
/// assert!(is_floor_sqrt(&BigInt::from(16), &BigInt::from(4)));
/// assert!(!is_floor_sqrt(&BigInt::from(16), &BigInt::from(3)));
/// assert!(!is_floor_sqrt(&BigInt::from(15), &BigInt::from(4)));
/// ```
pub fn is_floor_sqrt(x: &BigInt, root: &BigInt) -> bool {
    if root.sign() == Sign::Minus {
        return false;
    }

    let lower = root * root;
    let upper = &lower + (root << 1_u8) + 1_u32;

    lower <= *x && *x < upper
}

/// Floor square root by binary search over `[0, 2^(bits/2 + 1))`.
///
/// ```rust
/// # use nplus_test_utils::reference::*;
/// # use num_bigint::BigInt;
/// assert_eq!(bisection_sqrt(&BigInt::from(0)), BigInt::from(0));
/// assert_eq!(bisection_sqrt(&BigInt::from(99)), BigInt::from(9));
/// assert_eq!(bisection_sqrt(&BigInt::from(100)), BigInt::from(10));
/// ```
///
/// # Panics
/// Panics if `x` is negative.
pub fn bisection_sqrt(x: &BigInt) -> BigInt {
    assert_ne!(x.sign(), Sign::Minus, "negative operand");

    let mut low = BigInt::zero();
    let mut high = BigInt::one() << (x.bits() / 2 + 1);

    // Invariant: `low^2 <= x < high^2`.
    while &high - &low > BigInt::one() {
        let middle: BigInt = (&low + &high) >> 1_u8;
        if &middle * &middle <= *x {
            low = middle;
        } else {
            high = middle;
        }
    }

    low
}

/// Floor square root by classic Newton iteration,
/// starting at `x / 2` and stepping while `y > x / y`.
///
/// This converges slowly for large operands, it is only
/// meant as an independent check.
///
/// ```rust
/// # use nplus_test_utils::reference::*;
/// # use num_bigint::BigInt;
/// assert_eq!(classic_newton_sqrt(&BigInt::from(1)), BigInt::from(1));
/// assert_eq!(classic_newton_sqrt(&BigInt::from(3)), BigInt::from(1));
/// assert_eq!(classic_newton_sqrt(&BigInt::from(1_000_001)), BigInt::from(1000));
/// ```
///
/// # Panics
/// Panics if `x` is negative.
pub fn classic_newton_sqrt(x: &BigInt) -> BigInt {
    assert_ne!(x.sign(), Sign::Minus, "negative operand");

    if *x <= BigInt::one() {
        return x.clone();
    }

    let mut y: BigInt = x >> 1_u8;
    loop {
        let quotient = x / &y;
        if y <= quotient {
            return y;
        }
        y = (quotient + y) >> 1_u8;
    }
}
