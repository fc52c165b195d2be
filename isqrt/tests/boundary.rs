//! Operands next to every threshold that changes the computation.

#![expect(unused_crate_dependencies, reason = "outer test module")]

use num_bigint::{BigInt, Sign};

use nplus_helper::float::bigint_from_f64;
use nplus_isqrt::{
    constants::{
        ACCELERATED_THRESHOLD, DOUBLE_EXTRACTION_LIMIT, NATIVE_LIMIT, SECOND_STEP_THRESHOLD,
        SINGLE_REFINEMENT_LIMIT,
    },
    integer_sqrt, Regime,
};
use nplus_test_utils::{family::neighbourhood, reference::bisection_sqrt};

/// Check every operand within `radius` of `center`, and within `radius` `f64` ulps of it.
fn check_around(center: &BigInt, radius: u64) {
    let ulp = BigInt::from(1) << center.bits().saturating_sub(53);
    let by_ulps = (0..=2 * radius).map(|i| center - &ulp * radius + &ulp * i);

    for x in neighbourhood(center, radius).chain(by_ulps) {
        if x.sign() == Sign::Minus {
            continue;
        }
        assert_eq!(integer_sqrt(&x), Ok(bisection_sqrt(&x)), "{x}");
    }
}

fn float_threshold(value: f64) -> BigInt {
    bigint_from_f64(value).unwrap()
}

#[test]
fn native() {
    check_around(&BigInt::from(NATIVE_LIMIT), 500);
}

#[test]
fn single_refinement() {
    check_around(&float_threshold(SINGLE_REFINEMENT_LIMIT), 200);
}

#[test]
fn second_step() {
    check_around(&float_threshold(SECOND_STEP_THRESHOLD), 200);
}

#[test]
fn double_extraction() {
    check_around(&float_threshold(DOUBLE_EXTRACTION_LIMIT), 100);
}

#[test]
fn accelerated() {
    check_around(&float_threshold(ACCELERATED_THRESHOLD), 50);
}

#[test]
fn regimes_change_at_thresholds() {
    let x = float_threshold(DOUBLE_EXTRACTION_LIMIT);
    assert_eq!(Regime::classify(&x), Regime::NewtonPlus);

    let x = x - (BigInt::from(1) << 400);
    assert_eq!(Regime::classify(&x), Regime::DoubleExtraction);
}
