#![doc = include_str!("../README.md")] // See the README for crate documentation.
#![allow(unused_crate_dependencies, reason = "used in benchmarks")]

use num_bigint::BigInt;
use rand::{rngs::StdRng, SeedableRng};

use nplus_test_utils::family::random_operand;

/// Seed of [`operands`].
pub const SEED: u64 = 2_344_218;

/// Bit lengths of the Newton-Plus benchmarks.
pub const NEWTON_PLUS_BITS: [u64; 5] = [1024, 4096, 16_384, 65_536, 262_144];

/// `count` random operands of exactly `bits` bits.
///
/// The same arguments always return the same operands.
pub fn operands(bits: u64, count: usize) -> Vec<BigInt> {
    let mut rng = StdRng::seed_from_u64(SEED ^ bits);
    (0..count).map(|_| random_operand(&mut rng, bits..bits + 1)).collect()
}
