//! Regime thresholds and working precisions.
//!
//! The thresholds are empirical, they assume a 64-bit native integer
//! and an IEEE-754 `f64` with a 52 bit stored mantissa.
//! They must be re-validated before being used with other widths.

//---------------------------------------------------------------------------------------------------- Regime thresholds
/// Operands below this take the [`Native`](crate::Regime::Native) path.
///
/// `~2^57`. Below it `x` fits a native integer and its round trip through [`f64`]
/// loses too little for `sqrt(x as f64)` to land more than one above the floor root.
pub const NATIVE_LIMIT: u64 = 144_838_757_784_765_629;

/// Operands below this take the [`SingleRefinement`](crate::Regime::SingleRefinement) path.
///
/// `~2^124`. Below it `seed + x / seed` stays under `2^63`, and one Newton step
/// from a hardware seed lands on the floor root or one above it.
pub const SINGLE_REFINEMENT_LIMIT: f64 = 2.1267e37;

/// Operands below this take the [`DoubleExtraction`](crate::Regime::DoubleExtraction) path.
///
/// `~2^424`. Up to here the 11 bit exponent of the hardware root still leaves
/// headroom to shift the decomposed mantissa into place safely.
pub const DOUBLE_EXTRACTION_LIMIT: f64 = 4.3322e127;

/// [`DoubleExtraction`](crate::Regime::DoubleExtraction) operands above this take a second Newton step.
///
/// `~2^211`. The seed's 53 bits no longer cover half of the root's bits after one step.
pub const SECOND_STEP_THRESHOLD: f64 = 2e63;

/// [`NewtonPlus`](crate::Regime::NewtonPlus) operands above this enter the accelerated rounds.
///
/// `~2^846`.
pub const ACCELERATED_THRESHOLD: f64 = 4e254;

//---------------------------------------------------------------------------------------------------- Precision
/// Bits of `x` fed into the hardware square root that seeds Newton-Plus.
pub const SEED_WINDOW_BITS: u64 = 63;

/// Fraction bits kept from the hardware square root of the seed window.
///
/// The window holds 61 or 62 bits, so its root is in `[2^30, 2^31]`
/// and keeping 22 fraction bits gives a 53 bit seed.
pub const SEED_FRACTION_BITS: i32 = 22;

/// Bits of the seed's hardware square root.
pub const SEED_BITS: u64 = 53;

/// Correct bits of the approximation after seeding, i.e. `2 * SEED_BITS`.
pub const SEED_PRECISION: u64 = 106;

/// Classic Newton-Plus rounds run while the precision is below this.
pub const CLASSICAL_PRECISION_LIMIT: u64 = 256;
