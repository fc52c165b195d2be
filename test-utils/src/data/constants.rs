//! Constants holding raw regression operands.

//---------------------------------------------------------------------------------------------------- Native
/// The smallest operand where `sqrt(x as f64)` rounds up to the next integer.
///
/// ```rust
/// # use nplus_test_utils::data::*;
/// let root = (NATIVE_DOUBLE_BOUNDARY as f64).sqrt() as u64;
/// assert_eq!(root, NATIVE_DOUBLE_BOUNDARY_ROOT + 1);
/// ```
pub const NATIVE_DOUBLE_BOUNDARY: u64 = 4_503_599_761_588_224;

/// The floor square root of [`NATIVE_DOUBLE_BOUNDARY`].
pub const NATIVE_DOUBLE_BOUNDARY_ROOT: u64 = 67_108_864;

/// The first operand that no longer takes the hardware-only path.
pub const NATIVE_LIMIT_OPERAND: u64 = 144_838_757_784_765_629;

//---------------------------------------------------------------------------------------------------- Single refinement
/// An operand from the single Newton step range, kept as a regression check.
pub const SINGLE_REFINEMENT_OPERAND: u128 = 4_332_296_397_072_526_994_426;

//---------------------------------------------------------------------------------------------------- Regression
/// Decimal operands, one per line, that once produced wrong roots.
///
/// They cover every regime, including values next to `f64::MAX`
/// and one operand of more than 13,000 digits.
pub const REGRESSION_OPERANDS: &str = include_str!("operands.txt");
