//! IEEE-754 `f64` bit extraction.
//!
//! Decomposes a double's raw bit pattern into an integer mantissa and a binary exponent,
//! which lets big integers be seeded from hardware floating point results
//! without any software rounding in between.
//!
//---------------------------------------------------------------------------------------------------- Use
use num_bigint::BigInt;

//---------------------------------------------------------------------------------------------------- Constants
/// Amount of explicitly stored mantissa bits in an [`f64`].
pub const MANTISSA_BITS: u32 = 52;

/// Mask of the explicitly stored mantissa bits.
const MANTISSA_MASK: u64 = (1 << MANTISSA_BITS) - 1;

/// The leading mantissa bit that normal values do not store.
const IMPLICIT_BIT: u64 = 1 << MANTISSA_BITS;

/// Mask of the 11 exponent bits, after shifting out the mantissa.
const EXPONENT_MASK: u64 = 0x7ff;

/// Converts a biased exponent into the exponent of an integer mantissa.
///
/// `1023` (IEEE-754 bias) + `52` (mantissa bits).
const EXPONENT_BIAS: i32 = 1075;

//---------------------------------------------------------------------------------------------------- FloatError
/// An [`f64`] that cannot be decomposed or converted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FloatError {
    /// The value was `NaN` or infinite.
    #[error("value is not finite")]
    NotFinite,

    /// The value was negative where only non-negative values are accepted.
    #[error("value is negative")]
    Negative,

    /// The scaled value does not fit in a [`u64`].
    #[error("value does not fit in 64 bits")]
    Overflow,
}

//---------------------------------------------------------------------------------------------------- Decomposed
/// A finite, non-negative [`f64`] split into `mantissa * 2^exponent`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Decomposed {
    /// The significant bits, with the implicit leading bit restored for normal values.
    pub mantissa: u64,

    /// The binary scale of [`Self::mantissa`].
    ///
    /// This is negative for any value with a fractional part,
    /// callers must not assume it is `>= 0`.
    pub exponent: i32,
}

impl Decomposed {
    /// Returns the mantissa rescaled so that its unit is `2^-fraction_bits`,
    /// i.e. `floor(value * 2^fraction_bits)`.
    ///
    /// ```rust
    /// # use nplus_helper::float::*;
    /// let d = decompose(1.5).unwrap();
    /// assert_eq!(d.scaled(1), Ok(3));
    /// assert_eq!(d.scaled(0), Ok(1));
    /// assert_eq!(d.scaled(64), Err(FloatError::Overflow));
    /// ```
    ///
    /// # Errors
    /// Returns [`FloatError::Overflow`] if the result does not fit in a [`u64`].
    pub fn scaled(self, fraction_bits: i32) -> Result<u64, FloatError> {
        if self.mantissa == 0 {
            return Ok(0);
        }

        let shift = self
            .exponent
            .checked_add(fraction_bits)
            .ok_or(FloatError::Overflow)?;

        if shift >= 0 {
            let shift = shift.unsigned_abs();
            if shift > self.mantissa.leading_zeros() {
                return Err(FloatError::Overflow);
            }
            Ok(self.mantissa << shift)
        } else {
            Ok(self.mantissa.checked_shr(shift.unsigned_abs()).unwrap_or(0))
        }
    }

    /// Returns `mantissa * 2^exponent` as a [`BigInt`], truncating any fractional part.
    ///
    /// ```rust
    /// # use nplus_helper::float::*;
    /// # use num_bigint::BigInt;
    /// assert_eq!(decompose(1e20).unwrap().to_bigint(), BigInt::from(100_000_000_000_000_000_000_u128));
    /// assert_eq!(decompose(7.99).unwrap().to_bigint(), BigInt::from(7));
    /// ```
    pub fn to_bigint(self) -> BigInt {
        let mantissa = BigInt::from(self.mantissa);

        if self.exponent >= 0 {
            mantissa << self.exponent.unsigned_abs()
        } else {
            mantissa >> self.exponent.unsigned_abs()
        }
    }
}

//---------------------------------------------------------------------------------------------------- Free functions
/// Split a finite, non-negative [`f64`] into its mantissa and exponent.
///
/// `-0.0` is treated as `0.0`, which decomposes into `(0, 0)`.
///
/// ```rust
/// # use nplus_helper::float::*;
/// assert_eq!(decompose(1.0), Ok(Decomposed { mantissa: 1 << 52, exponent: -52 }));
/// assert_eq!(decompose(0.0), Ok(Decomposed { mantissa: 0, exponent: 0 }));
/// assert_eq!(decompose(f64::MIN_POSITIVE / 2.0), Ok(Decomposed { mantissa: 1 << 51, exponent: -1074 }));
///
/// assert_eq!(decompose(-1.0), Err(FloatError::Negative));
/// assert_eq!(decompose(f64::NAN), Err(FloatError::NotFinite));
/// assert_eq!(decompose(f64::INFINITY), Err(FloatError::NotFinite));
/// ```
///
/// # Errors
/// Returns an error if `value` is `NaN`, infinite or negative.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    reason = "the exponent field is 11 bits"
)]
pub fn decompose(value: f64) -> Result<Decomposed, FloatError> {
    if !value.is_finite() {
        return Err(FloatError::NotFinite);
    }
    if value < 0.0 {
        return Err(FloatError::Negative);
    }

    let bits = value.to_bits();
    let biased = ((bits >> MANTISSA_BITS) & EXPONENT_MASK) as i32;
    let fraction = bits & MANTISSA_MASK;

    Ok(match (biased, fraction) {
        (0, 0) => Decomposed {
            mantissa: 0,
            exponent: 0,
        },
        // Subnormal, there is no implicit bit.
        (0, _) => Decomposed {
            mantissa: fraction,
            exponent: 1 - EXPONENT_BIAS,
        },
        _ => Decomposed {
            mantissa: fraction | IMPLICIT_BIT,
            exponent: biased - EXPONENT_BIAS,
        },
    })
}

/// Convert an [`f64`] into a [`BigInt`], truncating toward zero.
///
/// ```rust
/// # use nplus_helper::float::*;
/// # use num_bigint::BigInt;
/// assert_eq!(bigint_from_f64(123.5), Ok(BigInt::from(123)));
/// assert_eq!(bigint_from_f64(-9_999_999.999_999_99), Ok(BigInt::from(-9_999_999)));
/// assert_eq!(bigint_from_f64(-0.5), Ok(BigInt::from(0)));
/// assert_eq!(bigint_from_f64(f64::NAN), Err(FloatError::NotFinite));
/// ```
///
/// # Errors
/// Returns [`FloatError::NotFinite`] if `value` is `NaN` or infinite.
pub fn bigint_from_f64(value: f64) -> Result<BigInt, FloatError> {
    let magnitude = decompose(value.abs())?.to_bigint();

    Ok(if value.is_sign_negative() {
        -magnitude
    } else {
        magnitude
    })
}
