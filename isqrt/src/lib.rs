#![doc = include_str!("../README.md")]

pub mod constants;

mod error;
mod estimate;
mod newton_plus;
mod regime;
mod sqrt;
mod tail;
mod window;

pub use error::IsqrtError;
pub use regime::Regime;
pub use sqrt::{integer_sqrt, integer_sqrt_unsigned, IntegerSqrt};
