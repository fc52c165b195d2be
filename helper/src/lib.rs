#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

//---------------------------------------------------------------------------------------------------- Public API
#[cfg(feature = "cast")]
pub mod cast;

#[cfg(feature = "float")]
pub mod float;

#[cfg(feature = "thread")]
pub mod thread;

//---------------------------------------------------------------------------------------------------- Private Usage
// Only used in tests.
#[cfg(test)]
use num_traits as _;
#[cfg(test)]
use proptest as _;

//----------------------------------------------------------------------------------------------------
