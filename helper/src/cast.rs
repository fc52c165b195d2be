//! Casting.
//!
//! Collection lengths are [`usize`] while counters and bit lengths are [`u64`],
//! this module converts between them.
//!
//! `#[no_std]` compatible.

#[rustfmt::skip]
//============================ SAFETY: DO NOT REMOVE ===========================//
//                                                                              //
//                                                                              //
//                   Only allow building {32,64}-bit targets.                   //
//          This allows us to assume {32,64}-bit invariants in this file.       //
    #[cfg(not(any(target_pointer_width = "64", target_pointer_width = "32")))]
      compile_error!("This module is only compatible with {32,64}-bit CPUs");
//                                                                              //
//                                                                              //
//============================ SAFETY: DO NOT REMOVE ===========================//

/// Cast [`usize`] to [`u64`].
///
/// Lossless on every supported target.
///
/// ```rust
/// # use nplus_helper::cast::*;
/// assert_eq!(usize_to_u64(usize::MAX), u64::try_from(usize::MAX).unwrap());
/// ```
#[inline(always)]
pub const fn usize_to_u64(u: usize) -> u64 {
    u as u64
}
