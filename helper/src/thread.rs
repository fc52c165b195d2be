//! System thread related
//!
//! Used to size the thread pools that run many independent square roots at once.

//---------------------------------------------------------------------------------------------------- Use
use std::{cmp::max, num::NonZeroUsize, sync::OnceLock};

//---------------------------------------------------------------------------------------------------- Threads
// INVARIANT:
// `threads_75()` depends on this being set
// only by `threads()`, from `available_parallelism()`.
static THREADS_CELL: OnceLock<NonZeroUsize> = OnceLock::new();

/// Get the total amount of system threads.
///
/// This is lazily evaluated and returns 1 on errors.
///
/// ```rust
/// # use nplus_helper::thread::*;
/// assert!(threads().get() >= 1);
/// ```
pub fn threads() -> NonZeroUsize {
    *THREADS_CELL.get_or_init(|| {
        std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
    })
}

/// Returns `percent` of `total` threads, rounded down, never less than 1.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "thread counts are far below 2^52"
)]
fn percent_of(total: NonZeroUsize, percent: f64) -> NonZeroUsize {
    let t = (total.get() as f64 * percent).floor() as usize;
    NonZeroUsize::new(max(1, t)).unwrap_or(NonZeroUsize::MIN)
}

/// Get 75% (rounded down) of available amount of system threads.
///
/// ```rust
/// # use nplus_helper::thread::*;
/// assert!(threads_75().get() >= 1);
/// assert!(threads_75() <= threads());
/// ```
pub fn threads_75() -> NonZeroUsize {
    percent_of(threads(), 0.75)
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod test {
    use super::*;

    #[test]
    /// Tests thread division returns the expected divided thread count.
    fn thread_division() {
        let t = NonZeroUsize::new(32).unwrap();

        assert_eq!(percent_of(t, 0.75).get(), 24);
        assert_eq!(percent_of(t, 0.50).get(), 16);
        assert_eq!(percent_of(t, 0.25).get(), 8);
    }

    #[test]
    /// A single thread never divides down to zero.
    fn thread_division_floor() {
        assert_eq!(percent_of(NonZeroUsize::MIN, 0.25).get(), 1);
        assert!(threads_75() <= threads());
    }
}
