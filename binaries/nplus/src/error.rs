/// A failed `self-test`.
#[derive(Debug, thiserror::Error)]
pub(crate) enum SelfTestError {
    /// Some operands did not get their floor square root.
    #[error("{failures} of {checked} operands got a wrong square root")]
    WrongRoots {
        /// Operands with a wrong root or an internal error.
        failures: u64,
        /// Operands checked in total.
        checked: u64,
    },

    /// The thread-pool could not be created.
    #[error("rayon: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}
