use serde::{Deserialize, Serialize};

use super::macros::config_struct;

config_struct! {
    /// The [`rayon`] config.
    #[derive(Debug, Deserialize, Serialize, Eq, PartialEq)]
    #[serde(deny_unknown_fields, default)]
    pub(crate) struct RayonConfig {
        /// The number of threads to use for the [`rayon::ThreadPool`].
        ///
        /// Type         | Number
        /// Valid values | >= 1
        /// Examples     | 1, 8, 32
        pub(crate) threads: usize,
    }
}

impl RayonConfig {
    /// Build the [`rayon::ThreadPool`] described by this config.
    pub(crate) fn build_pool(&self) -> Result<rayon::ThreadPool, rayon::ThreadPoolBuildError> {
        rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(|i| format!("nplus-rayon-{i}"))
            .build()
    }
}

impl Default for RayonConfig {
    fn default() -> Self {
        Self {
            threads: nplus_helper::thread::threads_75().get(),
        }
    }
}
