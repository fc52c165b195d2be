use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::macros::config_struct;

config_struct! {
    /// `bench` config.
    #[derive(Debug, Deserialize, Serialize, PartialEq)]
    #[serde(deny_unknown_fields, default)]
    pub(crate) struct BenchConfig {
        /// How many times each operand size is timed.
        ///
        /// Type         | Number
        /// Valid values | >= 1
        /// Examples     | 10, 100, 1000
        pub(crate) trials: u64,

        /// The largest operand bit length to time.
        ///
        /// Sizes start at 8 bits and double until this is reached.
        /// The sizes timed around the last power of two are capped to this.
        ///
        /// Type         | Number
        /// Valid values | >= 8
        /// Examples     | 4096, 1048576
        pub(crate) max_bits: u64,

        /// The share of the fastest trials that is averaged.
        ///
        /// Slow trials are usually interrupted by the OS
        /// so they are dropped.
        ///
        /// Type         | Floating point number
        /// Valid values | 0.0 < value <= 1.0
        /// Examples     | 0.2, 0.5, 1.0
        pub(crate) keep_proportion: f64,

        /// Seed of the random operand generator.
        ///
        /// Type         | Number
        /// Examples     | 0, 2344218
        pub(crate) seed: u64,

        /// Where to write the CSV results.
        ///
        /// Type         | Path
        /// Examples     | "nplus-bench.csv", "/tmp/bench.csv"
        pub(crate) output: PathBuf,

        /// Also time `num-bigint`'s own square root.
        ///
        /// Type         | boolean
        /// Valid values | true, false
        pub(crate) compare_reference: bool,
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            trials: 100,
            max_bits: 1 << 16,
            keep_proportion: 0.2,
            seed: 2_344_218,
            output: PathBuf::from("nplus-bench.csv"),
            compare_reference: false,
        }
    }
}
