use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use super::macros::config_struct;

config_struct! {
    /// [`tracing`] config.
    #[derive(Debug, Deserialize, Serialize, Eq, PartialEq)]
    #[serde(deny_unknown_fields, default)]
    pub(crate) struct TracingConfig {
        /// The minimum log level.
        ///
        /// Levels below this one will not be shown.
        /// "error" is the highest level only showing errors,
        /// "trace" is the lowest showing the regime of every root.
        ///
        /// Type         | Level
        /// Valid values | "off", "error", "warn", "info", "debug", "trace"
        ##[serde(with = "level_filter_serde")]
        pub(crate) level: LevelFilter,
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: LevelFilter::INFO,
        }
    }
}

mod level_filter_serde {
    use std::str::FromStr;

    use serde::{Deserialize, Deserializer, Serializer};
    use tracing::level_filters::LevelFilter;

    #[expect(clippy::trivially_copy_pass_by_ref, reason = "serde")]
    pub(super) fn serialize<S>(level_filter: &LevelFilter, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_str(&level_filter.to_string())
    }

    pub(super) fn deserialize<'de, D>(d: D) -> Result<LevelFilter, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(d)?;
        LevelFilter::from_str(&s).map_err(serde::de::Error::custom)
    }
}
