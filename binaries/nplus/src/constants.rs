//! General constants used throughout `nplus`.

use const_format::formatcp;

/// `nplus`'s semantic version (`MAJOR.MINOR.PATCH`) as string.
pub(crate) const VERSION: &str = clap::crate_version!();

/// The build type, `debug` or `release`.
pub(crate) const BUILD: &str = if cfg!(debug_assertions) {
    "debug"
} else {
    "release"
};

/// [`VERSION`] + the build type.
///
/// If a debug build, the suffix is `-debug`, else it is `-release`.
pub(crate) const VERSION_BUILD: &str = formatcp!("{VERSION}-{BUILD}");

/// The config file looked for in the current directory.
pub(crate) const DEFAULT_CONFIG_FILE_NAME: &str = "nplus.toml";

/// Header of the benchmark CSV.
pub(crate) const CSV_HEADER: &str = "method,kept,trials,bits,nanoseconds";
