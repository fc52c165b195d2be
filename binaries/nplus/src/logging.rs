//! Logging.

use crate::config::Config;

/// Install the global [`tracing`] subscriber.
///
/// Logs go to stderr so that stdout only carries results.
pub(crate) fn init_logging(config: &Config) {
    tracing_subscriber::fmt()
        .with_max_level(config.tracing.level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Print `s` to stderr in red.
pub(crate) fn eprintln_red(s: &str) {
    eprintln!("\x1b[0;31m{s}\x1b[0m");
}
