//! nplus config
use std::{
    fmt,
    fs::read_to_string,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context;
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::{commands::Command, constants::DEFAULT_CONFIG_FILE_NAME};

mod args;
mod bench;
mod rayon;
mod tracing_config;

#[macro_use]
mod macros;

pub(crate) use args::Args;
pub(crate) use bench::BenchConfig;
use self::rayon::RayonConfig;
pub(crate) use self_test::SelfTestConfig;
use tracing_config::TracingConfig;

/// Header to put at the start of the generated config file.
const HEADER: &str = "## nplus config file.
##
## All these config values can be set to
## their default by commenting them out with '#'.

";

/// Reads the args & config file, returning a [`Config`] and the [`Command`] to run.
///
/// # Errors
/// Returns an error if a config file exists but cannot be read.
pub(crate) fn read_config_and_args() -> anyhow::Result<(Config, Option<Command>)> {
    let args = Args::parse();
    args.do_quick_requests();

    let config = match &args.config_file {
        // If a config file was set in the args it must be readable.
        Some(config_file) => Config::read_from_path(config_file)?,
        // Otherwise try the current directory, then fall back to the defaults.
        None => {
            let path = PathBuf::from(DEFAULT_CONFIG_FILE_NAME);
            if path.exists() {
                Config::read_from_path(path)?
            } else {
                Config::default()
            }
        }
    };

    let config = args.apply_args(config);
    Ok((config, args.command))
}

config_struct! {
    /// The config for all of nplus.
    #[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
    #[serde(deny_unknown_fields, default)]
    pub(crate) struct Config {
        #[child = true]
        /// Configuration for nplus's logging system, tracing.
        pub(crate) tracing: TracingConfig,

        #[child = true]
        /// Configuration for nplus's thread-pool system, rayon.
        ///
        /// Rayon runs the self-test operand families in parallel.
        pub(crate) rayon: RayonConfig,

        #[child = true]
        /// Configuration for `nplus self-test`.
        pub(crate) self_test: SelfTestConfig,

        #[child = true]
        /// Configuration for `nplus bench`.
        pub(crate) bench: BenchConfig,
    }
}

impl Config {
    /// Returns a default [`Config`], with doc comments.
    ///
    /// # Errors
    /// Returns an error if the default config does not serialize.
    pub(crate) fn documented_config() -> anyhow::Result<String> {
        let str = toml::ser::to_string_pretty(&Self::default())?;
        let mut doc = toml_edit::DocumentMut::from_str(&str)?;
        Self::write_docs(doc.as_table_mut());
        Ok(format!("{HEADER}{doc}"))
    }

    /// Attempts to read a config file in [`toml`] format from the given [`Path`].
    ///
    /// # Errors
    ///
    /// Will return an [`Err`] if the file cannot be read or if the file is not a valid [`toml`] config.
    pub(crate) fn read_from_path(file: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = file.as_ref();
        let file_text = read_to_string(file)
            .with_context(|| format!("failed to read config file at: {}", file.display()))?;

        let config = toml::from_str(&file_text)
            .with_context(|| format!("failed to parse config file at: {}", file.display()))?;

        eprintln!("Using config at: {}", file.display());
        Ok(config)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "========== CONFIGURATION ==========\n{self:#?}\n==================================="
        )
    }
}
