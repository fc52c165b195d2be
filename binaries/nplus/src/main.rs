#![doc = include_str!("../README.md")]

use std::process::ExitCode;

mod bench;
mod commands;
mod config;
mod constants;
mod error;
mod logging;

fn main() -> ExitCode {
    let (config, command) = match config::read_config_and_args() {
        Ok(read) => read,
        Err(e) => {
            logging::eprintln_red(&format!("{e:#}"));
            return ExitCode::FAILURE;
        }
    };

    logging::init_logging(&config);
    tracing::debug!("{config}");

    // Only options like `--threads` were given.
    let Some(command) = command else {
        return ExitCode::SUCCESS;
    };

    match commands::run(&command, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logging::eprintln_red(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
