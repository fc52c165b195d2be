use std::{path::PathBuf, process::exit};

use crate::{commands::Command, config::Config, constants::VERSION_BUILD, logging::eprintln_red};

/// nplus Args.
#[derive(clap::Parser, Debug)]
#[command(version = VERSION_BUILD, about, arg_required_else_help = true)]
pub(crate) struct Args {
    /// The number of threads to use for the rayon thread-pool.
    #[arg(long)]
    pub(crate) threads: Option<usize>,
    /// The PATH of the `nplus` config file.
    #[arg(long)]
    pub(crate) config_file: Option<PathBuf>,
    /// Generate a config file and print it to stdout.
    #[arg(long)]
    pub(crate) generate_config: bool,
    /// The command to run.
    #[command(subcommand)]
    pub(crate) command: Option<Command>,
}

impl Args {
    /// Complete any quick requests asked for in [`Args`].
    ///
    /// May cause the process to [`exit`].
    pub(crate) fn do_quick_requests(&self) {
        if self.generate_config {
            match Config::documented_config() {
                Ok(config) => {
                    println!("{config}");
                    exit(0);
                }
                Err(e) => {
                    eprintln_red(&format!("Failed to generate config: {e:#}"));
                    exit(1);
                }
            }
        }
    }

    /// Apply the [`Args`] to the given [`Config`].
    pub(crate) fn apply_args(&self, mut config: Config) -> Config {
        if let Some(threads) = self.threads {
            config.rayon.threads = threads;
        }

        match &self.command {
            Some(Command::SelfTest {
                seconds,
                max_bits,
                seed,
            }) => {
                let self_test = &mut config.self_test;
                self_test.seconds = seconds.unwrap_or(self_test.seconds);
                self_test.max_bits = max_bits.unwrap_or(self_test.max_bits);
                self_test.seed = seed.unwrap_or(self_test.seed);
            }
            Some(Command::Bench {
                trials,
                max_bits,
                output,
                compare_reference,
            }) => {
                let bench = &mut config.bench;
                bench.trials = trials.unwrap_or(bench.trials);
                bench.max_bits = max_bits.unwrap_or(bench.max_bits);
                if let Some(output) = output {
                    bench.output.clone_from(output);
                }
                bench.compare_reference |= *compare_reference;
            }
            Some(Command::Sqrt { .. }) | None => (),
        }

        config
    }
}
