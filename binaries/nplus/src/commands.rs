//! Commands
//!
//! `nplus` [`Command`] definition and handling.
use std::path::PathBuf;

use anyhow::Context;
use clap::Subcommand;
use num_bigint::BigInt;

use nplus_isqrt::{integer_sqrt, Regime};

use crate::{bench, config::Config, self_test};

/// A command given on the command line.
#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Print the floor square root of a decimal integer.
    Sqrt {
        /// The operand, e.g. `4503599761588224`.
        #[arg(allow_negative_numbers = true)]
        value: String,
    },

    /// Check the square root of every operand family on the rayon thread-pool.
    SelfTest {
        /// How long to run for, in seconds.
        #[arg(long)]
        seconds: Option<u64>,
        /// The largest bit length of random operands.
        #[arg(long)]
        max_bits: Option<u64>,
        /// Seed of the random operand generators.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Time the square root over operand sizes growing in powers of two.
    Bench {
        /// How many times each size is timed.
        #[arg(long)]
        trials: Option<u64>,
        /// The largest operand bit length to time.
        #[arg(long)]
        max_bits: Option<u64>,
        /// Where to write the CSV results.
        #[arg(long)]
        output: Option<PathBuf>,
        /// Also time `num-bigint`'s own square root.
        #[arg(long)]
        compare_reference: bool,
    },
}

/// Run `command`.
///
/// # Errors
/// Returns the reason the command failed.
pub(crate) fn run(command: &Command, config: &Config) -> anyhow::Result<()> {
    match command {
        Command::Sqrt { value } => {
            println!("{}", sqrt(value)?);
            Ok(())
        }
        Command::SelfTest { .. } => Ok(self_test::run(config)?),
        Command::Bench { .. } => bench::run(&config.bench),
    }
}

/// The floor square root of the decimal integer `value`.
fn sqrt(value: &str) -> anyhow::Result<BigInt> {
    let x: BigInt = value
        .trim()
        .parse()
        .with_context(|| format!("not a decimal integer: {value:?}"))?;

    tracing::debug!(regime = %Regime::classify(&x), bits = x.bits(), "sqrt");

    Ok(integer_sqrt(&x)?)
}
