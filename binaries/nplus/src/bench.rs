//! `nplus bench`.
//!
//! Each power of two bit size is split into [`SUBDIVISIONS`] sizes around it,
//! a trial times one random operand of every size. The fastest trials are
//! averaged so OS interruptions do not skew the results.

//---------------------------------------------------------------------------------------------------- Import
use std::{
    fmt::Write as _,
    hint::black_box,
    time::{Duration, Instant},
};

use anyhow::{ensure, Context};
use num_bigint::BigInt;
use rand::{rngs::StdRng, SeedableRng};
use tracing::info;

use nplus_helper::cast::usize_to_u64;
use nplus_isqrt::{integer_sqrt, IsqrtError};
use nplus_test_utils::family::random_operand;

use crate::{config::BenchConfig, constants::CSV_HEADER};

//---------------------------------------------------------------------------------------------------- Constants
/// Operand sizes timed per power of two.
const SUBDIVISIONS: i32 = 11;

/// The first power of two bit size, `2^3 = 8` bits.
const FIRST_SCALE: u32 = 3;

//---------------------------------------------------------------------------------------------------- Method
/// A square root implementation being timed.
type Method = (&'static str, fn(&BigInt) -> Result<BigInt, IsqrtError>);

/// Newton-Plus, always timed.
const NEWTON_PLUS: Method = ("newton_plus", integer_sqrt);

/// `num-bigint`'s own Newton square root.
const NUM_BIGINT: Method = ("num_bigint", |x| Ok(x.sqrt()));

//---------------------------------------------------------------------------------------------------- Row
/// The result of one method at one size.
#[derive(Clone, Debug, PartialEq)]
struct Row {
    method: &'static str,
    /// Trials averaged.
    kept: usize,
    /// Trials run.
    trials: usize,
    /// `2^scale`.
    bits: u64,
    /// Mean time of one square root.
    nanoseconds: f64,
}

impl Row {
    fn csv(&self) -> String {
        format!(
            "{},{},{},{},{:.2}",
            self.method, self.kept, self.trials, self.bits, self.nanoseconds
        )
    }

    fn markdown(&self) -> String {
        format!(
            "| {} | {} | {} | {} | {:.2} |",
            self.method, self.kept, self.trials, self.bits, self.nanoseconds
        )
    }
}

//---------------------------------------------------------------------------------------------------- Free functions
/// Run the benchmark, writing a CSV to [`BenchConfig::output`].
///
/// # Errors
/// Returns an error if the config is invalid, a square root fails or the CSV cannot be written.
pub(crate) fn run(config: &BenchConfig) -> anyhow::Result<()> {
    ensure!(config.trials > 0, "bench.trials must be at least 1");
    ensure!(
        config.keep_proportion > 0.0 && config.keep_proportion <= 1.0,
        "bench.keep_proportion must be in (0.0, 1.0], got {}",
        config.keep_proportion
    );
    ensure!(
        config.max_bits >= 1 << FIRST_SCALE,
        "bench.max_bits must be at least {}",
        1 << FIRST_SCALE
    );

    let mut methods = vec![NEWTON_PLUS];
    if config.compare_reference {
        methods.push(NUM_BIGINT);
    }

    let mut rows = Vec::new();
    for method in methods {
        // Every method sees the same operands.
        let mut rng = StdRng::seed_from_u64(config.seed);

        for scale in (FIRST_SCALE..u64::BITS).take_while(|s| 1_u64 << s <= config.max_bits) {
            let row = time_scale(method, scale, config, &mut rng)?;
            info!(method = row.method, bits = row.bits, nanoseconds = row.nanoseconds, "Timed");
            rows.push(row);
        }
    }

    let mut csv = String::from(CSV_HEADER);
    for row in &rows {
        writeln!(csv)?;
        write!(csv, "{}", row.csv())?;
    }
    csv.push('\n');
    std::fs::write(&config.output, csv)
        .with_context(|| format!("failed to write results to: {}", config.output.display()))?;

    println!("| method | kept | trials | bits | nanoseconds |");
    println!("|--------|------|--------|------|-------------|");
    for row in &rows {
        println!("{}", row.markdown());
    }
    println!("\nResults written to: {}", config.output.display());

    Ok(())
}

/// Time `method` on the sizes around `2^scale` bits.
fn time_scale(
    (method, sqrt): Method,
    scale: u32,
    config: &BenchConfig,
    rng: &mut StdRng,
) -> Result<Row, IsqrtError> {
    let sizes = capped_subdivisions(scale, config.max_bits);
    let mut times = Vec::new();

    for _ in 0..config.trials {
        let operands = sizes.map(|bits| random_operand(rng, bits..bits + 1));

        let mut elapsed = Duration::ZERO;
        for x in &operands {
            let start = Instant::now();
            let root = sqrt(black_box(x))?;
            elapsed += start.elapsed();
            black_box(root);
        }

        times.push(elapsed);
    }

    let (kept, mean) = fastest_mean(&mut times, config.keep_proportion);

    Ok(Row {
        method,
        kept,
        trials: times.len(),
        bits: 1 << scale,
        nanoseconds: mean / f64::from(SUBDIVISIONS),
    })
}

/// The [`SUBDIVISIONS`] bit sizes centered on `2^scale`,
/// spaced by a factor of `2^(1/11)`.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "sizes are positive and far below u64::MAX"
)]
fn subdivisions(scale: u32) -> [u64; 11] {
    let center = i32::try_from(scale).unwrap_or(i32::MAX / SUBDIVISIONS) * SUBDIVISIONS;
    let mut sizes = [0; 11];

    for (size, offset) in sizes.iter_mut().zip(-SUBDIVISIONS / 2..) {
        let exponent = f64::from(center + offset) / f64::from(SUBDIVISIONS);
        *size = 2.0_f64.powf(exponent).round() as u64;
    }

    sizes
}

/// [`subdivisions`] with no size above `max_bits`.
fn capped_subdivisions(scale: u32, max_bits: u64) -> [u64; 11] {
    subdivisions(scale).map(|bits| bits.min(max_bits))
}

/// Sorts `times` and returns how many of the fastest were kept
/// and their mean in nanoseconds.
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    reason = "trial counts and timings are far below 2^52"
)]
fn fastest_mean(times: &mut [Duration], keep_proportion: f64) -> (usize, f64) {
    if times.is_empty() {
        return (0, 0.0);
    }

    times.sort_unstable();

    let kept = (times.len() as f64 * keep_proportion).ceil() as usize;
    let kept = kept.clamp(1, times.len());

    let total: u128 = times[..kept].iter().map(Duration::as_nanos).sum();
    (kept, total as f64 / usize_to_u64(kept) as f64)
}
