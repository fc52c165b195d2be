//! Benchmarks for the square roots `nplus_isqrt` is compared against.
#![allow(unused_attributes, unused_crate_dependencies)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use function_name::named;

use nplus_isqrt_bench::{operands, NEWTON_PLUS_BITS};
use nplus_test_utils::reference::{bisection_sqrt, classic_newton_sqrt};

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = num_bigint, classic_newton, bisection,
}
criterion_main!(benches);

/// Benchmark `num-bigint`'s square root over the Newton-Plus bit lengths.
#[named]
fn num_bigint(c: &mut Criterion) {
    let mut group = c.benchmark_group(function_name!());

    for bits in NEWTON_PLUS_BITS {
        let xs = operands(bits, 4);

        group.throughput(Throughput::Elements(4));
        group.bench_with_input(BenchmarkId::from_parameter(bits), &xs, |b, xs| {
            b.iter(|| {
                for x in xs {
                    black_box(black_box(x).sqrt());
                }
            });
        });
    }

    group.finish();
}

/// Benchmark [`classic_newton_sqrt`], it starts from `x / 2` so only small operands.
#[named]
fn classic_newton(c: &mut Criterion) {
    let xs = operands(128, 16);
    c.bench_function(function_name!(), |b| {
        b.iter(|| {
            for x in &xs {
                black_box(classic_newton_sqrt(black_box(x)));
            }
        });
    });
}

/// Benchmark [`bisection_sqrt`].
#[named]
fn bisection(c: &mut Criterion) {
    let xs = operands(1024, 4);
    c.bench_function(function_name!(), |b| {
        b.iter(|| {
            for x in &xs {
                black_box(bisection_sqrt(black_box(x)));
            }
        });
    });
}
