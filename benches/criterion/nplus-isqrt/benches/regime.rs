//! Benchmarks for each [`Regime`] of `nplus_isqrt::integer_sqrt`.
#![allow(unused_attributes, unused_crate_dependencies)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use function_name::named;
use num_bigint::BigInt;

use nplus_isqrt::{integer_sqrt, Regime};
use nplus_isqrt_bench::{operands, NEWTON_PLUS_BITS};
use nplus_test_utils::data::NATIVE_LIMIT_OPERAND;

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = native, single_refinement, double_extraction, newton_plus,
}
criterion_main!(benches);

/// Benchmark `integer_sqrt` on `xs`, which must all be in `regime`.
fn bench_regime(c: &mut Criterion, name: &str, regime: Regime, xs: &[BigInt]) {
    assert!(xs.iter().all(|x| Regime::classify(x) == regime));

    c.bench_function(name, |b| {
        b.iter(|| {
            for x in xs {
                black_box(integer_sqrt(black_box(x)).unwrap());
            }
        });
    });
}

/// Benchmark [`Regime::Native`].
#[named]
fn native(c: &mut Criterion) {
    let mut xs = operands(40, 16);
    xs.push(BigInt::from(NATIVE_LIMIT_OPERAND - 1));
    bench_regime(c, function_name!(), Regime::Native, &xs);
}

/// Benchmark [`Regime::SingleRefinement`].
#[named]
fn single_refinement(c: &mut Criterion) {
    bench_regime(c, function_name!(), Regime::SingleRefinement, &operands(100, 16));
}

/// Benchmark [`Regime::DoubleExtraction`].
#[named]
fn double_extraction(c: &mut Criterion) {
    bench_regime(c, function_name!(), Regime::DoubleExtraction, &operands(300, 16));
}

/// Benchmark [`Regime::NewtonPlus`] over growing bit lengths.
#[named]
fn newton_plus(c: &mut Criterion) {
    let mut group = c.benchmark_group(function_name!());

    for bits in NEWTON_PLUS_BITS {
        let xs = operands(bits, 4);
        assert!(xs.iter().all(|x| Regime::classify(x) == Regime::NewtonPlus));

        group.throughput(Throughput::Elements(4));
        group.bench_with_input(BenchmarkId::from_parameter(bits), &xs, |b, xs| {
            b.iter(|| {
                for x in xs {
                    black_box(integer_sqrt(black_box(x)).unwrap());
                }
            });
        });
    }

    group.finish();
}
