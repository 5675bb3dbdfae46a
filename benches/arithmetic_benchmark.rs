// ============================================================================
// Decimal Engine Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Scale Extraction - Isolates the float-to-scaled-integer conversion
// 2. Binary Operations - One aligned operation per kind
// 3. Chain Folding - Left-fold cost across growing operand counts
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use decimal_engine::prelude::*;

// ============================================================================
// Scale Extraction Benchmarks
// ============================================================================

fn benchmark_scale_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("scale_extraction");

    // Whole numbers short-circuit before the string rendering
    group.bench_function("whole", |b| {
        b.iter(|| ScaledInteger::from_f64(black_box(1990.0)))
    });

    // Fractional values pay for the decimal rendering
    group.bench_function("fractional_short", |b| {
        b.iter(|| ScaledInteger::from_f64(black_box(19.9)))
    });

    group.bench_function("fractional_long", |b| {
        b.iter(|| ScaledInteger::from_f64(black_box(0.123456789012345)))
    });

    group.finish();
}

// ============================================================================
// Binary Operation Benchmarks
// ============================================================================

fn benchmark_binary_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_operations");

    for op in [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ] {
        group.bench_function(op.name(), |b| {
            b.iter(|| operate(op, black_box(19.9), black_box(0.3)));
        });
    }

    group.finish();
}

// ============================================================================
// Chain Folding Benchmarks
// ============================================================================

fn benchmark_chain_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_fold");

    for num_operands in [10, 100, 1000].iter() {
        let operands: Vec<f64> = (0..*num_operands).map(|i| i as f64 * 0.25).collect();
        let chain = Chain::of(operands);

        group.bench_with_input(
            BenchmarkId::new("add", num_operands),
            &chain,
            |b, chain| {
                b.iter(|| black_box(chain.add()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_scale_extraction,
    benchmark_binary_operations,
    benchmark_chain_fold
);
criterion_main!(benches);
