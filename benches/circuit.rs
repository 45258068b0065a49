//! Criterion benchmarks for the rule-110 circuit.
//!
//! Run with:
//!   cargo bench
//!   cargo bench --features parallel,simd
//!
//! Results are saved to target/criterion/

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use cellnet::cells::CellVector;
use cellnet::config::SimulationConfig;
use cellnet::layer::{neighbor_weighted_sum_with, ExecutionTier, WeightTriple};
use cellnet::prng::Prng;
use cellnet::rule110::Rule110Net;
use cellnet::simulation::Simulation;

fn make_row(len: usize, seed: u64) -> CellVector {
    CellVector::random(len, 0.5, &mut Prng::new(seed))
}

/// Benchmark step() with varying ring sizes.
fn bench_step_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_size");

    for size in [64, 1024, 16_384, 262_144].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("scalar", size), size, |b, &size| {
            let net = Rule110Net::with_tier(ExecutionTier::Scalar);
            let mut row = make_row(size, 42);

            b.iter(|| {
                row = net.step(&row);
                black_box(row.len())
            });
        });
    }

    group.finish();
}

/// Benchmark step() comparing execution tiers at a fixed size.
///
/// Tiers whose feature is not enabled fall back to scalar.
fn bench_step_tiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_tier");

    let size = 65_536;
    group.throughput(Throughput::Elements(size as u64));

    for tier in [
        ExecutionTier::Scalar,
        ExecutionTier::Simd,
        ExecutionTier::Parallel,
    ] {
        group.bench_function(tier.name(), |b| {
            let net = Rule110Net::with_tier(tier);
            let mut row = make_row(size, 42);

            b.iter(|| {
                row = net.step(&row);
                black_box(row.len())
            });
        });
    }

    group.finish();
}

/// Benchmark the neighbor-weighted sum on its own.
fn bench_weighted_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighted_sum");

    let size = 65_536;
    let row = make_row(size, 7);
    let w = WeightTriple::new(1.0, 1.0, 1.0);
    group.throughput(Throughput::Elements(size as u64));

    for tier in [
        ExecutionTier::Scalar,
        ExecutionTier::Simd,
        ExecutionTier::Parallel,
    ] {
        group.bench_function(tier.name(), |b| {
            b.iter(|| black_box(neighbor_weighted_sum_with(row.as_slice(), w, tier)));
        });
    }

    group.finish();
}

/// Benchmark the full classic run including rendering.
fn bench_render_run(c: &mut Criterion) {
    c.bench_function("classic_run", |b| {
        let mut buf: Vec<u8> = Vec::with_capacity(8 * 1024);

        b.iter(|| {
            buf.clear();
            let mut sim = Simulation::new(SimulationConfig::default()).unwrap();
            sim.run(&mut buf).unwrap();
            black_box(buf.len())
        });
    });
}

criterion_group!(
    benches,
    bench_step_sizes,
    bench_step_tiers,
    bench_weighted_sum,
    bench_render_run,
);

criterion_main!(benches);
