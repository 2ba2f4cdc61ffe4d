//! Benchmarks for contour generation.
//!
//! Run with: cargo bench --package contour-engine --bench contour_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;

use contour_engine::assemble::{assemble_path, generate_level_lines, AssemblyOptions};
use contour_engine::colorscale::colorize_points;
use contour_engine::quad::{flatten_points, generate_intermediate_points};
use contour_engine::{ContourPipeline, Interpolator};
use terrain_common::{ContourConfig, DeclaredPoint, GeneratedPoint};
use test_utils::{cone_grid, noisy_grid};

/// Random points at a single height, as one assembly group.
fn random_group(count: usize) -> Vec<GeneratedPoint> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| GeneratedPoint::from_i64(rng.gen_range(0..1000), rng.gen_range(0..1000), 100))
        .collect()
}

// =============================================================================
// INTERPOLATION BENCHMARKS
// =============================================================================

fn bench_interpolate_between(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolate_between");
    let interp = Interpolator::default();

    for span in [10_i64, 100, 1000] {
        let low = DeclaredPoint::from_i64(0, 0, 3, 0, 0, 0);
        let high = DeclaredPoint::from_i64(97, 31, 3 + span, 1, 0, 1);
        group.throughput(Throughput::Elements((span / 10) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(span), &span, |b, _| {
            b.iter(|| interp.between(black_box(&low), black_box(&high)))
        });
    }

    group.finish();
}

// =============================================================================
// QUAD BENCHMARKS
// =============================================================================

fn bench_intermediate_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("intermediate_points");
    let interp = Interpolator::default();

    for size in [16_usize, 32, 64] {
        let grid = noisy_grid(size, size, 10, 200, 7);
        group.throughput(Throughput::Elements(grid.cell_count() as u64));
        group.bench_with_input(BenchmarkId::new("noisy", size), &grid, |b, grid| {
            b.iter(|| generate_intermediate_points(black_box(grid), &interp))
        });
    }

    group.finish();
}

// =============================================================================
// ASSEMBLY BENCHMARKS
// =============================================================================

fn bench_assemble_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble_path");

    for count in [100_usize, 500, 1000] {
        let points = random_group(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &points, |b, points| {
            b.iter(|| assemble_path(black_box(points.clone())))
        });
    }

    group.finish();
}

fn bench_level_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_lines");
    let interp = Interpolator::default();
    let options = AssemblyOptions::default();

    for size in [16_usize, 32] {
        let grid = cone_grid(size, 10, 400, 20);
        let points = generate_intermediate_points(&grid, &interp)
            .map(flatten_points)
            .unwrap_or_default();
        group.bench_with_input(BenchmarkId::new("cone", size), &points, |b, points| {
            b.iter(|| generate_level_lines(black_box(points.clone()), &options))
        });
    }

    group.finish();
}

// =============================================================================
// COLOUR AND END-TO-END BENCHMARKS
// =============================================================================

fn bench_colorize(c: &mut Criterion) {
    let points: Vec<GeneratedPoint> = {
        let mut rng = rand::thread_rng();
        (0..5000)
            .map(|i| GeneratedPoint::from_i64(i, i, rng.gen_range(0..50) * 10))
            .collect()
    };

    c.bench_function("colorize_points_5000", |b| {
        b.iter(|| colorize_points(black_box(points.clone())))
    });
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    group.sample_size(20);

    let pipeline = match ContourPipeline::new(ContourConfig::default()) {
        Ok(pipeline) => pipeline,
        Err(_) => return,
    };

    for size in [16_usize, 48] {
        let grid = noisy_grid(size, size, 10, 300, 11);
        group.bench_with_input(BenchmarkId::new("noisy", size), &grid, |b, grid| {
            b.iter(|| pipeline.run(black_box(grid)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_interpolate_between,
    bench_intermediate_points,
    bench_assemble_path,
    bench_level_lines,
    bench_colorize,
    bench_pipeline,
);
criterion_main!(benches);
