//! Benchmarks for mesh-outline operations.
//!
//! Run with: cargo bench -p mesh-outline
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p mesh-outline -- --save-baseline main
//! 2. After changes: cargo bench -p mesh-outline -- --baseline main

#![allow(missing_docs, clippy::cast_possible_truncation)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use mesh_outline::{FitConfig, ImportConfig, MeshImporter, MeshPatch, SurfacePoint, fit_plane};
use nalgebra::{Point3, Vector3};

// =============================================================================
// Test Patch Generation
// =============================================================================

/// Create a side x side grid patch on z = 0, two triangles per quad.
/// Only the outer rim is boundary.
fn create_grid(side: u32) -> MeshPatch {
    let mut points = Vec::new();
    for j in 0..side {
        for i in 0..side {
            points.push(
                SurfacePoint::from_coords(f64::from(i), f64::from(j), 0.0)
                    .with_normal(Vector3::z()),
            );
        }
    }

    let mut faces = Vec::new();
    for j in 0..side - 1 {
        for i in 0..side - 1 {
            let v0 = j * side + i;
            let v1 = v0 + 1;
            let v2 = v0 + side;
            let v3 = v2 + 1;
            faces.push(vec![v0, v1, v3]);
            faces.push(vec![v0, v3, v2]);
        }
    }

    MeshPatch::new(points, faces)
}

/// Positions of a grid patch, for fitting without connectivity.
fn create_grid_positions(side: u32) -> Vec<Point3<f64>> {
    create_grid(side)
        .points
        .iter()
        .map(|point| point.position)
        .collect()
}

// =============================================================================
// Plane Fit Benchmarks
// =============================================================================

fn bench_plane_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("PlaneFit");

    let test_cases = [
        ("grid_100pts", create_grid_positions(10)),
        ("grid_1024pts", create_grid_positions(32)),
    ];

    for (name, positions) in &test_cases {
        group.throughput(Throughput::Elements(positions.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("fit_plane", name),
            positions,
            |b, positions| {
                let config = FitConfig::new().with_seed(42);
                b.iter(|| fit_plane(black_box(positions), Vector3::z(), &config))
            },
        );
    }

    group.finish();
}

// =============================================================================
// Import Benchmarks
// =============================================================================

fn bench_import(c: &mut Criterion) {
    let mut group = c.benchmark_group("Import");

    let test_cases = [
        ("grid_100pts", create_grid(10)),
        ("grid_1024pts", create_grid(32)),
    ];

    for (name, patch) in &test_cases {
        group.throughput(Throughput::Elements(patch.vertex_count() as u64));

        group.bench_with_input(BenchmarkId::new("import", name), patch, |b, patch| {
            let importer = MeshImporter::with_config(ImportConfig::new().with_seed(42));
            b.iter(|| importer.import(black_box(patch)))
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_plane_fit, bench_import);

criterion_main!(benches);
