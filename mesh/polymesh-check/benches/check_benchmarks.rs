//! Benchmarks for the validator suite.
//!
//! Run with: cargo bench -p polymesh-check

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use polymesh_check::{
    CheckKind, CollectingSink, ValidationOptions, check_closed_polygons, check_polygon_areas,
    run_checks,
};
use polymesh_types::{Point2, PolygonalMesh};

// =============================================================================
// Test Mesh Generation
// =============================================================================

/// Build an `n` x `n` grid of unit quads.
fn create_grid(n: u32) -> PolygonalMesh {
    let vertex = |i: u32, j: u32| j * (n + 1) + i;
    let horizontal = |i: u32, j: u32| j * n + i;
    let vertical = |i: u32, j: u32| n * (n + 1) + j * (n + 1) + i;

    let mut mesh = PolygonalMesh::new();
    for j in 0..=n {
        for i in 0..=n {
            let marker = u32::from(i == 0 || j == 0 || i == n || j == n);
            mesh.push_vertex(
                vertex(i, j),
                marker,
                Point2::new(f64::from(i), f64::from(j)),
            );
        }
    }
    for j in 0..=n {
        for i in 0..n {
            mesh.push_edge(horizontal(i, j), 0, vertex(i, j), vertex(i + 1, j));
        }
    }
    for j in 0..n {
        for i in 0..=n {
            mesh.push_edge(vertical(i, j), 0, vertex(i, j), vertex(i, j + 1));
        }
    }
    for j in 0..n {
        for i in 0..n {
            mesh.push_face(
                j * n + i,
                0,
                vec![
                    vertex(i, j),
                    vertex(i + 1, j),
                    vertex(i + 1, j + 1),
                    vertex(i, j + 1),
                ],
                vec![
                    horizontal(i, j),
                    vertical(i + 1, j),
                    horizontal(i, j + 1),
                    vertical(i, j),
                ],
            );
        }
    }
    mesh
}

// =============================================================================
// Suite Benchmarks
// =============================================================================

fn bench_run_checks(c: &mut Criterion) {
    let mut group = c.benchmark_group("RunChecks");
    let options = ValidationOptions::default().with_marker_report(false);

    for n in [16_u32, 64, 256] {
        let mesh = create_grid(n);
        group.throughput(Throughput::Elements(u64::from(n * n)));
        group.bench_with_input(BenchmarkId::new("grid", n), &mesh, |b, mesh| {
            b.iter(|| {
                let mut sink = CollectingSink::new();
                let report = run_checks(black_box(mesh), &options, &mut sink);
                assert!(report.passed(CheckKind::PolygonAreas));
                report
            });
        });
    }

    group.finish();
}

// =============================================================================
// Single Check Benchmarks
// =============================================================================

fn bench_single_checks(c: &mut Criterion) {
    let mut group = c.benchmark_group("SingleChecks");
    let mesh = create_grid(128);

    group.bench_function("closed_polygons", |b| {
        b.iter(|| check_closed_polygons(black_box(&mesh), &mut CollectingSink::new()));
    });
    group.bench_function("polygon_areas", |b| {
        b.iter(|| check_polygon_areas(black_box(&mesh), 0.0, &mut CollectingSink::new()));
    });

    group.finish();
}

// =============================================================================
// Criterion Setup
// =============================================================================

criterion_group!(benches, bench_run_checks, bench_single_checks);
criterion_main!(benches);
