//! Benchmarks for silhouette voxelization.
//!
//! Run with: cargo bench -p relief-voxel
//!
//! To compare against baseline:
//! 1. First run: cargo bench -p relief-voxel -- --save-baseline main
//! 2. After changes: cargo bench -p relief-voxel -- --baseline main

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use relief_raster::LuminanceGrid;
use relief_voxel::{voxelize, VoxelizerParams};

/// Checkerboard grid: half the cells qualify, alternating.
fn checkerboard(resolution: u32) -> LuminanceGrid {
    let len = (resolution as usize) * (resolution as usize);
    let samples: Vec<u8> = (0..len).map(|i| if i % 2 == 0 { 0 } else { 255 }).collect();
    match LuminanceGrid::from_samples(resolution, samples) {
        Ok(grid) => grid,
        Err(_) => unreachable!("sample count is resolution squared by construction"),
    }
}

fn bench_voxelize(c: &mut Criterion) {
    let params = VoxelizerParams::default();
    let mut group = c.benchmark_group("voxelize");

    for resolution in [50u32, 100, 200] {
        let grid = checkerboard(resolution);
        let cells = u64::from(resolution) * u64::from(resolution);
        group.throughput(Throughput::Elements(cells));
        group.bench_function(format!("checkerboard_{resolution}"), |b| {
            b.iter(|| voxelize(black_box(&grid), black_box(&params)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_voxelize);
criterion_main!(benches);
