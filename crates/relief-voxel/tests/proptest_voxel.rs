//! Property-based tests for the voxelizer.
//!
//! Random grids and parameters, verifying the pipeline invariants:
//! deterministic output, valid indices, never-empty meshes.
//!
//! Run with: cargo test -p relief-voxel --test proptest_voxel

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use proptest::prelude::*;
use relief_raster::LuminanceGrid;
use relief_voxel::{voxelize, VoxelizerParams};

/// Generate a random luminance grid with resolution 1..=24.
fn arb_grid() -> impl Strategy<Value = LuminanceGrid> {
    (1u32..=24).prop_flat_map(|resolution| {
        let len = (resolution as usize) * (resolution as usize);
        prop::collection::vec(any::<u8>(), len)
            .prop_map(move |samples| LuminanceGrid::from_samples(resolution, samples).unwrap())
    })
}

/// Generate valid voxelizer parameters.
fn arb_params() -> impl Strategy<Value = VoxelizerParams> {
    (any::<u8>(), 0.01..4.0f64, 0.5..10.0f64).prop_map(|(threshold, extrude_depth, world_span)| {
        VoxelizerParams {
            threshold,
            extrude_depth,
            world_span,
        }
    })
}

proptest! {
    /// Every face index references an existing vertex, and the buffers
    /// come in whole triangles.
    #[test]
    fn indices_always_valid(grid in arb_grid(), params in arb_params()) {
        let mesh = voxelize(&grid, &params).unwrap();
        prop_assert!(mesh.indices_in_bounds());
        prop_assert_eq!(mesh.vertex_count() % 8, 0);
        prop_assert_eq!(mesh.face_count() % 12, 0);
    }

    /// Repeated runs over the same input produce bit-identical buffers.
    #[test]
    fn output_is_deterministic(grid in arb_grid(), params in arb_params()) {
        let a = voxelize(&grid, &params).unwrap();
        let b = voxelize(&grid, &params).unwrap();
        prop_assert_eq!(a.positions, b.positions);
        prop_assert_eq!(a.faces, b.faces);
        prop_assert_eq!(a.normals, b.normals);
    }

    /// The fallback slab guarantees a renderable mesh for any input.
    #[test]
    fn mesh_is_never_empty(grid in arb_grid(), params in arb_params()) {
        let mesh = voxelize(&grid, &params).unwrap();
        prop_assert!(!mesh.is_empty());
        prop_assert_eq!(mesh.normals.len(), mesh.vertex_count());
    }

    /// Voxel count equals the number of strictly-below-threshold cells.
    #[test]
    fn voxel_count_matches_threshold_pass(grid in arb_grid(), params in arb_params()) {
        let below = grid.samples().iter().filter(|&&l| l < params.threshold).count();
        let mesh = voxelize(&grid, &params).unwrap();
        if below > 0 {
            prop_assert_eq!(mesh.vertex_count(), below * 8);
            prop_assert_eq!(mesh.face_count(), below * 12);
        } else {
            // Fallback slab
            prop_assert_eq!(mesh.face_count(), 12);
        }
    }
}
