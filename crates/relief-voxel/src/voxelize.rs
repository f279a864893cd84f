//! Grid-to-mesh voxelization.

use relief_raster::LuminanceGrid;
use relief_types::{MeshBuilder, Point3, TriangleMesh, Vector3};
use tracing::{debug, info};

use crate::error::VoxelResult;
use crate::params::VoxelizerParams;

/// Fallback slab thickness as a fraction of the extrusion depth.
const FALLBACK_THICKNESS_RATIO: f64 = 0.1;

/// Voxelize a luminance grid into an extruded silhouette mesh.
///
/// Cells strictly below `params.threshold` each become one axis-aligned
/// box. Grid columns map linearly from `[0, R)` onto
/// `[-world_span/2, world_span/2)` along X; rows map the same way along Z.
/// Every box is centered at `Y = extrude_depth / 2`, so the whole
/// silhouette sits on the base plane `Y = 0`.
///
/// The scan is row-major and deterministic; adjacent boxes are not welded.
/// A grid with no qualifying cells yields a single thin fallback slab
/// covering the full footprint, so every valid image produces a
/// renderable mesh. The returned mesh has finalized smooth normals.
///
/// # Errors
///
/// Returns [`VoxelError::InvalidParams`](crate::VoxelError::InvalidParams)
/// when `params` fail validation.
///
/// # Example
///
/// ```
/// use relief_raster::LuminanceGrid;
/// use relief_voxel::{voxelize, VoxelizerParams};
///
/// // All-dark 3x3 grid: 9 voxels
/// let grid = LuminanceGrid::from_samples(3, vec![0; 9]).unwrap();
/// let mesh = voxelize(&grid, &VoxelizerParams::default()).unwrap();
///
/// assert_eq!(mesh.vertex_count(), 9 * 8);
/// assert_eq!(mesh.face_count(), 9 * 12);
/// assert_eq!(mesh.normals.len(), mesh.vertex_count());
/// ```
pub fn voxelize(grid: &LuminanceGrid, params: &VoxelizerParams) -> VoxelResult<TriangleMesh> {
    params.validate()?;

    let resolution = grid.resolution();
    let samples = grid.samples();

    // Threshold pass first: voxel count is known before any geometry is
    // emitted, so the buffers can be sized exactly once.
    let voxel_count = samples.iter().filter(|&&l| l < params.threshold).count();
    debug!(
        resolution,
        coverage = grid.fraction_below(params.threshold),
        "silhouette threshold pass"
    );

    let mut builder = MeshBuilder::with_capacity(voxel_count * 8, voxel_count * 12);

    let span = params.world_span;
    let cell = span / f64::from(resolution);
    let half_extents = Vector3::new(cell * 0.5, params.extrude_depth * 0.5, cell * 0.5);
    let center_y = params.extrude_depth * 0.5;

    for row in 0..resolution {
        for col in 0..resolution {
            let index = (row as usize) * (resolution as usize) + (col as usize);
            if samples[index] < params.threshold {
                let x = f64::from(col) / f64::from(resolution) * span - span * 0.5;
                let z = f64::from(row) / f64::from(resolution) * span - span * 0.5;
                builder.push_box(Point3::new(x, center_y, z), half_extents);
            }
        }
    }

    if builder.is_empty() {
        // Nothing qualified (e.g. an all-white image): emit a thin flat
        // slab covering the footprint so the result is always renderable.
        info!("no cells below threshold, emitting fallback slab");
        let thickness = params.extrude_depth * FALLBACK_THICKNESS_RATIO;
        builder.push_box(
            Point3::new(0.0, thickness * 0.5, 0.0),
            Vector3::new(span * 0.5, thickness * 0.5, span * 0.5),
        );
    }

    let mesh = builder.finish();
    info!(
        voxels = voxel_count,
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "voxelization complete"
    );
    Ok(mesh)
}
