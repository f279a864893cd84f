//! Silhouette voxelization for Reliefcast.
//!
//! Converts a [`LuminanceGrid`](relief_raster::LuminanceGrid) into an
//! extruded voxel mesh: every cell darker than a threshold becomes one
//! axis-aligned box, all boxes sharing a base plane and a common extrusion
//! depth. The result is a 2.5-D "stamped" silhouette, not a heightfield.
//!
//! The scan is row-major and the output is fully deterministic: the same
//! grid and parameters always produce bit-identical buffers.
//!
//! # Example
//!
//! ```
//! use relief_raster::LuminanceGrid;
//! use relief_voxel::{voxelize, VoxelizerParams};
//!
//! // 2x2 grid, one dark cell
//! let grid = LuminanceGrid::from_samples(2, vec![0, 255, 255, 255]).unwrap();
//! let mesh = voxelize(&grid, &VoxelizerParams::default()).unwrap();
//!
//! assert_eq!(mesh.vertex_count(), 8);
//! assert_eq!(mesh.face_count(), 12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod params;
mod voxelize;

pub use error::{VoxelError, VoxelResult};
pub use params::VoxelizerParams;
pub use voxelize::voxelize;
