//! Reliefcast: image-silhouette-to-printable-mesh pipeline.
//!
//! This umbrella crate re-exports the pipeline crates under one roof and
//! provides the two flows the storefront actually runs:
//!
//! - **Upload/preview**: an uploaded image becomes an extruded silhouette
//!   mesh for the 3D viewer ([`pipeline::image_to_mesh`]).
//! - **Order fulfillment**: an uploaded STL is rescaled to the ordered
//!   print dimensions and re-serialized for download
//!   ([`pipeline::prepare_order_stl`]).
//!
//! The two flows share only the mesh data model; neither holds state
//! between calls, and every conversion is a self-contained synchronous
//! computation over in-memory buffers.
//!
//! # Quick Start
//!
//! ```
//! use image::{DynamicImage, Rgba, RgbaImage};
//! use reliefcast::prelude::*;
//!
//! // Preview flow: image -> silhouette mesh
//! let img = DynamicImage::ImageRgba8(
//!     RgbaImage::from_pixel(64, 64, Rgba([0, 0, 0, 255])),
//! );
//! let mesh = reliefcast::pipeline::image_to_mesh(
//!     &img,
//!     10,
//!     &VoxelizerParams::default(),
//! ).unwrap();
//! assert_eq!(mesh.face_count(), 100 * 12);
//!
//! // Fulfillment flow: STL bytes -> rescaled STL text
//! let stl = encode_stl_ascii(&mesh).unwrap();
//! let export = reliefcast::pipeline::prepare_order_stl(
//!     stl.as_bytes(),
//!     "silhouette.stl",
//!     None,
//!     Some(2.0),
//! ).unwrap();
//! assert_eq!(export.filename, "silhouette_order_2x.stl");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod pipeline;

/// Core data structures: `TriangleMesh`, `MeshBuilder`, `Triangle`, `Aabb`.
pub use relief_types as types;

/// Image rasterization into luminance grids.
pub use relief_raster as raster;

/// Silhouette voxelization.
pub use relief_voxel as voxel;

/// STL encoding and decoding.
pub use relief_io as io;

/// Order-fulfillment rescaling.
pub use relief_order as order;

/// Common imports for the pipeline.
///
/// # Usage
///
/// ```
/// use reliefcast::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use relief_types::{Aabb, MeshBuilder, Point3, Triangle, TriangleMesh, Vector3};

    // Rasterization
    pub use relief_raster::{rasterize, LuminanceGrid, DEFAULT_RESOLUTION};

    // Voxelization
    pub use relief_voxel::{voxelize, VoxelizerParams};

    // STL codec
    pub use relief_io::{decode_stl, encode_stl_ascii, encode_stl_binary};

    // Order fulfillment
    pub use relief_order::{parse_target_dimensions, resolve_scale_factor, OrderExport};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prelude_imports_are_accessible() {
        use prelude::*;

        let mesh = TriangleMesh::new();
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.face_count(), 0);
    }

    #[test]
    fn module_reexports_are_accessible() {
        let _ = types::TriangleMesh::new();
        let _ = voxel::VoxelizerParams::default();
        assert_eq!(raster::DEFAULT_RESOLUTION, 100);
    }
}
