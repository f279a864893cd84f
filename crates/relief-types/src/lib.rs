//! Core mesh types for Reliefcast.
//!
//! This crate provides the foundational types for the silhouette-extrusion
//! and STL-export pipeline:
//!
//! - [`TriangleMesh`] - An indexed triangle mesh with per-vertex normals
//! - [`MeshBuilder`] - Incremental mesh construction with index bookkeeping
//! - [`Triangle`] - A concrete triangle with vertex positions
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Units
//!
//! This crate is unit-agnostic. All coordinates are `f64`. The
//! order-fulfillment crates assume millimeters.
//!
//! # Coordinate System
//!
//! Silhouette meshes are built **Y-up**: the silhouette footprint lies in
//! the X/Z plane and voxels extrude upward along +Y. This matches the
//! storefront viewer the meshes are previewed in.
//!
//! Face winding is **counter-clockwise (CCW) when viewed from outside**.
//! Normals point outward by the right-hand rule.
//!
//! # Example
//!
//! ```
//! use relief_types::{MeshBuilder, Point3, Vector3};
//!
//! let mut builder = MeshBuilder::new();
//! builder.push_box(
//!     Point3::new(0.0, 0.5, 0.0),
//!     Vector3::new(0.5, 0.5, 0.5),
//! );
//! let mesh = builder.finish();
//!
//! assert_eq!(mesh.vertex_count(), 8);
//! assert_eq!(mesh.face_count(), 12);
//! assert_eq!(mesh.normals.len(), mesh.vertex_count());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod builder;
mod mesh;
mod triangle;

pub use bounds::Aabb;
pub use builder::MeshBuilder;
pub use mesh::TriangleMesh;
pub use triangle::Triangle;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
