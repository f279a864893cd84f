//! Incremental mesh construction.

use crate::TriangleMesh;
use nalgebra::{Point3, Vector3};

/// Incremental mesh builder with cumulative index bookkeeping.
///
/// The voxelizer appends one axis-aligned box per silhouette cell; the
/// builder keeps face indices valid as the buffers grow, then
/// [`finish`](Self::finish) assembles the final mesh and runs the smooth
/// normal pass. Appended geometry is never welded: adjacent boxes keep
/// distinct vertices.
///
/// # Example
///
/// ```
/// use relief_types::{MeshBuilder, Point3, Vector3};
///
/// let mut builder = MeshBuilder::new();
/// builder.push_box(Point3::origin(), Vector3::new(0.5, 0.5, 0.5));
/// builder.push_box(Point3::new(2.0, 0.0, 0.0), Vector3::new(0.5, 0.5, 0.5));
///
/// let mesh = builder.finish();
/// assert_eq!(mesh.vertex_count(), 16);
/// assert_eq!(mesh.face_count(), 24);
/// assert!(mesh.indices_in_bounds());
/// ```
#[derive(Debug, Default)]
pub struct MeshBuilder {
    positions: Vec<Point3<f64>>,
    faces: Vec<[u32; 3]>,
}

/// Triangulation of an axis-aligned box, CCW when viewed from outside.
///
/// Corner order: bottom ring (min Y) counter-clockwise from the min corner,
/// then the top ring in the same order.
const BOX_FACES: [[u32; 3]; 12] = [
    // Bottom (-Y)
    [0, 2, 1],
    [0, 3, 2],
    // Top (+Y)
    [4, 5, 6],
    [4, 6, 7],
    // Front (-Z)
    [0, 1, 5],
    [0, 5, 4],
    // Back (+Z)
    [3, 7, 6],
    [3, 6, 2],
    // Left (-X)
    [0, 4, 7],
    [0, 7, 3],
    // Right (+X)
    [1, 2, 6],
    [1, 6, 5],
];

impl MeshBuilder {
    /// Create a new empty builder.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a builder with pre-allocated capacity.
    ///
    /// Voxel counts are known after the threshold pass, so the buffers can
    /// be sized once up front.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Number of vertices appended so far.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of faces appended so far.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check whether nothing has been appended yet.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Append a single vertex, returning its index.
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, meshes with >4B vertices unsupported
    pub fn push_vertex(&mut self, position: Point3<f64>) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        index
    }

    /// Append a triangle referencing previously pushed vertices.
    pub fn push_face(&mut self, face: [u32; 3]) {
        self.faces.push(face);
    }

    /// Append an axis-aligned box: 8 vertices, 12 CCW triangles.
    ///
    /// # Arguments
    ///
    /// * `center` - World-space box center
    /// * `half_extents` - Half the box size per axis (all must be positive
    ///   for a non-degenerate box; not checked here)
    #[allow(clippy::cast_possible_truncation)]
    // Truncation: mesh indices are u32, meshes with >4B vertices unsupported
    pub fn push_box(&mut self, center: Point3<f64>, half_extents: Vector3<f64>) {
        let min = center - half_extents;
        let max = center + half_extents;
        let base = self.positions.len() as u32;

        // Bottom ring then top ring, both counter-clockwise from min corner
        self.positions.push(Point3::new(min.x, min.y, min.z));
        self.positions.push(Point3::new(max.x, min.y, min.z));
        self.positions.push(Point3::new(max.x, min.y, max.z));
        self.positions.push(Point3::new(min.x, min.y, max.z));
        self.positions.push(Point3::new(min.x, max.y, min.z));
        self.positions.push(Point3::new(max.x, max.y, min.z));
        self.positions.push(Point3::new(max.x, max.y, max.z));
        self.positions.push(Point3::new(min.x, max.y, max.z));

        for face in &BOX_FACES {
            self.faces
                .push([face[0] + base, face[1] + base, face[2] + base]);
        }
    }

    /// Assemble the mesh and finalize smooth per-vertex normals.
    #[must_use]
    pub fn finish(self) -> TriangleMesh {
        let mut mesh = TriangleMesh {
            positions: self.positions,
            faces: self.faces,
            normals: Vec::new(),
        };
        mesh.recompute_normals();
        mesh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_counts() {
        let mut builder = MeshBuilder::new();
        builder.push_box(Point3::origin(), Vector3::new(0.5, 0.5, 0.5));

        assert_eq!(builder.vertex_count(), 8);
        assert_eq!(builder.face_count(), 12);
    }

    #[test]
    fn box_faces_point_outward() {
        let mut builder = MeshBuilder::new();
        builder.push_box(Point3::origin(), Vector3::new(1.0, 1.0, 1.0));
        let mesh = builder.finish();

        // Signed volume via the divergence theorem: positive means the
        // winding is outward-consistent.
        let mut volume = 0.0;
        for tri in mesh.triangles() {
            let cross = tri.v1.coords.cross(&tri.v2.coords);
            volume += tri.v0.coords.dot(&cross);
        }
        volume /= 6.0;
        assert!(
            (volume - 8.0).abs() < 1e-10,
            "2x2x2 box volume should be 8.0, got {volume}"
        );
    }

    #[test]
    fn cumulative_offsets_stay_valid() {
        let mut builder = MeshBuilder::new();
        for i in 0..5 {
            builder.push_box(
                Point3::new(f64::from(i) * 2.0, 0.0, 0.0),
                Vector3::new(0.5, 0.5, 0.5),
            );
        }
        let mesh = builder.finish();

        assert_eq!(mesh.vertex_count(), 40);
        assert_eq!(mesh.face_count(), 60);
        assert!(mesh.indices_in_bounds());
        // Second box's first face starts at index 8
        assert_eq!(mesh.faces[12], [8, 10, 9]);
    }

    #[test]
    fn finish_fills_normals() {
        let mut builder = MeshBuilder::new();
        builder.push_box(Point3::origin(), Vector3::new(0.5, 0.5, 0.5));
        let mesh = builder.finish();

        assert_eq!(mesh.normals.len(), mesh.vertex_count());
        for n in &mesh.normals {
            assert!((n.norm() - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn manual_vertex_and_face_append() {
        let mut builder = MeshBuilder::new();
        let a = builder.push_vertex(Point3::new(0.0, 0.0, 0.0));
        let b = builder.push_vertex(Point3::new(1.0, 0.0, 0.0));
        let c = builder.push_vertex(Point3::new(0.0, 1.0, 0.0));
        builder.push_face([a, b, c]);

        let mesh = builder.finish();
        assert_eq!(mesh.face_count(), 1);
        assert!(mesh.indices_in_bounds());
    }
}
