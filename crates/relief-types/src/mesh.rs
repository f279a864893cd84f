//! Indexed triangle mesh with per-vertex normals.

use crate::{Aabb, Triangle};
use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh.
///
/// The primary mesh type for Reliefcast: three owned buffers, grown in
/// build order, with duplicates allowed (voxel boxes are never welded).
///
/// # Memory Layout
///
/// - `positions`: `Vec<Point3<f64>>` - vertex positions, insertion order
/// - `faces`: `Vec<[u32; 3]>` - triangles as vertex indices, CCW winding
/// - `normals`: `Vec<Vector3<f64>>` - per-vertex unit normals
///
/// # Lifecycle
///
/// A mesh is grown incrementally (usually through
/// [`MeshBuilder`](crate::MeshBuilder)), finalized once by
/// [`recompute_normals`](Self::recompute_normals), and treated as
/// read-only by downstream consumers. Before finalization `normals` may be
/// empty; afterwards `normals.len() == positions.len()` always holds.
///
/// # Example
///
/// ```
/// use relief_types::TriangleMesh;
///
/// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
/// let indices = [0, 1, 2];
///
/// let mut mesh = TriangleMesh::from_raw(&positions, &indices);
/// mesh.recompute_normals();
///
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.face_count(), 1);
/// assert_eq!(mesh.normals.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TriangleMesh {
    /// Vertex positions.
    pub positions: Vec<Point3<f64>>,

    /// Triangle faces as indices into `positions`.
    /// Each face is `[v0, v1, v2]` with counter-clockwise winding.
    pub faces: Vec<[u32; 3]>,

    /// Per-vertex unit normals. Empty until finalized.
    pub normals: Vec<Vector3<f64>>,
}

impl TriangleMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
            faces: Vec::new(),
            normals: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            normals: Vec::new(),
        }
    }

    /// Create a mesh from raw coordinate and index data.
    ///
    /// Returns an empty mesh if either slice length is not divisible by 3.
    /// Normals are left empty; call
    /// [`recompute_normals`](Self::recompute_normals) to finalize.
    ///
    /// # Example
    ///
    /// ```
    /// use relief_types::TriangleMesh;
    ///
    /// let positions = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    /// let mesh = TriangleMesh::from_raw(&positions, &[0, 1, 2]);
    /// assert_eq!(mesh.vertex_count(), 3);
    /// ```
    #[must_use]
    pub fn from_raw(positions: &[f64], indices: &[u32]) -> Self {
        if positions.len() % 3 != 0 || indices.len() % 3 != 0 {
            return Self::new();
        }

        Self {
            positions: positions
                .chunks_exact(3)
                .map(|c| Point3::new(c[0], c[1], c[2]))
                .collect(),
            faces: indices.chunks_exact(3).map(|c| [c[0], c[1], c[2]]).collect(),
            normals: Vec::new(),
        }
    }

    /// Get the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of faces (triangles).
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no renderable geometry.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() || self.faces.is_empty()
    }

    /// Check that every face index references an existing vertex.
    ///
    /// # Example
    ///
    /// ```
    /// use relief_types::TriangleMesh;
    ///
    /// let mut mesh = TriangleMesh::from_raw(
    ///     &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    ///     &[0, 1, 2],
    /// );
    /// assert!(mesh.indices_in_bounds());
    ///
    /// mesh.faces.push([0, 1, 9]);
    /// assert!(!mesh.indices_in_bounds());
    /// ```
    #[must_use]
    pub fn indices_in_bounds(&self) -> bool {
        let limit = self.positions.len();
        self.faces
            .iter()
            .all(|face| face.iter().all(|&i| (i as usize) < limit))
    }

    /// Get a triangle by face index with resolved vertex positions.
    ///
    /// Returns `None` if the face index is out of bounds.
    #[must_use]
    pub fn triangle(&self, face_index: usize) -> Option<Triangle> {
        self.faces.get(face_index).map(|&[i0, i1, i2]| {
            Triangle::new(
                self.positions[i0 as usize],
                self.positions[i1 as usize],
                self.positions[i2 as usize],
            )
        })
    }

    /// Iterate over all triangles with resolved vertex positions.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.faces.iter().map(|&[i0, i1, i2]| {
            Triangle::new(
                self.positions[i0 as usize],
                self.positions[i1 as usize],
                self.positions[i2 as usize],
            )
        })
    }

    /// Compute the axis-aligned bounding box.
    ///
    /// Returns an empty AABB if the mesh has no vertices.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.positions.iter())
    }

    /// Recompute smooth per-vertex normals from face geometry.
    ///
    /// Each triangle's *unit* face normal is accumulated into its three
    /// vertex normals; every vertex normal is then normalized once. The
    /// result overwrites any placeholder normals, resizing the buffer so
    /// that `normals.len() == positions.len()`.
    ///
    /// Degenerate (zero-area) triangles contribute nothing. A vertex whose
    /// accumulated sum cancels to zero keeps a `+Y` placeholder so the
    /// buffer is never partially defined.
    ///
    /// This pass is idempotent: repeating it with unchanged positions and
    /// faces reproduces the same normals up to floating-point rounding.
    pub fn recompute_normals(&mut self) {
        let mut accumulated = vec![Vector3::zeros(); self.positions.len()];

        for &[i0, i1, i2] in &self.faces {
            let tri = Triangle::new(
                self.positions[i0 as usize],
                self.positions[i1 as usize],
                self.positions[i2 as usize],
            );
            if let Some(face_normal) = tri.normal() {
                accumulated[i0 as usize] += face_normal;
                accumulated[i1 as usize] += face_normal;
                accumulated[i2 as usize] += face_normal;
            }
        }

        for normal in &mut accumulated {
            let len = normal.norm();
            if len > f64::EPSILON {
                *normal /= len;
            } else {
                *normal = Vector3::y();
            }
        }

        self.normals = accumulated;
    }

    /// Scale the mesh uniformly about the origin, in place.
    ///
    /// Normals are direction-only and unaffected by uniform scaling.
    pub fn scale(&mut self, factor: f64) {
        for position in &mut self.positions {
            position.coords *= factor;
        }
    }

    /// Return a uniformly scaled copy of the mesh.
    ///
    /// # Example
    ///
    /// ```
    /// use relief_types::TriangleMesh;
    ///
    /// let mesh = TriangleMesh::from_raw(&[1.0, 2.0, 3.0], &[]);
    /// let doubled = mesh.scaled(2.0);
    /// assert_eq!(doubled.positions[0].x, 2.0);
    /// assert_eq!(mesh.positions[0].x, 1.0);
    /// ```
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        let mut copy = self.clone();
        copy.scale(factor);
        copy
    }
}
