//! STL codec implementation.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use relief_types::{TriangleMesh, Vector3};
use tracing::debug;

use crate::error::{StlError, StlResult};

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Size of one triangle record in binary STL (normal + 3 vertices + attribute).
const TRIANGLE_SIZE: usize = 50;

/// Solid name used in the ASCII framing lines.
///
/// The storefront viewer and fulfillment tooling both expect the literal
/// `solid model` / `endsolid model` markers.
const SOLID_NAME: &str = "model";

/// Reject meshes the codec cannot serialize.
fn check_encodable(mesh: &TriangleMesh) -> StlResult<()> {
    if mesh.positions.is_empty() {
        return Err(StlError::EmptyMesh);
    }
    if mesh.faces.is_empty() {
        return Err(StlError::UnsupportedGeometry {
            vertex_count: mesh.positions.len(),
        });
    }
    Ok(())
}

/// Write a mesh as ASCII STL.
///
/// One `facet normal` block per triangle, face normals recomputed from the
/// vertex positions (stored per-vertex normals are not used: STL carries
/// flat per-face normals only). Degenerate triangles get a zero normal.
///
/// # Errors
///
/// Returns [`StlError::EmptyMesh`] or [`StlError::UnsupportedGeometry`]
/// for meshes without indexed triangles, or an I/O error from the writer.
pub fn write_stl_ascii<W: Write>(mesh: &TriangleMesh, mut writer: W) -> StlResult<()> {
    check_encodable(mesh)?;

    writeln!(writer, "solid {SOLID_NAME}")?;

    for tri in mesh.triangles() {
        let normal = tri.normal().unwrap_or_else(Vector3::zeros);

        writeln!(
            writer,
            "  facet normal {:.6e} {:.6e} {:.6e}",
            normal.x, normal.y, normal.z
        )?;
        writeln!(writer, "    outer loop")?;
        for v in [&tri.v0, &tri.v1, &tri.v2] {
            writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid {SOLID_NAME}")?;

    Ok(())
}

/// Encode a mesh as ASCII STL text.
///
/// # Errors
///
/// Same conditions as [`write_stl_ascii`].
///
/// # Example
///
/// ```
/// use relief_io::encode_stl_ascii;
/// use relief_types::TriangleMesh;
///
/// let mesh = TriangleMesh::from_raw(
///     &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
///     &[0, 1, 2],
/// );
/// let text = encode_stl_ascii(&mesh).unwrap();
///
/// assert!(text.starts_with("solid model"));
/// assert!(text.trim_end().ends_with("endsolid model"));
/// assert_eq!(text.matches("facet normal").count(), 1);
/// ```
pub fn encode_stl_ascii(mesh: &TriangleMesh) -> StlResult<String> {
    let mut buffer = Vec::new();
    write_stl_ascii(mesh, &mut buffer)?;
    let text = String::from_utf8(buffer)?;
    debug!(
        faces = mesh.face_count(),
        bytes = text.len(),
        "encoded ASCII STL"
    );
    Ok(text)
}

/// Write a mesh as binary STL.
///
/// # Errors
///
/// Same conditions as [`write_stl_ascii`].
pub fn write_stl_binary<W: Write>(mesh: &TriangleMesh, mut writer: W) -> StlResult<()> {
    check_encodable(mesh)?;

    // 80-byte header, padded with spaces
    let mut header = [b' '; HEADER_SIZE];
    let text = b"Binary STL generated by relief-io";
    header[..text.len()].copy_from_slice(text);
    writer.write_all(&header)?;

    #[allow(clippy::cast_possible_truncation)]
    // Truncation: face counts are limited to u32 range by the u32 index type
    let face_count = mesh.faces.len() as u32;
    writer.write_all(&face_count.to_le_bytes())?;

    for tri in mesh.triangles() {
        let normal = tri.normal().unwrap_or_else(Vector3::zeros);

        #[allow(clippy::cast_possible_truncation)]
        // Truncation: f64 to f32 is intentional, STL stores f32
        for component in [normal.x, normal.y, normal.z] {
            writer.write_all(&(component as f32).to_le_bytes())?;
        }
        #[allow(clippy::cast_possible_truncation)]
        // Truncation: f64 to f32 is intentional, STL stores f32
        for v in [&tri.v0, &tri.v1, &tri.v2] {
            writer.write_all(&(v.x as f32).to_le_bytes())?;
            writer.write_all(&(v.y as f32).to_le_bytes())?;
            writer.write_all(&(v.z as f32).to_le_bytes())?;
        }

        // Attribute byte count
        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

/// Encode a mesh as a binary STL byte buffer.
///
/// # Errors
///
/// Same conditions as [`write_stl_ascii`].
pub fn encode_stl_binary(mesh: &TriangleMesh) -> StlResult<Vec<u8>> {
    let mut buffer = Vec::with_capacity(HEADER_SIZE + 4 + mesh.face_count() * TRIANGLE_SIZE);
    write_stl_binary(mesh, &mut buffer)?;
    Ok(buffer)
}

/// Decode an STL byte buffer, detecting ASCII vs binary automatically.
///
/// Stated facet normals are ignored on both paths: downstream stages
/// recompute normals from positions when they need them, so the decoded
/// mesh has an empty normal buffer.
///
/// # Errors
///
/// Returns [`StlError::InvalidContent`] for buffers too small to be STL,
/// [`StlError::TruncatedBody`] for binary bodies shorter than the declared
/// face count, or [`StlError::ParseFloat`] for malformed ASCII numbers.
///
/// # Example
///
/// ```
/// use relief_io::{decode_stl, encode_stl_binary};
/// use relief_types::TriangleMesh;
///
/// let mesh = TriangleMesh::from_raw(
///     &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
///     &[0, 1, 2],
/// );
/// let bytes = encode_stl_binary(&mesh).unwrap();
/// let decoded = decode_stl(&bytes).unwrap();
///
/// assert_eq!(decoded.face_count(), 1);
/// ```
pub fn decode_stl(bytes: &[u8]) -> StlResult<TriangleMesh> {
    if bytes.len() < 6 {
        return Err(StlError::invalid_content("buffer too small to be valid STL"));
    }

    let probe = &bytes[..bytes.len().min(HEADER_SIZE)];
    let probe_str = String::from_utf8_lossy(probe);
    let looks_ascii = probe_str.trim_start().starts_with("solid")
        // Some binary exporters write "solid" into the 80-byte header;
        // null bytes give them away
        && !probe.contains(&0);

    if looks_ascii {
        decode_stl_ascii(&String::from_utf8_lossy(bytes))
    } else {
        decode_stl_binary(bytes)
    }
}

/// Decode an ASCII STL body.
fn decode_stl_ascii(text: &str) -> StlResult<TriangleMesh> {
    let mut mesh = TriangleMesh::new();
    let mut in_loop = false;
    let mut pending: Vec<[f64; 3]> = Vec::with_capacity(3);

    for line in text.lines() {
        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            continue;
        };

        match keyword.to_ascii_lowercase().as_str() {
            "outer" => {
                in_loop = true;
                pending.clear();
            }
            "vertex" => {
                if in_loop {
                    let mut coords = [0.0f64; 3];
                    let mut count = 0;
                    for slot in &mut coords {
                        if let Some(token) = parts.next() {
                            *slot = token.parse()?;
                            count += 1;
                        }
                    }
                    if count == 3 {
                        pending.push(coords);
                    }
                }
            }
            "endloop" => {
                in_loop = false;
            }
            "endfacet" => {
                if pending.len() == 3 {
                    #[allow(clippy::cast_possible_truncation)]
                    // Truncation: mesh indices are u32, larger meshes unsupported
                    let base = mesh.positions.len() as u32;
                    for [x, y, z] in pending.drain(..) {
                        mesh.positions.push(relief_types::Point3::new(x, y, z));
                    }
                    mesh.faces.push([base, base + 1, base + 2]);
                }
            }
            "endsolid" => break,
            // "solid", "facet" (normal is recomputed), unknown lines
            _ => {}
        }
    }

    debug!(faces = mesh.face_count(), "decoded ASCII STL");
    Ok(mesh)
}

/// Decode a binary STL body.
fn decode_stl_binary(bytes: &[u8]) -> StlResult<TriangleMesh> {
    if bytes.len() < HEADER_SIZE + 4 {
        return Err(StlError::invalid_content(
            "binary STL shorter than header and face count",
        ));
    }

    let face_count = u32::from_le_bytes([
        bytes[HEADER_SIZE],
        bytes[HEADER_SIZE + 1],
        bytes[HEADER_SIZE + 2],
        bytes[HEADER_SIZE + 3],
    ]);

    let mut mesh = TriangleMesh::with_capacity((face_count as usize) * 3, face_count as usize);

    for i in 0..face_count {
        let offset = HEADER_SIZE + 4 + (i as usize) * TRIANGLE_SIZE;
        if bytes.len() < offset + TRIANGLE_SIZE {
            return Err(StlError::TruncatedBody {
                expected: face_count,
                got: i,
            });
        }

        // Skip the 12-byte stated normal, read the 3 vertices
        #[allow(clippy::cast_possible_truncation)]
        // Truncation: mesh indices are u32, larger meshes unsupported
        let base = mesh.positions.len() as u32;
        for v in 0..3 {
            let start = offset + 12 + v * 12;
            mesh.positions.push(read_point(&bytes[start..start + 12]));
        }
        mesh.faces.push([base, base + 1, base + 2]);
    }

    debug!(faces = mesh.face_count(), "decoded binary STL");
    Ok(mesh)
}

/// Read a point from 12 bytes (3 little-endian f32s).
fn read_point(buf: &[u8]) -> relief_types::Point3<f64> {
    let x = f32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]);
    let y = f32::from_le_bytes([buf[4], buf[5], buf[6], buf[7]]);
    let z = f32::from_le_bytes([buf[8], buf[9], buf[10], buf[11]]);
    relief_types::Point3::new(f64::from(x), f64::from(y), f64::from(z))
}

/// Load a mesh from an STL file, detecting ASCII vs binary automatically.
///
/// # Errors
///
/// Returns [`StlError::FileNotFound`] for a missing path, otherwise the
/// same conditions as [`decode_stl`].
///
/// # Example
///
/// ```no_run
/// use relief_io::load_stl;
///
/// let mesh = load_stl("model.stl").unwrap();
/// println!("loaded {} faces", mesh.face_count());
/// ```
pub fn load_stl<P: AsRef<Path>>(path: P) -> StlResult<TriangleMesh> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StlError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StlError::Io(e)
        }
    })?;
    decode_stl(&bytes)
}

/// Save a mesh to an STL file.
///
/// # Arguments
///
/// * `mesh` - The mesh to save
/// * `path` - Output file path
/// * `binary` - If true, save as binary STL; if false, save as ASCII
///
/// # Errors
///
/// Same conditions as [`write_stl_ascii`], plus file-creation errors.
pub fn save_stl<P: AsRef<Path>>(mesh: &TriangleMesh, path: P, binary: bool) -> StlResult<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);

    if binary {
        write_stl_binary(mesh, writer)
    } else {
        write_stl_ascii(mesh, writer)
    }
}
