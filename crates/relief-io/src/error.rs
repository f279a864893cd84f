//! Error types for STL I/O.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for STL I/O operations.
pub type StlResult<T> = Result<T, StlError>;

/// Errors that can occur during STL encoding or decoding.
#[derive(Debug, Error)]
pub enum StlError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The mesh has no geometry at all.
    #[error("mesh is empty")]
    EmptyMesh,

    /// The mesh has positions but no triangle indices.
    ///
    /// The encoder requires indexed geometry; serializing an unindexed
    /// position soup would silently drop every vertex.
    #[error("unsupported geometry: mesh has {vertex_count} vertices but no triangle indices")]
    UnsupportedGeometry {
        /// Number of orphaned vertices.
        vertex_count: usize,
    },

    /// Invalid file content (parse error).
    #[error("invalid STL content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// Binary body ended before the declared face count was read.
    #[error("truncated binary STL: header declares {expected} faces, body holds {got}")]
    TruncatedBody {
        /// Faces declared in the header.
        expected: u32,
        /// Faces actually present.
        got: u32,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Float parsing error in an ASCII body.
    #[error("float parsing error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    /// Encoded ASCII output was not valid UTF-8.
    #[error("string conversion error: {0}")]
    FromUtf8(#[from] std::string::FromUtf8Error),
}

impl StlError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }
}
