//! Error types for rasterization.

use thiserror::Error;

/// Result type for rasterization operations.
pub type RasterResult<T> = Result<T, RasterError>;

/// Errors that can occur while building a luminance grid.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The requested grid resolution is zero.
    #[error("grid resolution must be at least 1")]
    ZeroResolution,

    /// The source image has a zero-sized dimension.
    #[error("source image is empty ({width}x{height})")]
    EmptyImage {
        /// Source image width in pixels.
        width: u32,
        /// Source image height in pixels.
        height: u32,
    },

    /// Sample buffer length does not match the stated resolution.
    #[error("sample count mismatch: expected {expected}, got {got}")]
    SampleCountMismatch {
        /// Expected number of samples (`resolution²`).
        expected: usize,
        /// Actual buffer length.
        got: usize,
    },
}
