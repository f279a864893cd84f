//! Error types for voxelization.

use thiserror::Error;

/// Result type for voxelization operations.
pub type VoxelResult<T> = Result<T, VoxelError>;

/// Errors that can occur during voxelization.
#[derive(Debug, Error)]
pub enum VoxelError {
    /// Invalid voxelizer parameters.
    #[error("invalid voxelizer parameters: {0}")]
    InvalidParams(String),
}

impl VoxelError {
    /// Create an `InvalidParams` error with the given message.
    #[must_use]
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidParams(message.into())
    }
}
