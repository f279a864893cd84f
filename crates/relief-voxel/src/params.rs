//! Voxelizer parameters.

use crate::error::{VoxelError, VoxelResult};

/// Parameters for silhouette voxelization.
///
/// # Example
///
/// ```
/// use relief_voxel::VoxelizerParams;
///
/// // Defaults match the storefront preview pipeline
/// let params = VoxelizerParams::default();
/// assert_eq!(params.threshold, 180);
/// assert!((params.world_span - 4.0).abs() < 1e-10);
///
/// // Custom extrusion for a deeper stamp
/// let deep = VoxelizerParams {
///     extrude_depth: 1.0,
///     ..VoxelizerParams::default()
/// };
/// assert!(deep.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct VoxelizerParams {
    /// Darkness threshold on the 0–255 luminance scale. Cells strictly
    /// below this value are part of the silhouette.
    pub threshold: u8,

    /// Extrusion depth in world units. All voxels sit on the base plane
    /// Y = 0 and extrude upward by this amount.
    pub extrude_depth: f64,

    /// World-space side length of the grid footprint, centered on the
    /// origin (the default 4.0 spans `[-2, 2]` on X and Z).
    pub world_span: f64,
}

impl Default for VoxelizerParams {
    fn default() -> Self {
        Self {
            threshold: 180,
            extrude_depth: 0.5,
            world_span: 4.0,
        }
    }
}

impl VoxelizerParams {
    /// Check that the world-space parameters are finite and positive.
    ///
    /// # Errors
    ///
    /// Returns [`VoxelError::InvalidParams`] naming the offending field.
    pub fn validate(&self) -> VoxelResult<()> {
        if !self.extrude_depth.is_finite() || self.extrude_depth <= 0.0 {
            return Err(VoxelError::invalid_params(format!(
                "extrude_depth must be finite and positive, got {}",
                self.extrude_depth
            )));
        }
        if !self.world_span.is_finite() || self.world_span <= 0.0 {
            return Err(VoxelError::invalid_params(format!(
                "world_span must be finite and positive, got {}",
                self.world_span
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(VoxelizerParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_nonpositive_depth() {
        let params = VoxelizerParams {
            extrude_depth: 0.0,
            ..VoxelizerParams::default()
        };
        assert!(params.validate().is_err());

        let params = VoxelizerParams {
            extrude_depth: -1.0,
            ..VoxelizerParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_nonfinite_span() {
        let params = VoxelizerParams {
            world_span: f64::NAN,
            ..VoxelizerParams::default()
        };
        assert!(params.validate().is_err());

        let params = VoxelizerParams {
            world_span: f64::INFINITY,
            ..VoxelizerParams::default()
        };
        assert!(params.validate().is_err());
    }
}
