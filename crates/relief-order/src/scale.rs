//! Uniform scale-factor resolution.

use nalgebra::Vector3;
use tracing::{debug, warn};

use crate::annotation::TargetDimensions;

/// Tolerance below which a scale factor is treated as the identity.
pub const SCALE_IDENTITY_EPSILON: f64 = 1e-9;

/// Smallest original extent considered measurable, in mesh units.
const MIN_AXIS_EXTENT: f64 = 1e-9;

/// Resolve the uniform scale factor for an order export.
///
/// Resolution order:
///
/// 1. Parsed target dimensions, when present: per-axis `target/original`
///    ratios are computed independently and **averaged** into one scalar.
///    Averaging deliberately sacrifices exact per-axis fit to preserve the
///    model's proportions, since non-uniform scaling would distort the
///    print.
///    (A least-squares uniform fit would be an alternative reduction; the
///    averaging policy is the storefront's established contract.)
/// 2. Otherwise, a stored per-item factor that is finite, positive, and
///    not the identity.
/// 3. Otherwise `1.0`: the model is exported unmodified.
///
/// Degenerate inputs (an original extent of ~0, or a non-finite or
/// non-positive ratio) never propagate: the factor falls back to `1.0`
/// and a warning is emitted.
///
/// # Example
///
/// ```
/// use nalgebra::Vector3;
/// use relief_order::{resolve_scale_factor, TargetDimensions};
///
/// let original = Vector3::new(50.0, 25.0, 12.5);
/// let target = TargetDimensions {
///     width_mm: 100.0,
///     height_mm: 50.0,
///     depth_mm: 25.0,
/// };
///
/// let factor = resolve_scale_factor(original, Some(&target), None);
/// assert!((factor - 2.0).abs() < 1e-10);
///
/// // No annotation, stored factor wins
/// let factor = resolve_scale_factor(original, None, Some(3.0));
/// assert!((factor - 3.0).abs() < 1e-10);
///
/// // Nothing available: identity
/// let factor = resolve_scale_factor(original, None, None);
/// assert!((factor - 1.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn resolve_scale_factor(
    original_size: Vector3<f64>,
    target: Option<&TargetDimensions>,
    stored: Option<f64>,
) -> f64 {
    if let Some(target) = target {
        return scale_from_target(original_size, target);
    }

    if let Some(stored) = stored {
        if stored.is_finite() && stored > 0.0 && (stored - 1.0).abs() > SCALE_IDENTITY_EPSILON {
            debug!(factor = stored, "using stored scale factor");
            return stored;
        }
    }

    1.0
}

/// Average the per-axis target/original ratios into one uniform factor.
fn scale_from_target(original_size: Vector3<f64>, target: &TargetDimensions) -> f64 {
    if !target.is_positive() {
        warn!(
            ?target,
            "target dimensions are not positive, exporting unscaled"
        );
        return 1.0;
    }

    let target = target.as_vector();
    let mut ratios = [0.0f64; 3];
    for axis in 0..3 {
        let original = original_size[axis];
        if !original.is_finite() || original < MIN_AXIS_EXTENT {
            warn!(
                axis,
                original, "original extent is degenerate, exporting unscaled"
            );
            return 1.0;
        }
        ratios[axis] = target[axis] / original;
    }

    let factor = (ratios[0] + ratios[1] + ratios[2]) / 3.0;
    if !factor.is_finite() || factor <= 0.0 {
        warn!(factor, "computed scale factor is degenerate, exporting unscaled");
        return 1.0;
    }

    debug!(
        scale_x = ratios[0],
        scale_y = ratios[1],
        scale_z = ratios[2],
        factor,
        "averaged per-axis ratios"
    );
    factor
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(w: f64, h: f64, d: f64) -> TargetDimensions {
        TargetDimensions {
            width_mm: w,
            height_mm: h,
            depth_mm: d,
        }
    }

    #[test]
    fn identity_when_target_equals_original() {
        let factor = resolve_scale_factor(
            Vector3::new(40.0, 20.0, 10.0),
            Some(&target(40.0, 20.0, 10.0)),
            None,
        );
        assert!((factor - 1.0).abs() < 1e-10);
    }

    #[test]
    fn uniform_doubling() {
        let factor = resolve_scale_factor(
            Vector3::new(50.0, 25.0, 12.5),
            Some(&target(100.0, 50.0, 25.0)),
            None,
        );
        assert!((factor - 2.0).abs() < 1e-10);
    }

    #[test]
    fn mixed_ratios_are_averaged() {
        // Ratios 2.0, 1.0, 3.0 -> average 2.0
        let factor = resolve_scale_factor(
            Vector3::new(10.0, 10.0, 10.0),
            Some(&target(20.0, 10.0, 30.0)),
            None,
        );
        assert!((factor - 2.0).abs() < 1e-10);
    }

    #[test]
    fn zero_original_axis_falls_back() {
        // A flat model must not produce an infinite ratio
        let factor = resolve_scale_factor(
            Vector3::new(50.0, 0.0, 12.5),
            Some(&target(100.0, 50.0, 25.0)),
            None,
        );
        assert!((factor - 1.0).abs() < 1e-10);
    }

    #[test]
    fn zero_target_falls_back() {
        let factor = resolve_scale_factor(
            Vector3::new(50.0, 25.0, 12.5),
            Some(&target(0.0, 50.0, 25.0)),
            None,
        );
        assert!((factor - 1.0).abs() < 1e-10);
    }

    #[test]
    fn annotation_takes_precedence_over_stored() {
        let factor = resolve_scale_factor(
            Vector3::new(10.0, 10.0, 10.0),
            Some(&target(20.0, 20.0, 20.0)),
            Some(5.0),
        );
        assert!((factor - 2.0).abs() < 1e-10);
    }

    #[test]
    fn stored_identity_is_ignored() {
        let factor = resolve_scale_factor(Vector3::new(10.0, 10.0, 10.0), None, Some(1.0));
        assert!((factor - 1.0).abs() < 1e-10);
    }

    #[test]
    fn stored_degenerate_is_ignored() {
        for bad in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            let factor = resolve_scale_factor(Vector3::new(10.0, 10.0, 10.0), None, Some(bad));
            assert!((factor - 1.0).abs() < 1e-10, "stored {bad} must be ignored");
        }
    }
}
