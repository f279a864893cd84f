//! Target-dimension annotation parsing.

use nalgebra::Vector3;
use regex::Regex;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Target bounding-box size parsed from an order annotation, in millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TargetDimensions {
    /// Target width (X extent).
    pub width_mm: f64,
    /// Target height (Y extent).
    pub height_mm: f64,
    /// Target depth (Z extent).
    pub depth_mm: f64,
}

impl TargetDimensions {
    /// The dimensions as a `(width, height, depth)` vector.
    #[inline]
    #[must_use]
    pub const fn as_vector(&self) -> Vector3<f64> {
        Vector3::new(self.width_mm, self.height_mm, self.depth_mm)
    }

    /// Check that all three dimensions are finite and positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        [self.width_mm, self.height_mm, self.depth_mm]
            .iter()
            .all(|d| d.is_finite() && *d > 0.0)
    }
}

/// Parse a target-dimension annotation out of special-instructions text.
///
/// The grammar is owned by the storefront's order form, not by this crate:
///
/// ```text
/// <modelName>: <W>mm × <H>mm × <D>mm (<material>) x <quantity>
/// ```
///
/// The model name is matched literally (regex-escaped), both `×` and `x`
/// are accepted as separators, and the `mm` unit suffix is required.
/// Returns `None` when no such line exists. That is the normal
/// no-scaling path, not an error.
///
/// # Example
///
/// ```
/// use relief_order::parse_target_dimensions;
///
/// let note = "please rush!\nbracket.stl: 80mm x 40mm x 20mm (PETG) x 2";
/// let target = parse_target_dimensions("bracket.stl", note).unwrap();
/// assert!((target.width_mm - 80.0).abs() < 1e-10);
/// assert!((target.depth_mm - 20.0).abs() < 1e-10);
///
/// assert!(parse_target_dimensions("other.stl", note).is_none());
/// ```
#[must_use]
pub fn parse_target_dimensions(model_name: &str, instructions: &str) -> Option<TargetDimensions> {
    let pattern = format!(
        r"{}:\s*(\d+(?:\.\d+)?)\s*mm\s*[x×]\s*(\d+(?:\.\d+)?)\s*mm\s*[x×]\s*(\d+(?:\.\d+)?)\s*mm",
        regex::escape(model_name)
    );
    // The pattern is built from a fixed template plus an escaped literal,
    // so compilation only fails on pathological name lengths
    let re = Regex::new(&pattern).ok()?;
    let captures = re.captures(instructions)?;

    let width_mm: f64 = captures.get(1)?.as_str().parse().ok()?;
    let height_mm: f64 = captures.get(2)?.as_str().parse().ok()?;
    let depth_mm: f64 = captures.get(3)?.as_str().parse().ok()?;

    let target = TargetDimensions {
        width_mm,
        height_mm,
        depth_mm,
    };
    debug!(
        model = model_name,
        width_mm, height_mm, depth_mm, "parsed target dimensions"
    );
    Some(target)
}
