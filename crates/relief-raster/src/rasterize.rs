//! Nearest-neighbor image resampling into a luminance grid.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use tracing::debug;

use crate::error::{RasterError, RasterResult};
use crate::grid::LuminanceGrid;

/// Default grid resolution used by the upload/preview flow.
pub const DEFAULT_RESOLUTION: u32 = 100;

/// Rec. 601 luminance of an RGB sample, rounded to `u8`.
///
/// # Example
///
/// ```
/// use relief_raster::luminance;
///
/// assert_eq!(luminance(0, 0, 0), 0);
/// assert_eq!(luminance(255, 255, 255), 255);
/// // Green dominates perceived brightness
/// assert!(luminance(0, 255, 0) > luminance(255, 0, 0));
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
// Truncation and sign loss are safe: the weights sum to 1.0, so the rounded
// result stays within 0..=255
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let y = 0.114f64.mul_add(
        f64::from(b),
        0.299f64.mul_add(f64::from(r), 0.587 * f64::from(g)),
    );
    y.round() as u8
}

/// Resample a decoded RGBA bitmap into a square luminance grid.
///
/// The source is scaled to `resolution × resolution` with nearest-neighbor
/// filtering (no smoothing, preserving hard silhouette edges), then each
/// pixel is collapsed to its Rec. 601 luminance. Alpha is ignored.
///
/// # Errors
///
/// Returns [`RasterError::ZeroResolution`] for a zero resolution, or
/// [`RasterError::EmptyImage`] when the source has a zero-sized dimension.
/// Malformed pixel data cannot occur: the input type guarantees a decoded
/// buffer.
///
/// # Example
///
/// ```
/// use image::{Rgba, RgbaImage};
/// use relief_raster::{rasterize, DEFAULT_RESOLUTION};
///
/// let white = RgbaImage::from_pixel(640, 480, Rgba([255, 255, 255, 255]));
/// let grid = rasterize(&white, DEFAULT_RESOLUTION).unwrap();
///
/// assert_eq!(grid.resolution(), 100);
/// assert!(grid.samples().iter().all(|&l| l == 255));
/// ```
pub fn rasterize(image: &RgbaImage, resolution: u32) -> RasterResult<LuminanceGrid> {
    if resolution == 0 {
        return Err(RasterError::ZeroResolution);
    }
    if image.width() == 0 || image.height() == 0 {
        return Err(RasterError::EmptyImage {
            width: image.width(),
            height: image.height(),
        });
    }

    let resized = imageops::resize(image, resolution, resolution, FilterType::Nearest);
    let samples: Vec<u8> = resized
        .pixels()
        .map(|p| luminance(p.0[0], p.0[1], p.0[2]))
        .collect();

    debug!(
        source_width = image.width(),
        source_height = image.height(),
        resolution,
        "rasterized image to luminance grid"
    );

    LuminanceGrid::from_samples(resolution, samples)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn luminance_weights() {
        assert_eq!(luminance(255, 0, 0), 76); // 0.299 * 255
        assert_eq!(luminance(0, 255, 0), 150); // 0.587 * 255
        assert_eq!(luminance(0, 0, 255), 29); // 0.114 * 255
    }

    #[test]
    fn uniform_image_yields_uniform_grid() {
        let gray = RgbaImage::from_pixel(33, 17, Rgba([100, 100, 100, 255]));
        let grid = rasterize(&gray, 8).unwrap();
        assert!(grid.samples().iter().all(|&l| l == 100));
    }

    #[test]
    fn nearest_neighbor_keeps_hard_edges() {
        // Left half black, right half white
        let mut img = RgbaImage::from_pixel(100, 100, Rgba([255, 255, 255, 255]));
        for y in 0..100 {
            for x in 0..50 {
                img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }

        let grid = rasterize(&img, 10).unwrap();
        // Every sample is exactly 0 or 255: no intermediate blur values
        assert!(grid.samples().iter().all(|&l| l == 0 || l == 255));
        assert_eq!(grid.sample(0, 5), Some(0));
        assert_eq!(grid.sample(9, 5), Some(255));
    }

    #[test]
    fn alpha_is_ignored() {
        let transparent_black = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 0]));
        let grid = rasterize(&transparent_black, 2).unwrap();
        assert!(grid.samples().iter().all(|&l| l == 0));
    }

    #[test]
    fn empty_image_is_rejected() {
        let empty = RgbaImage::new(0, 0);
        assert!(matches!(
            rasterize(&empty, 10),
            Err(RasterError::EmptyImage { .. })
        ));
    }

    #[test]
    fn zero_resolution_is_rejected() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        assert!(matches!(
            rasterize(&img, 0),
            Err(RasterError::ZeroResolution)
        ));
    }
}
