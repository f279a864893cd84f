//! Image rasterization for Reliefcast.
//!
//! Converts an already-decoded RGBA bitmap into a fixed-resolution
//! [`LuminanceGrid`], the silhouette voxelizer's only input.
//!
//! Resampling is **nearest-neighbor** by design: antialiasing blur around
//! silhouette edges would corrupt the darkness threshold test downstream.
//! Luminance uses the standard Rec. 601 perceptual weighting
//! `0.299·R + 0.587·G + 0.114·B`; alpha is ignored.
//!
//! Decoding image bytes is the caller's concern: this crate assumes a
//! decodable bitmap is already available as a pixel buffer.
//!
//! # Example
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use relief_raster::rasterize;
//!
//! let black = RgbaImage::from_pixel(32, 32, Rgba([0, 0, 0, 255]));
//! let grid = rasterize(&black, 10).unwrap();
//!
//! assert_eq!(grid.resolution(), 10);
//! assert_eq!(grid.sample(0, 0), Some(0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod grid;
mod rasterize;

pub use error::{RasterError, RasterResult};
pub use grid::LuminanceGrid;
pub use rasterize::{luminance, rasterize, DEFAULT_RESOLUTION};
