//! Order-fulfillment mesh rescaling for Reliefcast.
//!
//! When an order is fulfilled, the customer's uploaded model may need to be
//! printed at a specific physical size. The target arrives as a
//! semi-structured line inside the order's special-instructions text:
//!
//! ```text
//! <modelName>: <W>mm × <H>mm × <D>mm (<material>) x <quantity>
//! ```
//!
//! This crate owns the consumption of that externally-defined grammar (it
//! is produced elsewhere in the storefront), the reduction of per-axis
//! ratios to one uniform scale factor, and the naming of the exported file.
//! Absence of an annotation is the common case and is never an error: the
//! model is exported unmodified.
//!
//! # Example
//!
//! ```
//! use nalgebra::Vector3;
//! use relief_order::{parse_target_dimensions, resolve_scale_factor};
//!
//! let note = "widget.stl: 100.0mm × 50.0mm × 25.0mm (PLA) x 1";
//! let target = parse_target_dimensions("widget.stl", note).unwrap();
//!
//! let factor = resolve_scale_factor(
//!     Vector3::new(50.0, 25.0, 12.5),
//!     Some(&target),
//!     None,
//! );
//! assert!((factor - 2.0).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod annotation;
mod export;
mod scale;

pub use annotation::{parse_target_dimensions, TargetDimensions};
pub use export::OrderExport;
pub use scale::{resolve_scale_factor, SCALE_IDENTITY_EPSILON};
