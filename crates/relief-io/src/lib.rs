//! STL encoding and decoding for Reliefcast.
//!
//! The order-fulfillment path works on in-memory byte buffers: uploads are
//! fetched from the object store as blobs and exports are handed back as
//! blobs, so the buffer APIs ([`decode_stl`], [`encode_stl_ascii`],
//! [`encode_stl_binary`]) are primary and the path-based conveniences
//! ([`load_stl`], [`save_stl`]) wrap them.
//!
//! # Format Detection
//!
//! [`decode_stl`] detects the variant automatically:
//! - ASCII files start with "solid" (after optional whitespace)
//! - Binary files have an 80-byte header followed by a face count; a
//!   header containing null bytes is treated as binary even when it
//!   happens to start with "solid"
//!
//! # ASCII Format
//!
//! ```text
//! solid model
//!   facet normal ni nj nk
//!     outer loop
//!       vertex v1x v1y v1z
//!       vertex v2x v2y v2z
//!       vertex v3x v3y v3z
//!     endloop
//!   endfacet
//!   ...
//! endsolid model
//! ```
//!
//! # Binary Format
//!
//! ```text
//! UINT8[80]    – Header (ignored)
//! UINT32       – Number of triangles
//! foreach triangle
//!     REAL32[3] – Normal vector
//!     REAL32[3] – Vertex 1
//!     REAL32[3] – Vertex 2
//!     REAL32[3] – Vertex 3
//!     UINT16    – Attribute byte count (0)
//! end
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod stl;

pub use error::{StlError, StlResult};
pub use stl::{
    decode_stl, encode_stl_ascii, encode_stl_binary, load_stl, save_stl, write_stl_ascii,
    write_stl_binary,
};
