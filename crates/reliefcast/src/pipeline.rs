//! The two storefront flows, composed from the stage crates.

use image::DynamicImage;
use relief_io::{decode_stl, encode_stl_ascii, StlError};
use relief_order::OrderExport;
use relief_raster::{rasterize, RasterError};
use relief_types::TriangleMesh;
use relief_voxel::{voxelize, VoxelError, VoxelizerParams};
use thiserror::Error;
use tracing::info;

/// Errors from the composed pipeline flows.
///
/// Each variant names the stage that failed, so a single failed
/// conversion can be logged and aborted with its cause intact.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Rasterization failed.
    #[error("rasterization failed: {0}")]
    Raster(#[from] RasterError),

    /// Voxelization failed.
    #[error("voxelization failed: {0}")]
    Voxel(#[from] VoxelError),

    /// STL encoding or decoding failed.
    #[error("STL codec failed: {0}")]
    Stl(#[from] StlError),
}

/// A fulfillment-ready STL download.
#[derive(Debug, Clone)]
pub struct OrderStl {
    /// ASCII STL text of the (possibly rescaled) model.
    pub stl_text: String,
    /// Filename to offer for download.
    pub filename: String,
    /// The uniform scale factor that was applied (`1.0` when unscaled).
    pub scale_factor: f64,
}

/// Upload/preview flow: decoded image → extruded silhouette mesh.
///
/// Rasterizes the image to a `resolution × resolution` luminance grid,
/// voxelizes the silhouette, and finalizes smooth normals. The result is
/// handed straight to the 3D viewer.
///
/// # Errors
///
/// Returns [`PipelineError::Raster`] for a zero resolution or empty
/// image, [`PipelineError::Voxel`] for invalid voxelizer parameters.
///
/// # Example
///
/// ```
/// use image::{DynamicImage, Rgba, RgbaImage};
/// use relief_voxel::VoxelizerParams;
/// use reliefcast::pipeline::image_to_mesh;
///
/// let img = DynamicImage::ImageRgba8(
///     RgbaImage::from_pixel(32, 32, Rgba([255, 255, 255, 255])),
/// );
/// // All-white image: fallback slab, still renderable
/// let mesh = image_to_mesh(&img, 20, &VoxelizerParams::default()).unwrap();
/// assert!(!mesh.is_empty());
/// ```
pub fn image_to_mesh(
    image: &DynamicImage,
    resolution: u32,
    params: &VoxelizerParams,
) -> Result<TriangleMesh, PipelineError> {
    let rgba = image.to_rgba8();
    let grid = rasterize(&rgba, resolution)?;
    let mesh = voxelize(&grid, params)?;
    info!(
        resolution,
        faces = mesh.face_count(),
        "image converted to silhouette mesh"
    );
    Ok(mesh)
}

/// Order-fulfillment flow: uploaded STL bytes → rescaled STL download.
///
/// Decodes the stored STL (ASCII or binary), resolves the uniform scale
/// factor from the order's special-instructions annotation or the stored
/// per-item factor, and re-serializes as ASCII STL under the download
/// filename convention.
///
/// # Errors
///
/// Returns [`PipelineError::Stl`] when the input bytes are not valid STL
/// or the decoded mesh cannot be re-encoded.
///
/// # Example
///
/// ```
/// use relief_io::encode_stl_ascii;
/// use relief_types::TriangleMesh;
/// use reliefcast::pipeline::prepare_order_stl;
///
/// let mesh = TriangleMesh::from_raw(
///     &[0.0, 0.0, 0.0, 10.0, 0.0, 0.0, 0.0, 10.0, 10.0],
///     &[0, 1, 2],
/// );
/// let bytes = encode_stl_ascii(&mesh).unwrap();
///
/// // No annotation, no stored factor: passthrough under the original name
/// let export = prepare_order_stl(bytes.as_bytes(), "part.stl", None, None).unwrap();
/// assert_eq!(export.filename, "part.stl");
/// assert!((export.scale_factor - 1.0).abs() < 1e-10);
/// ```
pub fn prepare_order_stl(
    stl_bytes: &[u8],
    original_filename: &str,
    instructions: Option<&str>,
    stored_scale: Option<f64>,
) -> Result<OrderStl, PipelineError> {
    let mesh = decode_stl(stl_bytes)?;
    let export = OrderExport::prepare(&mesh, original_filename, instructions, stored_scale);
    let stl_text = encode_stl_ascii(&export.mesh)?;

    info!(
        file = original_filename,
        scale_factor = export.scale_factor,
        bytes = stl_text.len(),
        "order STL prepared"
    );

    Ok(OrderStl {
        stl_text,
        filename: export.filename,
        scale_factor: export.scale_factor,
    })
}
