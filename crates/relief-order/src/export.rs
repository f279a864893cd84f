//! Export preparation: rescaled mesh + download filename.

use std::path::Path;

use relief_types::TriangleMesh;
use tracing::info;

use crate::annotation::parse_target_dimensions;
use crate::scale::{resolve_scale_factor, SCALE_IDENTITY_EPSILON};

/// A fulfillment-ready export: the (possibly rescaled) mesh, the factor
/// that was applied, and the filename to offer for download.
///
/// # Example
///
/// ```
/// use relief_types::{MeshBuilder, Point3, Vector3};
/// use relief_order::OrderExport;
///
/// let mut builder = MeshBuilder::new();
/// builder.push_box(Point3::new(0.0, 0.0, 0.0), Vector3::new(25.0, 12.5, 6.25));
/// let mesh = builder.finish();
///
/// let export = OrderExport::prepare(
///     &mesh,
///     "widget.stl",
///     Some("widget.stl: 100.0mm × 50.0mm × 25.0mm (PLA) x 1"),
///     None,
/// );
///
/// assert!((export.scale_factor - 2.0).abs() < 1e-10);
/// assert_eq!(export.filename, "widget_order_2x.stl");
/// ```
#[derive(Debug, Clone)]
pub struct OrderExport {
    /// The mesh to serialize, already rescaled when a factor applied.
    pub mesh: TriangleMesh,
    /// The uniform factor that was applied (`1.0` when unscaled).
    pub scale_factor: f64,
    /// Download filename: `<stem>_order_<factor>x.stl` when scaled,
    /// the original filename otherwise.
    pub filename: String,
}

impl OrderExport {
    /// Prepare an order export from the uploaded mesh and order metadata.
    ///
    /// The scale factor is resolved from the special-instructions
    /// annotation first, then from the stored per-item factor, defaulting
    /// to no scaling (see
    /// [`resolve_scale_factor`](crate::resolve_scale_factor)).
    #[must_use]
    pub fn prepare(
        mesh: &TriangleMesh,
        original_filename: &str,
        instructions: Option<&str>,
        stored_scale: Option<f64>,
    ) -> Self {
        let original_size = mesh.bounds().size();
        let target = instructions
            .and_then(|text| parse_target_dimensions(original_filename, text));

        let scale_factor = resolve_scale_factor(original_size, target.as_ref(), stored_scale);

        if (scale_factor - 1.0).abs() <= SCALE_IDENTITY_EPSILON {
            info!(file = original_filename, "exporting unscaled");
            return Self {
                mesh: mesh.clone(),
                scale_factor: 1.0,
                filename: original_filename.to_string(),
            };
        }

        let filename = format!(
            "{}_order_{}x.stl",
            file_stem(original_filename),
            format_scale(scale_factor)
        );
        info!(
            file = original_filename,
            scale_factor, export = filename, "exporting rescaled"
        );

        Self {
            mesh: mesh.scaled(scale_factor),
            scale_factor,
            filename,
        }
    }
}

/// Filename without its final extension.
fn file_stem(filename: &str) -> &str {
    Path::new(filename)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(filename)
}

/// Minimal decimal rendering of a scale factor: `2` not `2.00`, `2.5`
/// kept, two decimal places at most.
fn format_scale(factor: f64) -> String {
    let mut text = format!("{factor:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::relative_eq;
    use relief_types::{MeshBuilder, Point3, Vector3};

    fn box_mesh(half: Vector3<f64>) -> TriangleMesh {
        let mut builder = MeshBuilder::new();
        builder.push_box(Point3::origin(), half);
        builder.finish()
    }

    #[test]
    fn annotation_doubles_mesh() {
        // 50 x 25 x 12.5 bounding box
        let mesh = box_mesh(Vector3::new(25.0, 12.5, 6.25));
        let export = OrderExport::prepare(
            &mesh,
            "widget.stl",
            Some("widget.stl: 100.0mm × 50.0mm × 25.0mm (PLA) x 1"),
            None,
        );

        assert!(relative_eq!(export.scale_factor, 2.0, epsilon = 1e-10));
        assert_eq!(export.filename, "widget_order_2x.stl");

        let size = export.mesh.bounds().size();
        assert!(relative_eq!(size.x, 100.0, epsilon = 1e-9));
        assert!(relative_eq!(size.y, 50.0, epsilon = 1e-9));
        assert!(relative_eq!(size.z, 25.0, epsilon = 1e-9));
    }

    #[test]
    fn no_annotation_keeps_original_filename() {
        let mesh = box_mesh(Vector3::new(1.0, 1.0, 1.0));
        let export = OrderExport::prepare(&mesh, "widget.stl", Some("rush order"), None);

        assert!(relative_eq!(export.scale_factor, 1.0, epsilon = 1e-10));
        assert_eq!(export.filename, "widget.stl");
        assert_eq!(
            export.mesh.bounds().size(),
            mesh.bounds().size()
        );
    }

    #[test]
    fn stored_scale_applies_without_annotation() {
        let mesh = box_mesh(Vector3::new(1.0, 1.0, 1.0));
        let export = OrderExport::prepare(&mesh, "widget.stl", None, Some(2.5));

        assert!(relative_eq!(export.scale_factor, 2.5, epsilon = 1e-10));
        assert_eq!(export.filename, "widget_order_2.5x.stl");
        assert!(relative_eq!(
            export.mesh.bounds().size().x,
            5.0,
            epsilon = 1e-9
        ));
    }

    #[test]
    fn scale_formatting_is_minimal() {
        assert_eq!(format_scale(2.0), "2");
        assert_eq!(format_scale(2.5), "2.5");
        assert_eq!(format_scale(1.25), "1.25");
        assert_eq!(format_scale(0.5), "0.5");
        // Rounded to two decimal places
        assert_eq!(format_scale(4.0 / 3.0), "1.33");
    }

    #[test]
    fn stem_strips_only_last_extension() {
        assert_eq!(file_stem("widget.stl"), "widget");
        assert_eq!(file_stem("my.model.stl"), "my.model");
        assert_eq!(file_stem("noext"), "noext");
    }
}
