//! SVG render surface and file export
//!
//! Turns generator output into a standalone vector document: a background
//! rectangle sized to the drawable area, a translated group of triangle
//! polygons, and a group of paper-grain rectangles. The document serializes
//! directly to a downloadable `.svg` file.

use crate::io::error::{PatternError, Result};
use crate::pattern::paper::GrainRect;
use crate::pattern::tiling::{Orientation, Tiling, Triangle};
use crate::state::settings::{Rgb, Settings};
use std::path::Path;
use svg::Document;
use svg::node::element::{Group, Polygon, Rectangle};

/// Format a vertex list as an SVG `points` attribute value
pub fn point_string(points: &[[f64; 2]]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p[0], p[1]))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Transform attribute for one triangle
///
/// Even columns carry their half-row translate before the rotation about the
/// triangle's own center; this offset is what makes adjacent columns mesh.
fn triangle_transform(triangle: &Triangle) -> String {
    let rotate = format!(
        "rotate({} {} {})",
        triangle.orientation.rotation_degrees(),
        triangle.center[0],
        triangle.center[1]
    );
    if triangle.column_shift > 0.0 {
        format!("translate(0 {}) {rotate}", triangle.column_shift)
    } else {
        rotate
    }
}

fn triangle_fill(orientation: Orientation, settings: &Settings) -> Rgb {
    match orientation {
        Orientation::Forward => settings.palette.forward,
        Orientation::Reverse => settings.palette.reverse,
    }
}

/// Build the complete vector document for one render pass
pub fn render_document(settings: &Settings, tiling: &Tiling, paper: &[GrainRect]) -> Document {
    let width = settings.canvas.drawable_width();
    let height = settings.canvas.drawable_height();

    let background = Rectangle::new()
        .set("width", "100%")
        .set("height", "100%")
        .set("fill", settings.palette.background.to_hex());

    let offset = tiling.layout.group_offset();
    let mut triangles = Group::new().set(
        "transform",
        format!("translate({} {})", offset[0], offset[1]),
    );
    for triangle in &tiling.triangles {
        triangles = triangles.add(
            Polygon::new()
                .set("points", point_string(&triangle.points))
                .set("fill", triangle_fill(triangle.orientation, settings).to_hex())
                .set("stroke", "none")
                .set("transform", triangle_transform(triangle)),
        );
    }

    let mut grain = Group::new();
    for rect in paper {
        grain = grain.add(
            Rectangle::new()
                .set("x", rect.x)
                .set("y", rect.y)
                .set("width", rect.width)
                .set("height", rect.height)
                .set("fill", Rgb::gray_from_percent(rect.gray_percent).to_hex())
                .set("fill-opacity", rect.opacity),
        );
    }

    Document::new()
        .set("width", width)
        .set("height", height)
        .add(background)
        .add(triangles)
        .add(grain)
}

/// Write a rendered document to disk
///
/// # Errors
///
/// Returns [`PatternError::SvgExport`] when the file cannot be written. An
/// export failure affects nothing else; the pattern is simply not saved.
pub fn export_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document).map_err(|source| PatternError::SvgExport {
        path: path.to_path_buf(),
        source,
    })
}
