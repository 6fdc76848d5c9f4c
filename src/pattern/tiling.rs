//! Triangular tiling generation across a padded canvas
//!
//! Rows of equilateral triangles are laid out on a rectangular grid whose
//! vertical pitch divides the drawable height evenly. Alternating columns are
//! shifted by half a row so the 90°- and 270°-rotated triangles interlock
//! without gaps.

use crate::math::polygon::regular_polygon_vertices;
use crate::math::probability::weighted_flip;
use crate::state::settings::{CanvasSpec, TilingParams};
use rand::Rng;

/// Which of the two rotation states a triangle is rendered in
///
/// Orientation also selects the fill color at render time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    /// Rendered rotated 90° about its own center
    Forward,
    /// Rendered rotated 270° about its own center
    Reverse,
}

impl Orientation {
    /// Rotation applied to the triangle about its own center, in degrees
    pub const fn rotation_degrees(self) -> f64 {
        match self {
            Self::Forward => 90.0,
            Self::Reverse => 270.0,
        }
    }
}

/// One triangle of the generated tiling
///
/// Produced per grid cell, consumed only by the render step, never persisted.
#[derive(Clone, Debug)]
pub struct Triangle {
    /// Center of the triangle's circumcircle
    pub center: [f64; 2],
    /// The three vertices, from the geometry kernel
    pub points: Vec<[f64; 2]>,
    /// Rotation state, assigned by weighted random flip
    pub orientation: Orientation,
    /// Vertical shift applied before rotation (half a row on even columns)
    pub column_shift: f64,
}

/// Grid geometry derived from the canvas and the tile dimension
#[derive(Clone, Copy, Debug)]
pub struct TriangleLayout {
    /// Vertical pitch between rows: `drawableHeight / dimension`
    pub row_pitch: f64,
    /// Horizontal pitch between columns: `row_pitch · √3/2`
    pub column_pitch: f64,
    /// Circumradius of each triangle: `row_pitch · √3/3`
    pub circumradius: f64,
    /// Number of rows: `dimension − 1`
    pub rows: usize,
    /// Number of columns: `floor(drawableWidth / column_pitch)`
    pub columns: usize,
}

impl TriangleLayout {
    /// Derive the grid geometry for a canvas at the given tile dimension
    ///
    /// A non-positive drawable area yields zero columns, so generation over
    /// this layout produces an empty tiling rather than an error.
    pub fn for_canvas(canvas: &CanvasSpec, dimension: u32) -> Self {
        let row_pitch = canvas.drawable_height() / f64::from(dimension.max(1));
        let circumradius = row_pitch * 3.0_f64.sqrt() / 3.0;
        let column_pitch = row_pitch * 3.0_f64.sqrt() / 2.0;

        let drawable_width = canvas.drawable_width();
        let columns = if column_pitch > 0.0 && drawable_width > 0.0 {
            (drawable_width / column_pitch).floor() as usize
        } else {
            0
        };

        Self {
            row_pitch,
            column_pitch,
            circumradius,
            rows: dimension.saturating_sub(1) as usize,
            columns,
        }
    }

    /// Offset of the whole triangle group within the drawable area
    ///
    /// Centers the interlocked pattern: `(row_pitch − column_pitch,
    /// row_pitch / 4)`.
    pub const fn group_offset(&self) -> [f64; 2] {
        [self.row_pitch - self.column_pitch, self.row_pitch / 4.0]
    }
}

/// A generated tiling: the grid geometry plus one triangle per cell
#[derive(Clone, Debug)]
pub struct Tiling {
    /// Grid geometry the triangles were laid out on
    pub layout: TriangleLayout,
    /// Triangles in row-major order
    pub triangles: Vec<Triangle>,
}

/// Generate a fresh tiling for the canvas and parameters
///
/// Each cell's center is `((col + 0.5)·h, (row + 0.5)·a)`; its orientation is
/// Reverse with probability `flip_chance` percent. Even columns carry a
/// vertical shift of half a row so adjacent columns mesh.
///
/// Intentionally non-deterministic per call: repeated invocation with the
/// same parameters yields a different but statistically similar pattern.
/// Callers wanting reproducibility inject a seeded rng.
pub fn generate_tiling(
    canvas: &CanvasSpec,
    params: &TilingParams,
    rng: &mut impl Rng,
) -> Tiling {
    let layout = TriangleLayout::for_canvas(canvas, params.dimension);
    let mut triangles = Vec::with_capacity(layout.rows * layout.columns);

    for row in 0..layout.rows {
        for col in 0..layout.columns {
            let x = ((col as f64) + 0.5) * layout.column_pitch;
            let y = ((row as f64) + 0.5) * layout.row_pitch;
            let points = regular_polygon_vertices(x, y, layout.circumradius, 3);

            let orientation = if weighted_flip(rng, params.flip_chance) {
                Orientation::Reverse
            } else {
                Orientation::Forward
            };

            let column_shift = if col % 2 == 0 {
                layout.row_pitch / 2.0
            } else {
                0.0
            };

            triangles.push(Triangle {
                center: [x, y],
                points,
                orientation,
                column_shift,
            });
        }
    }

    Tiling { layout, triangles }
}
