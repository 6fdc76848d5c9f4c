//! Vertex placement for regular polygons inscribed in a circle

use std::f64::consts::PI;

/// Compute the vertices of a regular polygon centered at (`center_x`, `center_y`)
///
/// Vertices are evenly spaced on the circle of the given radius, starting
/// straight up from the center and proceeding clockwise: vertex i sits at
/// `(cx + r·sin(2πi/n), cy − r·cos(2πi/n))`.
///
/// A side count of 1 degenerates to the single point at the center. A radius
/// of 0 produces coincident points; neither case is an error.
pub fn regular_polygon_vertices(
    center_x: f64,
    center_y: f64,
    radius: f64,
    sides: usize,
) -> Vec<[f64; 2]> {
    if sides == 1 {
        return vec![[center_x, center_y]];
    }

    (0..sides)
        .map(|i| {
            let angle = 2.0 * PI * (i as f64) / (sides as f64);
            [
                angle.sin().mul_add(radius, center_x),
                angle.cos().mul_add(-radius, center_y),
            ]
        })
        .collect()
}
