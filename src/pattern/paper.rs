//! Paper-grain texture overlay
//!
//! Simulates paper texture with a dense grid of faint 2×2 gray squares plus a
//! handful of darker scattered speckles. The numeric ranges are tuned visual
//! constants.

use crate::io::configuration::{
    GRAIN_GRAY_MAX, GRAIN_GRAY_MIN, GRAIN_STEP, SPECKLE_COUNT, SPECKLE_GRAY_MAX,
    SPECKLE_GRAY_MIN, SPECKLE_OPACITY_MAX_FACTOR, SPECKLE_OPACITY_MIN_FACTOR,
};
use crate::math::probability::uniform_between;
use crate::state::settings::CanvasSpec;
use rand::Rng;

/// One shaded square of the paper texture
#[derive(Clone, Copy, Debug)]
pub struct GrainRect {
    /// Left edge within the drawable area
    pub x: f64,
    /// Top edge within the drawable area
    pub y: f64,
    /// Square width in pixels
    pub width: f64,
    /// Square height in pixels
    pub height: f64,
    /// Gray level as percent of full brightness (equal R = G = B)
    pub gray_percent: f64,
    /// Fill opacity of this square
    pub opacity: f64,
}

/// Generate the paper texture for the canvas at the given opacity
///
/// An opacity of 0 is the "off" sentinel and short-circuits to an empty
/// sequence. Otherwise the drawable area is covered in non-overlapping 2×2
/// squares with gray levels in [75, 95] percent at the given opacity, and
/// exactly 30 speckles are scattered on top: side lengths drawn from {1, 2},
/// gray in [40, 60] percent, opacity scaled by a factor in [2.5, 3.0].
///
/// Per-call randomness, no determinism guarantee; see
/// [`generate_tiling`](crate::pattern::tiling::generate_tiling).
pub fn generate_paper(canvas: &CanvasSpec, opacity: f64, rng: &mut impl Rng) -> Vec<GrainRect> {
    let mut rects = Vec::new();

    if opacity <= 0.0 {
        return rects;
    }

    let width = canvas.drawable_width();
    let height = canvas.drawable_height();

    let mut x = 0.0;
    while x < width - 1.0 {
        let mut y = 0.0;
        while y < height - 1.0 {
            rects.push(GrainRect {
                x,
                y,
                width: GRAIN_STEP,
                height: GRAIN_STEP,
                gray_percent: uniform_between(rng, GRAIN_GRAY_MIN, GRAIN_GRAY_MAX),
                opacity,
            });
            y += GRAIN_STEP;
        }
        x += GRAIN_STEP;
    }

    let max_x = (width - GRAIN_STEP).max(0.0);
    let max_y = (height - GRAIN_STEP).max(0.0);

    for _ in 0..SPECKLE_COUNT {
        rects.push(GrainRect {
            x: uniform_between(rng, 0.0, max_x),
            y: uniform_between(rng, 0.0, max_y),
            width: f64::from(rng.random_range(1..=2)),
            height: f64::from(rng.random_range(1..=2)),
            gray_percent: uniform_between(rng, SPECKLE_GRAY_MIN, SPECKLE_GRAY_MAX),
            opacity: opacity
                * uniform_between(rng, SPECKLE_OPACITY_MIN_FACTOR, SPECKLE_OPACITY_MAX_FACTOR),
        });
    }

    rects
}
