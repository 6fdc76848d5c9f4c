//! Random draws over an injected random source
//!
//! All randomness in the crate flows through these helpers so callers can
//! inject a seeded `StdRng` for reproducible output, or an OS-entropy source
//! for fresh patterns on every regeneration.

use rand::Rng;

/// Draw a uniform value in the inclusive range [`min`, `max`]
pub fn uniform_between(rng: &mut impl Rng, min: f64, max: f64) -> f64 {
    rng.random_range(min..=max)
}

/// Weighted coin flip: true with probability `chance_percent` / 100
///
/// Draws a uniform value in [0, 100) and compares it against the threshold,
/// so 0 never flips and 100 always flips.
pub fn weighted_flip(rng: &mut impl Rng, chance_percent: f64) -> bool {
    rng.random_range(0.0..100.0) < chance_percent
}
