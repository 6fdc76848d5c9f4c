//! Tuning constants and runtime configuration defaults

use crate::state::settings::Rgb;

// Parameter state bounds
/// Minimum tile dimension
pub const DIMENSION_MIN: u32 = 2;
/// Maximum tile dimension
pub const DIMENSION_MAX: u32 = 30;
/// Lower clamp for the stepped flip chance, in percent
pub const CHANCE_MIN: f64 = 10.0;
/// Upper clamp for the stepped flip chance, in percent
pub const CHANCE_MAX: f64 = 90.0;
/// Flip-chance adjustment step, in percent
pub const CHANCE_STEP: f64 = 5.0;

// Default values for configurable parameters
/// Default tile dimension
pub const DEFAULT_DIMENSION: u32 = 9;
/// Default flip chance, in percent
pub const DEFAULT_CHANCE: f64 = 50.0;
/// Default viewport side length in pixels
pub const DEFAULT_VIEWPORT: f64 = 500.0;

// Viewport framing
/// Padding around the drawable area on framed viewports
pub const FRAME_PADDING: f64 = 120.0;
/// Minimum viewport side at which the frame padding applies
pub const FRAMED_VIEWPORT_MIN: f64 = 500.0;

// Paper texture tuning; empirically chosen visual constants
/// Fixed opacity the paper toggle switches on to
pub const PAPER_OPACITY: f64 = 0.1;
/// Side length of grain squares and the step between them
pub const GRAIN_STEP: f64 = 2.0;
/// Lower grain gray level, percent of full brightness
pub const GRAIN_GRAY_MIN: f64 = 75.0;
/// Upper grain gray level, percent of full brightness
pub const GRAIN_GRAY_MAX: f64 = 95.0;
/// Number of scattered speckle squares
pub const SPECKLE_COUNT: usize = 30;
/// Lower speckle gray level, percent of full brightness
pub const SPECKLE_GRAY_MIN: f64 = 40.0;
/// Upper speckle gray level, percent of full brightness
pub const SPECKLE_GRAY_MAX: f64 = 60.0;
/// Lower bound of the speckle opacity multiplier
pub const SPECKLE_OPACITY_MIN_FACTOR: f64 = 2.5;
/// Upper bound of the speckle opacity multiplier
pub const SPECKLE_OPACITY_MAX_FACTOR: f64 = 3.0;

// Animation
/// Interval between animated regenerations, in milliseconds
pub const TICK_INTERVAL_MS: u64 = 100;

// Default palette
/// Default background fill
pub const DEFAULT_BACKGROUND: Rgb = Rgb::new(0xf5, 0xf5, 0xf5);
/// Default Forward triangle fill
pub const DEFAULT_FORWARD: Rgb = Rgb::new(0x00, 0x00, 0x00);
/// Default Reverse triangle fill
pub const DEFAULT_REVERSE: Rgb = Rgb::new(0x7e, 0x7b, 0x8a);

// Output settings
/// Base name for exported documents
pub const OUTPUT_BASE_NAME: &str = "trill";
