//! Procedural generator for a decorative triangular tiling pattern with a paper-grain overlay
//!
//! The crate lays out a grid of equilateral triangles across a padded canvas,
//! assigns each one of two orientations by a weighted random flip, and renders
//! the result as an SVG document. A small immutable parameter state drives the
//! generators and maps abstract input events (keyboard, gesture, resize,
//! color picks) to clamped transitions.

#![forbid(unsafe_code)]

/// Input/output operations: SVG rendering, export, CLI, and error handling
pub mod io;
/// Mathematical utilities for polygon geometry and random draws
pub mod math;
/// Core generators producing triangle and paper-grain primitives
pub mod pattern;
/// Parameter state, transitions, input-event mapping, and animation
pub mod state;

pub use io::error::{PatternError, Result};
