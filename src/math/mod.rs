//! Mathematical utilities for the generators

/// Regular polygon vertex placement
pub mod polygon;
/// Uniform draws and weighted flips over an injected random source
pub mod probability;
