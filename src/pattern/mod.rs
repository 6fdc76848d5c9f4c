//! Core generators producing drawable primitives
//!
//! Both generators are pure apart from the injected random source: they read
//! an immutable parameter state and emit a fresh list of primitives on every
//! call. Nothing is cached or diffed between regenerations.

/// Paper-grain texture overlay generation
pub mod paper;
/// Triangular tiling layout and orientation assignment
pub mod tiling;

pub use tiling::{Orientation, Tiling};
