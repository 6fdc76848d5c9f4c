//! Input/output operations and error handling

/// Command-line interface and frame export orchestration
pub mod cli;
/// Tuning constants and runtime defaults
pub mod configuration;
/// Error types for parameter validation and export
pub mod error;
/// SVG render surface and file export
pub mod svg;
