//! Parameter state and the surfaces that drive it
//!
//! This module contains state-related functionality including:
//! - The immutable settings value and its clamped transitions
//! - Mapping of abstract input events to transitions and render effects
//! - The cancellable ticker behind animated regeneration

/// Cancellable repeating ticker for animated regeneration
pub mod animation;
/// Abstract input events and their mapping onto settings transitions
pub mod input;
/// Canvas, tiling, paper, and palette parameters with clamped transitions
pub mod settings;

pub use settings::Settings;
