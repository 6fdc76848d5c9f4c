//! Abstract input events and their effect on the parameter state
//!
//! The embedding UI layer (keyboard handler, gesture recognizer, resize
//! observer, color pickers) is an external collaborator; this module models
//! only the effect each of its events has. `apply` is pure: it returns the
//! next settings value plus the render effect the host should perform.

use crate::state::settings::{ColorTarget, Rgb, Settings};

/// Semantic keyboard actions the embedding layer can report
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// Toggle color-picker visibility
    TogglePickers,
    /// Export the current document to a file
    Save,
    /// Force a fresh regeneration with unchanged parameters
    Refresh,
    /// Toggle the paper grain overlay
    TogglePaper,
    /// Toggle periodic regeneration
    ToggleAnimation,
    /// Grow the tile dimension
    ArrowUp,
    /// Shrink the tile dimension
    ArrowDown,
    /// Step the flip chance down
    ArrowLeft,
    /// Step the flip chance up
    ArrowRight,
}

/// Swipe gesture directions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Swipe up: grow the tile dimension
    Up,
    /// Swipe down: shrink the tile dimension
    Down,
    /// Swipe left: step the flip chance down
    Left,
    /// Swipe right: step the flip chance up
    Right,
}

/// Pinch gesture directions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PinchDirection {
    /// Pinch in: grow the tile dimension
    In,
    /// Pinch out: shrink the tile dimension
    Out,
}

/// A discrete input event consumed by the parameter state
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A semantic keyboard action
    Key(Key),
    /// A swipe gesture
    Swipe(SwipeDirection),
    /// A pinch gesture
    Pinch(PinchDirection),
    /// The viewport changed size
    Resize {
        /// New viewport width in pixels
        width: f64,
        /// New viewport height in pixels
        height: f64,
    },
    /// A color picker committed a new color
    PickColor {
        /// Which palette entry changed
        target: ColorTarget,
        /// The picked color
        color: Rgb,
    },
}

/// What the host must do after applying an event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to redraw; state bookkeeping only
    None,
    /// Redraw with existing geometry (palette or chrome changed)
    Redraw,
    /// Regenerate triangles and paper, then redraw
    Regenerate,
    /// Serialize the current document to a file
    Export,
}

/// Apply one input event, producing the next settings and a render effect
pub fn apply(settings: Settings, event: InputEvent) -> (Settings, Effect) {
    match event {
        InputEvent::Key(Key::TogglePickers) => (settings.toggle_pickers(), Effect::Redraw),
        InputEvent::Key(Key::Save) => (settings, Effect::Export),
        InputEvent::Key(Key::Refresh) => (settings, Effect::Regenerate),
        InputEvent::Key(Key::TogglePaper) => (settings.toggle_paper(), Effect::Regenerate),
        InputEvent::Key(Key::ToggleAnimation) => (settings.toggle_run(), Effect::None),
        InputEvent::Key(Key::ArrowUp) | InputEvent::Swipe(SwipeDirection::Up) => {
            (settings.increment_dimension(), Effect::Regenerate)
        }
        InputEvent::Key(Key::ArrowDown) | InputEvent::Swipe(SwipeDirection::Down) => {
            (settings.decrement_dimension(), Effect::Regenerate)
        }
        InputEvent::Key(Key::ArrowRight) | InputEvent::Swipe(SwipeDirection::Right) => {
            (settings.increase_chance(), Effect::Regenerate)
        }
        InputEvent::Key(Key::ArrowLeft) | InputEvent::Swipe(SwipeDirection::Left) => {
            (settings.decrease_chance(), Effect::Regenerate)
        }
        InputEvent::Pinch(PinchDirection::In) => {
            (settings.increment_dimension(), Effect::Regenerate)
        }
        InputEvent::Pinch(PinchDirection::Out) => {
            (settings.decrement_dimension(), Effect::Regenerate)
        }
        InputEvent::Resize { width, height } => {
            (settings.with_viewport(width, height), Effect::Regenerate)
        }
        InputEvent::PickColor { target, color } => {
            (settings.set_color(target, color), Effect::Redraw)
        }
    }
}
