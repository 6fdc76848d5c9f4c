//! Immutable parameter state with clamped transitions
//!
//! Transitions never mutate in place: each one takes the current value and
//! returns a new one, so a render pass always sees a consistent snapshot.
//! All numeric inputs the generators consume are pre-clamped here, which is
//! why the generators themselves have no failure modes.

use crate::io::configuration::{
    CHANCE_MAX, CHANCE_MIN, CHANCE_STEP, DEFAULT_BACKGROUND, DEFAULT_CHANCE, DEFAULT_DIMENSION,
    DEFAULT_FORWARD, DEFAULT_REVERSE, DEFAULT_VIEWPORT, DIMENSION_MAX, DIMENSION_MIN,
    FRAMED_VIEWPORT_MIN, FRAME_PADDING, PAPER_OPACITY,
};

/// Canvas dimensions and the symmetric padding around the drawable area
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasSpec {
    /// Full canvas width in pixels
    pub width: f64,
    /// Full canvas height in pixels
    pub height: f64,
    /// Symmetric padding subtracted from all four sides
    pub padding: f64,
}

impl CanvasSpec {
    /// Width of the drawable area (never negative)
    pub fn drawable_width(&self) -> f64 {
        (2.0 * self.padding).mul_add(-1.0, self.width).max(0.0)
    }

    /// Height of the drawable area (never negative)
    pub fn drawable_height(&self) -> f64 {
        (2.0 * self.padding).mul_add(-1.0, self.height).max(0.0)
    }
}

/// Tile count and orientation-flip probability
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TilingParams {
    /// Tile rows per drawable height, clamped to [2, 30] by the transitions
    pub dimension: u32,
    /// Percent chance that a tile is Reverse oriented, in [0, 100]
    pub flip_chance: f64,
}

/// Paper texture parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaperParams {
    /// Texture opacity in [0, 1]; 0 is the "off" sentinel
    pub opacity: f64,
}

impl PaperParams {
    /// Whether the texture is disabled
    pub fn is_off(&self) -> bool {
        self.opacity <= 0.0
    }
}

/// An opaque sRGB color value
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Construct a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uniform gray at a brightness percent in [0, 100]
    pub fn gray_from_percent(percent: f64) -> Self {
        let level = (255.0 * percent / 100.0).round().clamp(0.0, 255.0) as u8;
        Self::new(level, level, level)
    }

    /// Parse a `#rrggbb` string (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return None;
        }
        let channel = |range| {
            digits
                .get(range)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        };
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Format as a `#rrggbb` string
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// The three user-pickable colors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Background rectangle fill
    pub background: Rgb,
    /// Fill for Forward-oriented triangles
    pub forward: Rgb,
    /// Fill for Reverse-oriented triangles
    pub reverse: Rgb,
}

/// Complete parameter state consumed by the generators and the render surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    /// Canvas size and padding
    pub canvas: CanvasSpec,
    /// Tiling dimension and flip chance
    pub tiling: TilingParams,
    /// Paper texture opacity
    pub paper: PaperParams,
    /// Current colors
    pub palette: Palette,
    /// Whether periodic regeneration is active
    pub running: bool,
    /// Whether the embedding UI shows its color pickers
    pub pickers_visible: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            canvas: CanvasSpec {
                width: DEFAULT_VIEWPORT,
                height: DEFAULT_VIEWPORT,
                padding: FRAME_PADDING,
            },
            tiling: TilingParams {
                dimension: DEFAULT_DIMENSION,
                flip_chance: DEFAULT_CHANCE,
            },
            paper: PaperParams { opacity: 0.0 },
            palette: Palette {
                background: DEFAULT_BACKGROUND,
                forward: DEFAULT_FORWARD,
                reverse: DEFAULT_REVERSE,
            },
            running: false,
            pickers_visible: true,
        }
    }
}

/// Which palette entry a color pick targets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorTarget {
    /// The background rectangle
    Background,
    /// Forward-oriented triangle fill
    Forward,
    /// Reverse-oriented triangle fill
    Reverse,
}

impl Settings {
    /// Grow the tile dimension by one, clamped to the upper bound
    #[must_use]
    pub fn increment_dimension(mut self) -> Self {
        self.tiling.dimension = (self.tiling.dimension + 1).min(DIMENSION_MAX);
        self
    }

    /// Shrink the tile dimension by one, clamped to the lower bound
    #[must_use]
    pub fn decrement_dimension(mut self) -> Self {
        self.tiling.dimension = self.tiling.dimension.saturating_sub(1).max(DIMENSION_MIN);
        self
    }

    /// Step the flip chance up by 5 percent, clamped to [10, 90]
    #[must_use]
    pub fn increase_chance(mut self) -> Self {
        self.tiling.flip_chance = (self.tiling.flip_chance + CHANCE_STEP).clamp(CHANCE_MIN, CHANCE_MAX);
        self
    }

    /// Step the flip chance down by 5 percent, clamped to [10, 90]
    #[must_use]
    pub fn decrease_chance(mut self) -> Self {
        self.tiling.flip_chance = (self.tiling.flip_chance - CHANCE_STEP).clamp(CHANCE_MIN, CHANCE_MAX);
        self
    }

    /// Flip the paper texture between off and its fixed on opacity
    #[must_use]
    pub fn toggle_paper(mut self) -> Self {
        self.paper.opacity = if self.paper.is_off() { PAPER_OPACITY } else { 0.0 };
        self
    }

    /// Flip the animation running flag
    ///
    /// The embedding layer owns the ticker; it starts or cancels one in
    /// response to this flag changing.
    #[must_use]
    pub const fn toggle_run(mut self) -> Self {
        self.running = !self.running;
        self
    }

    /// Flip color-picker visibility
    #[must_use]
    pub const fn toggle_pickers(mut self) -> Self {
        self.pickers_visible = !self.pickers_visible;
        self
    }

    /// Replace one palette entry
    #[must_use]
    pub const fn set_color(mut self, target: ColorTarget, color: Rgb) -> Self {
        match target {
            ColorTarget::Background => self.palette.background = color,
            ColorTarget::Forward => self.palette.forward = color,
            ColorTarget::Reverse => self.palette.reverse = color,
        }
        self
    }

    /// Recompute the canvas for a viewport size
    ///
    /// The canvas is square on the viewport's minimum dimension. Viewports of
    /// at least 500 pixels get the fixed frame padding; smaller ones render
    /// full bleed.
    #[must_use]
    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        let side = width.min(height);
        self.canvas = CanvasSpec {
            width: side,
            height: side,
            padding: if side >= FRAMED_VIEWPORT_MIN {
                FRAME_PADDING
            } else {
                0.0
            },
        };
        self
    }
}
