//! Command-line interface for rendering tiling patterns to SVG files

use crate::io::configuration::{
    CHANCE_MAX, CHANCE_MIN, DEFAULT_CHANCE, DEFAULT_DIMENSION, DEFAULT_VIEWPORT, DIMENSION_MAX,
    DIMENSION_MIN, OUTPUT_BASE_NAME, PAPER_OPACITY,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::svg::{export_svg, render_document};
use crate::pattern::paper::generate_paper;
use crate::pattern::tiling::generate_tiling;
use crate::state::settings::{Rgb, Settings};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{SeedableRng, rngs::StdRng};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "trill")]
#[command(
    author,
    version,
    about = "Generate triangular tiling patterns as SVG documents"
)]
/// Command-line arguments for the pattern generation tool
pub struct Cli {
    /// Output SVG file (frame numbers are appended for multi-frame runs)
    #[arg(short, long, default_value = "trill.svg")]
    pub output: PathBuf,

    /// Viewport width in pixels; the canvas is square on the smaller side
    #[arg(long, default_value_t = DEFAULT_VIEWPORT)]
    pub width: f64,

    /// Viewport height in pixels
    #[arg(long, default_value_t = DEFAULT_VIEWPORT)]
    pub height: f64,

    /// Pattern density: tile rows per drawable height
    #[arg(short, long, default_value_t = DEFAULT_DIMENSION)]
    pub dimension: u32,

    /// Percent chance that a tile is reverse oriented
    #[arg(short, long, default_value_t = DEFAULT_CHANCE)]
    pub chance: f64,

    /// Overlay the paper grain texture
    #[arg(short, long)]
    pub paper: bool,

    /// Background color as #rrggbb
    #[arg(long, default_value = "#f5f5f5")]
    pub background: String,

    /// Forward triangle fill as #rrggbb
    #[arg(long, default_value = "#000000")]
    pub forward: String,

    /// Reverse triangle fill as #rrggbb
    #[arg(long, default_value = "#7e7b8a")]
    pub reverse: String,

    /// Random seed for reproducible output (OS entropy when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of frames to export; each frame is a fresh regeneration
    #[arg(short, long, default_value_t = 1)]
    pub frames: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && self.frames > 1
    }
}

/// Orchestrates frame export with parameter validation and progress tracking
pub struct FrameProcessor {
    cli: Cli,
    progress: Option<ProgressBar>,
}

impl FrameProcessor {
    /// Create a new frame processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self {
            cli,
            progress: None,
        }
    }

    /// Validate parameters and export all requested frames
    ///
    /// # Errors
    ///
    /// Returns an error if a parameter is out of range, a color fails to
    /// parse, or a frame cannot be written.
    pub fn process(&mut self) -> Result<()> {
        let settings = self.build_settings()?;

        let mut rng = match self.cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        if self.cli.should_show_progress() {
            let bar = ProgressBar::new(self.cli.frames as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] Frames: [{bar:40.cyan/blue}] {pos}/{len}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            self.progress = Some(bar);
        }

        for frame in 0..self.cli.frames {
            let tiling = generate_tiling(&settings.canvas, &settings.tiling, &mut rng);
            let paper = generate_paper(&settings.canvas, settings.paper.opacity, &mut rng);
            let document = render_document(&settings, &tiling, &paper);
            export_svg(&document, &self.frame_path(frame))?;

            if let Some(ref bar) = self.progress {
                bar.inc(1);
            }
        }

        if let Some(ref bar) = self.progress {
            bar.finish();
        }

        Ok(())
    }

    fn build_settings(&self) -> Result<Settings> {
        if self.cli.dimension < DIMENSION_MIN || self.cli.dimension > DIMENSION_MAX {
            return Err(invalid_parameter(
                "dimension",
                &self.cli.dimension,
                &format!("must be between {DIMENSION_MIN} and {DIMENSION_MAX}"),
            ));
        }

        if !(0.0..=100.0).contains(&self.cli.chance) {
            return Err(invalid_parameter(
                "chance",
                &self.cli.chance,
                &format!(
                    "must be a percentage between 0 and 100 (steps clamp to [{CHANCE_MIN}, {CHANCE_MAX}])"
                ),
            ));
        }

        if self.cli.frames == 0 {
            return Err(invalid_parameter(
                "frames",
                &self.cli.frames,
                &"at least one frame must be exported",
            ));
        }

        let mut settings = Settings::default().with_viewport(self.cli.width, self.cli.height);
        settings.tiling.dimension = self.cli.dimension;
        settings.tiling.flip_chance = self.cli.chance;
        settings.paper.opacity = if self.cli.paper { PAPER_OPACITY } else { 0.0 };
        settings.palette.background = Self::parse_color("background", &self.cli.background)?;
        settings.palette.forward = Self::parse_color("forward", &self.cli.forward)?;
        settings.palette.reverse = Self::parse_color("reverse", &self.cli.reverse)?;

        Ok(settings)
    }

    fn parse_color(parameter: &'static str, value: &str) -> Result<Rgb> {
        Rgb::from_hex(value)
            .ok_or_else(|| invalid_parameter(parameter, &value, &"expected a #rrggbb color"))
    }

    fn frame_path(&self, frame: usize) -> PathBuf {
        if self.cli.frames == 1 {
            return self.cli.output.clone();
        }

        let stem = self
            .cli
            .output
            .file_stem()
            .map_or_else(|| OUTPUT_BASE_NAME.to_string(), |s| s.to_string_lossy().into_owned());
        let frame_name = format!("{stem}_{frame:03}.svg");

        self.cli
            .output
            .parent()
            .map_or_else(|| PathBuf::from(&frame_name), |parent| parent.join(&frame_name))
    }
}
