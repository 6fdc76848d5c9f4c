//! CLI entry point for the triangular tiling pattern generator

use clap::Parser;
use trill::io::cli::{Cli, FrameProcessor};

fn main() -> trill::Result<()> {
    let cli = Cli::parse();
    let mut processor = FrameProcessor::new(cli);
    processor.process()
}
