//! CLI entry point for the hexagon edge-matching puzzle solver

use clap::Parser;
use hexmatch::io::cli::{Cli, PuzzleRunner};

fn main() -> hexmatch::Result<()> {
    let cli = Cli::parse();
    let mut runner = PuzzleRunner::new(cli);
    runner.run()
}
