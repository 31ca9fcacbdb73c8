//! Command-line interface and the generate-until-solvable driver

use crate::algorithm::generator::generate;
use crate::algorithm::solver::{solve, solve_traced};
use crate::io::configuration::{DEFAULT_FRAME_TIME, DEFAULT_SEED, MAX_FRAME_TIME};
use crate::io::error::{Result, invalid_parameter};
use crate::io::progress::AttemptTracker;
use crate::io::render;
use crate::spatial::board::Arrangement;
use crate::spatial::tile::TileSet;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "hexmatch")]
#[command(
    author,
    version,
    about = "Solve randomly generated hexagon edge-matching puzzles"
)]
/// Command-line arguments for the puzzle driver
pub struct Cli {
    /// Seconds each animation frame stays on screen (0 to 5)
    #[arg(value_name = "FRAME_TIME", default_value_t = DEFAULT_FRAME_TIME)]
    pub frame_time: f64,

    /// Random seed for reproducible puzzle generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Replay the winning search frame by frame
    #[arg(short, long)]
    pub animate: bool,

    /// Suppress attempt progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if attempt progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validated frame hold duration
    ///
    /// # Errors
    ///
    /// Returns an invalid parameter error when the frame time is negative,
    /// non-finite, or longer than the accepted maximum.
    pub fn frame_duration(&self) -> Result<Duration> {
        if !self.frame_time.is_finite() || !(0.0..=MAX_FRAME_TIME).contains(&self.frame_time) {
            return Err(invalid_parameter(
                "frame_time",
                &self.frame_time,
                &format!("must be between 0 and {MAX_FRAME_TIME} seconds"),
            ));
        }
        Ok(Duration::from_secs_f64(self.frame_time))
    }
}

/// Drives the puzzle run: generate sets until one solves, then report
pub struct PuzzleRunner {
    cli: Cli,
    tracker: Option<AttemptTracker>,
}

impl PuzzleRunner {
    /// Create a runner from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let tracker = cli.should_show_progress().then(AttemptTracker::new);
        Self { cli, tracker }
    }

    /// Generate tile sets until one admits a valid arrangement, then print
    /// the result (optionally replaying the search as an animation first)
    ///
    /// # Errors
    ///
    /// Returns an error for an out-of-range frame time or if tile generation
    /// exhausts its retry budget.
    pub fn run(&mut self) -> Result<()> {
        let frame_hold = self.cli.frame_duration()?;
        let mut rng = StdRng::seed_from_u64(self.cli.seed);

        let mut attempts: u64 = 0;
        let (tiles, arrangement) = loop {
            attempts += 1;
            if let Some(tracker) = &self.tracker {
                tracker.record_attempt(attempts);
            }

            let candidate = generate(&mut rng)?;
            if let Some(found) = solve(&candidate) {
                break (candidate, found);
            }
        };

        if let Some(tracker) = &self.tracker {
            tracker.finish();
        }

        if self.cli.animate {
            // Re-solving the same set replays the exact search that succeeded
            let replayed = solve_traced(&tiles, |board| render::show_frame(board, frame_hold));
            debug_assert!(replayed.is_some());
        }

        print_summary(attempts, &tiles, &arrangement);
        Ok(())
    }
}

// Result reporting is the program's user-facing output
#[allow(clippy::print_stdout)]
fn print_summary(attempts: u64, tiles: &TileSet, arrangement: &Arrangement) {
    println!("Went through {attempts} candidate tile sets; set {attempts} is solvable:");
    println!();

    for (id, tile) in tiles.tiles().iter().enumerate() {
        let borders: Vec<String> = tile.borders().iter().map(ToString::to_string).collect();
        println!("  tile {id}: {}", borders.join(" "));
    }
    println!();

    for (slot, placed) in arrangement.placements() {
        println!(
            "  {:<9} tile {} rotated {}",
            slot.label(),
            placed.tile,
            placed.rotation
        );
    }
    println!();

    println!("{}", render::render_arrangement(arrangement));
    println!("encoded: {}", render::encode(arrangement));
}
