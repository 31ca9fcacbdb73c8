//! Attempt progress display
//!
//! Most generated tile sets are unsolvable, so a run may discard hundreds of
//! candidates before finding one that works. The tracker keeps a single
//! spinner line up to date with the running attempt count instead of
//! scrolling a line per attempt.

use crate::io::configuration::SPINNER_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Single-line spinner reporting how many tile sets have been tried
pub struct AttemptTracker {
    spinner: ProgressBar,
}

impl Default for AttemptTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl AttemptTracker {
    /// Create a tracker with an active spinner
    pub fn new() -> Self {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(SPINNER_STYLE.clone());
        spinner.enable_steady_tick(Duration::from_millis(SPINNER_TICK_MS));
        Self { spinner }
    }

    /// Report that another generated set is being tested
    pub fn record_attempt(&self, attempts: u64) {
        self.spinner
            .set_message(format!("Testing tile set {attempts} for a valid arrangement"));
    }

    /// Remove the spinner once a solvable set has been found
    pub fn finish(&self) {
        self.spinner.finish_and_clear();
    }
}
