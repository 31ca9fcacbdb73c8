//! Backtracking solver and generator for the seven-tile hexagon edge-matching puzzle
//!
//! Seven hexagonal tiles, each carrying six border numbers, must be arranged
//! into a center slot and six surrounding slots so that every pair of
//! touching edges carries equal numbers. The crate generates random tile
//! sets guaranteed free of rotation-equivalent duplicates and searches them
//! with an aggressively pruned backtracking solver.

#![forbid(unsafe_code)]

/// Constraint tables, backtracking solver, and tile-set generation
pub mod algorithm;
/// Input/output: CLI driver, configuration, errors, progress, and rendering
pub mod io;
/// Board geometry and tile primitives
pub mod spatial;

pub use io::error::{PuzzleError, Result};
