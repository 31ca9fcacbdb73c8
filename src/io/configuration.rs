//! Puzzle constants and runtime configuration defaults

// Border number range; six values across six edges makes every generated
// tile a permutation of the range
/// Smallest valid border number
pub const BORDER_MIN: u8 = 1;
/// Largest valid border number
pub const BORDER_MAX: u8 = 6;

// Safety bound for the rotation-uniqueness retry loop
/// Maximum redraws for a single tile before generation gives up
pub const MAX_TILE_REGENERATIONS: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default seconds each animation frame stays on screen
pub const DEFAULT_FRAME_TIME: f64 = 1.0;

/// Largest accepted frame time in seconds
pub const MAX_FRAME_TIME: f64 = 5.0;

// Progress display settings
/// Spinner refresh interval in milliseconds
pub const SPINNER_TICK_MS: u64 = 80;
