/// Command-line interface and the generate-until-solvable driver
pub mod cli;
/// Puzzle constants and runtime configuration defaults
pub mod configuration;
/// Error types for puzzle construction, generation, and the CLI
pub mod error;
/// Attempt progress display
pub mod progress;
/// Board encoding and ASCII rendering
pub mod render;
