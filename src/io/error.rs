//! Error types for puzzle construction, generation, and the CLI

use std::fmt;

/// Main error type for all puzzle operations
///
/// An unsolvable tile set is not an error: the solver reports that outcome
/// through its return value. Errors cover violated preconditions (malformed
/// tile sets), exhausted generation retries, and invalid CLI parameters.
#[derive(Debug)]
pub enum PuzzleError {
    /// A tile set was built with the wrong number of tiles
    InvalidTileCount {
        /// Number of tiles a puzzle instance requires
        expected: usize,
        /// Number of tiles actually supplied
        actual: usize,
    },

    /// A tile was built with the wrong number of border values
    InvalidBorderCount {
        /// Number of borders a tile requires
        expected: usize,
        /// Number of borders actually supplied
        actual: usize,
    },

    /// A border number falls outside the valid value range
    BorderOutOfRange {
        /// Edge index carrying the invalid value
        edge: usize,
        /// The invalid border number
        value: u8,
    },

    /// Tile generation could not produce a rotation-unique tile
    ///
    /// Occurs only when the retry cap is exhausted, which requires a border
    /// value range too small for seven distinct rotation classes.
    GenerationExhausted {
        /// Number of redraws attempted for the failing tile
        attempts: usize,
    },

    /// CLI parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTileCount { expected, actual } => {
                write!(f, "Expected {expected} tiles, got {actual}")
            }
            Self::InvalidBorderCount { expected, actual } => {
                write!(f, "Expected {expected} border numbers per tile, got {actual}")
            }
            Self::BorderOutOfRange { edge, value } => {
                write!(f, "Border number {value} on edge {edge} is out of range")
            }
            Self::GenerationExhausted { attempts } => {
                write!(
                    f,
                    "Could not generate a rotation-unique tile within {attempts} attempts"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_formats_context() {
        let err = PuzzleError::InvalidTileCount {
            expected: 7,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Expected 7 tiles, got 3");

        let err = invalid_parameter("frame_time", &9.0, &"must be between 0 and 5 seconds");
        assert!(err.to_string().contains("frame_time"));
        assert!(err.to_string().contains("9"));
    }
}
