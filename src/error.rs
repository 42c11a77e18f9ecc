//! Error type shared by every constructor and runner in the crate.
//!
//! All variants describe precondition violations detected before any search
//! work starts. Nothing in the steady-state loop of the engine produces an
//! error once construction succeeded.

/// Errors raised when a score bound, configuration, or run setup is invalid.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(
        "score bounds out of order: expected {lower_critical} <= {lower_optimal} <= \
         {upper_optimal} <= {upper_critical}"
    )]
    UnorderedBounds {
        lower_critical: f64,
        lower_optimal: f64,
        upper_optimal: f64,
        upper_critical: f64,
    },
    #[error("score weight must be finite and non-negative, got {0}")]
    InvalidWeight(f64),
    #[error("raw score must lie in [0, 1], got {0}")]
    InvalidRawScore(f64),
    #[error("island count must be at least 1")]
    NoIslands,
    #[error("population size must be at least {min}, got {actual}")]
    PopulationTooSmall { min: usize, actual: usize },
    #[error("maximum genome length must be at least 1")]
    EmptyGenome,
    #[error("mutation rate must lie in [0, 1], got {0}")]
    InvalidMutationRate(f64),
    #[error("generation count must be at least 1")]
    NoGenerations,
    #[error("max_size ({max_size}) must not be smaller than start_size ({start_size})")]
    SizeInversion { start_size: usize, max_size: usize },
    #[error("time limit must be positive or None")]
    ZeroTimeLimit,
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
