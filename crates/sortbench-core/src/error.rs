//! Error types for sortbench

use thiserror::Error;

/// Main error type for sortbench operations
#[derive(Debug, Error)]
pub enum SortBenchError {
    /// Run configuration rejected before a sweep starts
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input a strategy cannot process (e.g. a bucket scaling factor of zero)
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Algorithm id that does not name any strategy
    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Result type alias for sortbench operations
pub type Result<T> = std::result::Result<T, SortBenchError>;
