//! Benchmark error type.

use sortbench_config::ConfigError;
use sortbench_core::SortBenchError;
use thiserror::Error;

/// Errors that abort a benchmark run or an export.
///
/// Every error is fatal to the sweep in progress; trials are never retried
/// and no partial table is returned.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Sort(#[from] SortBenchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Benchmark worker panicked")]
    WorkerPanicked,
}
