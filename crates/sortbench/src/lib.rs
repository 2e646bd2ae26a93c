//! sortbench - Sorting Algorithm Benchmarks in Rust
//!
//! Sweep a sorting algorithm over growing random inputs and compare the
//! measured time and operation counts with its analytical cost model.
//!
//! # Example
//!
//! ```rust
//! use sortbench::prelude::*;
//!
//! let config = RunConfig::new()
//!     .with_algorithm(AlgorithmKind::Insertion)
//!     .with_max_size(20)
//!     .with_repetitions(3);
//!
//! let table = run_benchmark(&config).unwrap();
//! assert_eq!(table.len(), 19);
//!
//! let mut data = vec![4, 2, 9];
//! let operations = QuickSort.sort(&mut data).unwrap();
//! assert_eq!(data, vec![2, 4, 9]);
//! assert!(operations > 0);
//! ```

// Element model and identifiers
pub use sortbench_core::{
    sample_shelf, AlgorithmKind, Book, BucketKey, Result, SortBenchError, SortElement,
};

// Strategies
pub use sortbench_algorithms::{
    BubbleSort, BucketSort, CostModel, InsertionSort, QuickSort, SelectionSort, SortStrategy,
    Strategy,
};

// Configuration
pub use sortbench_config::{ConfigError, RunConfig};

// Engine
pub use sortbench_benchmark::{
    measure, run_benchmark, BenchmarkError, BenchmarkJob, BenchmarkTable, BookPreview,
    CsvExporter, FormattedTable, JsonExporter, MarkdownReport, RandomArrayGenerator,
    ReportFormatter, SortPreview, TrialAggregator, TrialRecord,
};

/// Console logging, with the `console` feature.
#[cfg(feature = "console")]
pub use sortbench_console as console;

pub mod prelude {
    pub use super::{AlgorithmKind, Book, BucketKey, SortElement};
    pub use super::{
        BubbleSort, BucketSort, InsertionSort, QuickSort, SelectionSort, SortStrategy, Strategy,
    };
    pub use super::RunConfig;
    pub use super::{run_benchmark, BenchmarkTable, ReportFormatter, TrialAggregator};
}
