//! Benchmarking engine for sortbench.
//!
//! This crate drives the sorting strategies across a sweep of input sizes,
//! collects timing and operation counts, and turns the results into tables
//! and reports.
//!
//! # Overview
//!
//! - [`RandomArrayGenerator`] draws bounded random inputs
//! - [`measure`] times any counting sort routine with a monotonic clock
//! - [`TrialAggregator`] runs `repetitions` trials per size and reduces
//!   them to one [`TrialRecord`] each, collected into a [`BenchmarkTable`]
//! - [`ReportFormatter`] renders a table into string columns for display
//! - [`CsvExporter`], [`MarkdownReport`] and [`JsonExporter`] write reports
//! - [`BenchmarkJob`] runs a sweep on a background thread and streams
//!   progress
//! - [`SortPreview`] and [`BookPreview`] show a single sort before and after
//!
//! # Example
//!
//! ```
//! use sortbench_benchmark::{run_benchmark, ReportFormatter};
//! use sortbench_config::RunConfig;
//! use sortbench_core::AlgorithmKind;
//!
//! let config = RunConfig::new()
//!     .with_bounds(1, 1000)
//!     .with_max_size(10)
//!     .with_repetitions(5)
//!     .with_algorithm(AlgorithmKind::Selection);
//!
//! let table = run_benchmark(&config).unwrap();
//! let formatted = ReportFormatter::format(&table);
//!
//! assert_eq!(formatted.size.len(), 9);
//! assert_eq!(formatted.estimated_time[1], "4.00");
//! assert_eq!(formatted.memory[1], "2.00");
//! ```

mod aggregator;
mod error;
mod format;
mod generator;
mod job;
mod preview;
mod report;
mod result;
mod timing;

pub use aggregator::{run_benchmark, TrialAggregator};
pub use error::BenchmarkError;
pub use format::{FormattedTable, ReportFormatter};
pub use generator::RandomArrayGenerator;
pub use job::BenchmarkJob;
pub use preview::{BookColumns, BookPreview, SortPreview, ValueColumn};
pub use report::{CsvExporter, JsonExporter, MarkdownReport};
pub use result::{BenchmarkTable, TrialRecord};
pub use timing::{measure, measure_sort, Measurement};
