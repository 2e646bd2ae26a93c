//! Benchmark result types.

use serde::Serialize;
use sortbench_core::AlgorithmKind;

/// Reduced measurements for one size point of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrialRecord {
    /// Input size.
    pub size: usize,
    /// Mean measured time in microseconds.
    pub measured_time_micros: f64,
    /// Analytical cost estimate for `size`.
    pub estimated_cost: f64,
    /// Mean operation count.
    pub operation_count: f64,
}

/// Column-major table of trial records, one row per size in increasing order.
///
/// Produced once per benchmarking request and immutable afterwards; only
/// the aggregator appends rows.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::{BenchmarkTable, TrialRecord};
/// use sortbench_core::AlgorithmKind;
///
/// let table = BenchmarkTable::from_records(
///     AlgorithmKind::Bubble,
///     [
///         TrialRecord { size: 1, measured_time_micros: 0.5, estimated_cost: 1.0, operation_count: 0.0 },
///         TrialRecord { size: 2, measured_time_micros: 0.7, estimated_cost: 4.0, operation_count: 1.5 },
///     ],
/// );
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.sizes(), &[1, 2]);
/// assert_eq!(table.record(1).unwrap().operation_count, 1.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkTable {
    algorithm: AlgorithmKind,
    size: Vec<usize>,
    measured_time_micros: Vec<f64>,
    estimated_cost: Vec<f64>,
    operation_count: Vec<f64>,
}

impl BenchmarkTable {
    pub(crate) fn new(algorithm: AlgorithmKind) -> Self {
        Self {
            algorithm,
            size: Vec::new(),
            measured_time_micros: Vec::new(),
            estimated_cost: Vec::new(),
            operation_count: Vec::new(),
        }
    }

    /// Builds a table from records, kept in the given order.
    pub fn from_records(
        algorithm: AlgorithmKind,
        records: impl IntoIterator<Item = TrialRecord>,
    ) -> Self {
        let mut table = Self::new(algorithm);
        for record in records {
            table.push(record);
        }
        table
    }

    pub(crate) fn push(&mut self, record: TrialRecord) {
        self.size.push(record.size);
        self.measured_time_micros.push(record.measured_time_micros);
        self.estimated_cost.push(record.estimated_cost);
        self.operation_count.push(record.operation_count);
    }

    /// Returns the benchmarked algorithm.
    pub fn algorithm(&self) -> AlgorithmKind {
        self.algorithm
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.size.len()
    }

    /// Returns true if the sweep produced no rows.
    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    pub fn sizes(&self) -> &[usize] {
        &self.size
    }

    pub fn measured_time_micros(&self) -> &[f64] {
        &self.measured_time_micros
    }

    pub fn estimated_costs(&self) -> &[f64] {
        &self.estimated_cost
    }

    pub fn operation_counts(&self) -> &[f64] {
        &self.operation_count
    }

    /// Returns row `index` as a record.
    pub fn record(&self, index: usize) -> Option<TrialRecord> {
        Some(TrialRecord {
            size: *self.size.get(index)?,
            measured_time_micros: self.measured_time_micros[index],
            estimated_cost: self.estimated_cost[index],
            operation_count: self.operation_count[index],
        })
    }

    /// Iterates rows in size order.
    pub fn records(&self) -> impl Iterator<Item = TrialRecord> + '_ {
        (0..self.len()).filter_map(move |i| self.record(i))
    }

    /// Sum of the measured times, in microseconds.
    pub fn total_time_micros(&self) -> f64 {
        self.measured_time_micros.iter().sum()
    }

    /// Returns the last (largest size) row.
    pub fn last(&self) -> Option<TrialRecord> {
        self.len().checked_sub(1).and_then(|i| self.record(i))
    }
}
