//! Column-oriented, string-formatted view of a benchmark table.

use serde::Serialize;

use crate::result::BenchmarkTable;

/// A benchmark table rendered to display strings, keyed by column name.
///
/// This is the structure handed to presentation layers: one `Vec<String>`
/// per column, all the same length, rows in increasing size order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormattedTable {
    /// Input size as integer text.
    pub size: Vec<String>,
    /// Measured microseconds, two decimal places.
    pub calculated_time: Vec<String>,
    /// Cost estimate, two decimal places.
    pub estimated_time: Vec<String>,
    /// Operation count, two decimal places.
    pub memory: Vec<String>,
}

impl FormattedTable {
    /// Column names in display order.
    pub const COLUMNS: [&'static str; 4] = ["size", "calculated_time", "estimated_time", "memory"];

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.size.len()
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Returns a column by name.
    pub fn column(&self, name: &str) -> Option<&[String]> {
        match name {
            "size" => Some(&self.size),
            "calculated_time" => Some(&self.calculated_time),
            "estimated_time" => Some(&self.estimated_time),
            "memory" => Some(&self.memory),
            _ => None,
        }
    }

    /// Returns row `index` in [`COLUMNS`](Self::COLUMNS) order.
    pub fn row(&self, index: usize) -> Option<[&str; 4]> {
        Some([
            self.size.get(index)?.as_str(),
            self.calculated_time.get(index)?.as_str(),
            self.estimated_time.get(index)?.as_str(),
            self.memory.get(index)?.as_str(),
        ])
    }

    /// Iterates rows in size order.
    pub fn rows(&self) -> impl Iterator<Item = [&str; 4]> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }

    /// Serializes the columns as a JSON object.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Converts numeric tables into [`FormattedTable`]s.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::{BenchmarkTable, ReportFormatter, TrialRecord};
/// use sortbench_core::AlgorithmKind;
///
/// let table = BenchmarkTable::from_records(
///     AlgorithmKind::Bubble,
///     [TrialRecord { size: 3, measured_time_micros: 1.005, estimated_cost: 9.0, operation_count: 4.5 }],
/// );
///
/// let formatted = ReportFormatter::format(&table);
/// assert_eq!(formatted.size, vec!["3"]);
/// assert_eq!(formatted.estimated_time, vec!["9.00"]);
/// assert_eq!(formatted.memory, vec!["4.50"]);
/// ```
pub struct ReportFormatter;

impl ReportFormatter {
    /// Formats every row of `table`.
    pub fn format(table: &BenchmarkTable) -> FormattedTable {
        FormattedTable {
            size: table.sizes().iter().map(|s| s.to_string()).collect(),
            calculated_time: fixed2(table.measured_time_micros()),
            estimated_time: fixed2(table.estimated_costs()),
            memory: fixed2(table.operation_counts()),
        }
    }
}

fn fixed2(values: &[f64]) -> Vec<String> {
    values.iter().map(|v| format!("{:.2}", v)).collect()
}
