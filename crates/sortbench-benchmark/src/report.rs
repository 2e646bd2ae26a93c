//! Report generation for benchmark tables.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use sortbench_algorithms::Strategy;

use crate::error::BenchmarkError;
use crate::format::{FormattedTable, ReportFormatter};
use crate::result::BenchmarkTable;

/// CSV exporter for benchmark tables.
///
/// Writes the formatted columns (`size`, `calculated_time`,
/// `estimated_time`, `memory`) one row per size.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::{BenchmarkTable, CsvExporter, TrialRecord};
/// use sortbench_core::AlgorithmKind;
///
/// let table = BenchmarkTable::from_records(
///     AlgorithmKind::Quick,
///     [TrialRecord { size: 4, measured_time_micros: 0.25, estimated_cost: 12.0, operation_count: 7.0 }],
/// );
///
/// let csv = CsvExporter::to_string(&table);
/// assert_eq!(csv, "size,calculated_time,estimated_time,memory\n4,0.25,12.00,7.00\n");
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports a table to a CSV string.
    pub fn to_string(table: &BenchmarkTable) -> String {
        let formatted = ReportFormatter::format(table);
        let mut output = FormattedTable::COLUMNS.join(",");
        output.push('\n');

        for row in formatted.rows() {
            output.push_str(&row.join(","));
            output.push('\n');
        }

        output
    }

    /// Exports a table to a CSV file.
    pub fn to_file(table: &BenchmarkTable, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(table))
    }

    /// Writes a table as CSV to a writer.
    pub fn write<W: Write>(table: &BenchmarkTable, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(table).as_bytes())
    }
}

/// JSON exporter for the formatted column structure.
pub struct JsonExporter;

impl JsonExporter {
    /// Exports a table as a pretty-printed JSON object of string columns.
    pub fn to_string(table: &BenchmarkTable) -> Result<String, BenchmarkError> {
        Ok(ReportFormatter::format(table).to_json()?)
    }

    pub fn to_file(table: &BenchmarkTable, path: impl AsRef<Path>) -> Result<(), BenchmarkError> {
        fs::write(path, Self::to_string(table)?)?;
        Ok(())
    }

    pub fn write<W: Write>(table: &BenchmarkTable, mut writer: W) -> Result<(), BenchmarkError> {
        writer.write_all(Self::to_string(table)?.as_bytes())?;
        Ok(())
    }
}

/// Markdown report generator.
///
/// Generates a human-readable report with the algorithm's metadata, a short
/// summary and the full results table.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::{BenchmarkTable, MarkdownReport, TrialRecord};
/// use sortbench_core::AlgorithmKind;
///
/// let table = BenchmarkTable::from_records(
///     AlgorithmKind::Selection,
///     [TrialRecord { size: 2, measured_time_micros: 0.5, estimated_cost: 4.0, operation_count: 2.0 }],
/// );
///
/// let md = MarkdownReport::to_string(&table);
/// assert!(md.contains("# Benchmark: Selection sort"));
/// assert!(md.contains("| 2 | 0.50 | 4.00 | 2.00 |"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    pub fn to_string(table: &BenchmarkTable) -> String {
        let kind = table.algorithm();
        let mut output = String::new();

        output.push_str(&format!("# Benchmark: {}\n\n", kind.display_name()));

        output.push_str(&format!("- **Algorithm**: `{}`\n", kind));
        output.push_str(&format!("- **Cost model**: `{}`\n", kind.cost_model()));
        output.push_str(&format!("- **Sizes**: {}\n\n", table.len()));

        output.push_str("## Summary\n\n");
        match table.last() {
            Some(largest) => {
                output.push_str("| Metric | Value |\n");
                output.push_str("|--------|-------|\n");
                output.push_str(&format!(
                    "| Total Time | {:.2} µs |\n",
                    table.total_time_micros()
                ));
                output.push_str(&format!("| Largest Size | {} |\n", largest.size));
                output.push_str(&format!(
                    "| Time at Largest Size | {:.2} µs |\n",
                    largest.measured_time_micros
                ));
                output.push_str(&format!(
                    "| Operations at Largest Size | {:.2} |\n",
                    largest.operation_count
                ));
                output.push_str(&format!(
                    "| Estimate at Largest Size | {:.2} |\n",
                    largest.estimated_cost
                ));
            }
            None => output.push_str("*No sizes benchmarked.*\n"),
        }
        output.push('\n');

        if !table.is_empty() {
            output.push_str("## Results\n\n");
            output.push_str("| Size | Time (µs) | Estimated | Operations |\n");
            output.push_str("|------|-----------|-----------|------------|\n");
            for row in ReportFormatter::format(table).rows() {
                output.push_str(&format!("| {} |\n", row.join(" | ")));
            }
        }

        output
    }

    /// Writes a Markdown report to a file.
    pub fn to_file(table: &BenchmarkTable, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(table))
    }

    /// Writes a Markdown report to a writer.
    pub fn write<W: Write>(table: &BenchmarkTable, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(table).as_bytes())
    }

    /// Generates a comparison table for several sweeps.
    ///
    /// # Example
    ///
    /// ```
    /// use sortbench_benchmark::{BenchmarkTable, MarkdownReport};
    /// use sortbench_core::AlgorithmKind;
    ///
    /// let bubble = BenchmarkTable::from_records(AlgorithmKind::Bubble, Vec::new());
    /// let quick = BenchmarkTable::from_records(AlgorithmKind::Quick, Vec::new());
    ///
    /// let comparison = MarkdownReport::comparison(&[&bubble, &quick]);
    /// assert!(comparison.contains("## Comparison"));
    /// assert!(comparison.contains("| Quick sort | `n*log2(n) + n` | 0 | 0.00 | N/A |"));
    /// ```
    pub fn comparison(tables: &[&BenchmarkTable]) -> String {
        let mut output = String::new();

        output.push_str("## Comparison\n\n");
        output.push_str(
            "| Algorithm | Cost Model | Sizes | Total Time (µs) | Operations at Largest Size |\n",
        );
        output.push_str(
            "|-----------|------------|-------|-----------------|----------------------------|\n",
        );

        for table in tables {
            let kind = table.algorithm();
            let largest_ops = table
                .last()
                .map(|r| format!("{:.2}", r.operation_count))
                .unwrap_or_else(|| "N/A".to_string());

            output.push_str(&format!(
                "| {} | `{}` | {} | {:.2} | {} |\n",
                kind.display_name(),
                kind.cost_model(),
                table.len(),
                table.total_time_micros(),
                largest_ops,
            ));
        }

        output
    }
}
