//! Rendering tables to the terminal or to files.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use owo_colors::OwoColorize;
use sortbench_benchmark::{
    BenchmarkTable, CsvExporter, FormattedTable, JsonExporter, MarkdownReport, ReportFormatter,
};

/// Output format of a sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns
    #[default]
    Table,
    Csv,
    Markdown,
    Json,
}

/// Renders `table` in `format`.
///
/// `color` only affects [`OutputFormat::Table`].
pub fn render(table: &BenchmarkTable, format: OutputFormat, color: bool) -> Result<String> {
    Ok(match format {
        OutputFormat::Table => plain_table(&ReportFormatter::format(table), color),
        OutputFormat::Csv => CsvExporter::to_string(table),
        OutputFormat::Markdown => MarkdownReport::to_string(table),
        OutputFormat::Json => JsonExporter::to_string(table)?,
    })
}

/// Writes `text` to `path`, or to stdout without one.
pub fn emit(text: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn plain_table(formatted: &FormattedTable, color: bool) -> String {
    let headers = ["Size", "Time (µs)", "Estimated", "Operations"];
    let mut widths = headers.map(|h| h.chars().count());
    for row in formatted.rows() {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut output = String::new();
    let header = headers
        .iter()
        .zip(widths)
        .map(|(h, w)| format!("{:>w$}", h, w = w))
        .collect::<Vec<_>>()
        .join("  ");
    if color {
        output.push_str(&header.bold().to_string());
    } else {
        output.push_str(&header);
    }
    output.push('\n');

    let rule: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    output.push_str(&"─".repeat(rule));
    output.push('\n');

    for row in formatted.rows() {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, w)| format!("{:>w$}", cell, w = w))
            .collect::<Vec<_>>()
            .join("  ");
        output.push_str(&line);
        output.push('\n');
    }

    output
}
