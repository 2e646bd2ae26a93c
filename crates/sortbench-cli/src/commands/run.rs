//! Run command - benchmark one algorithm over a size sweep
//!
//! Usage:
//! ```bash
//! sortbench run --algorithm selection-sort --max-size 10 --repetitions 5
//! sortbench run --config bench.toml --format markdown --output report.md
//! ```

use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;
use sortbench_benchmark::{run_benchmark, BenchmarkJob, BenchmarkTable};
use sortbench_config::RunConfig;
use sortbench_core::AlgorithmKind;

use super::SweepArgs;
use crate::output::{self, OutputFormat};

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Algorithm to benchmark (defaults to the config file's, then bucket-sort)
    #[arg(short, long)]
    pub algorithm: Option<AlgorithmKind>,

    #[command(flatten)]
    pub sweep: SweepArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show progress while the sweep runs
    #[arg(long)]
    pub progress: bool,
}

/// Run the run command
pub fn run(args: RunArgs) -> Result<()> {
    let config = args.sweep.resolve(args.algorithm)?;

    let table = if args.progress {
        run_with_progress(config)?
    } else {
        run_benchmark(&config)?
    };

    let color = args.output.is_none() && io::stdout().is_terminal();
    let text = output::render(&table, args.format, color)?;
    output::emit(&text, args.output.as_deref())?;

    if let Some(path) = &args.output {
        eprintln!(
            "{} Wrote {} sizes to {}",
            "✓".green().bold(),
            table.len(),
            path.display()
        );
    }

    Ok(())
}

fn run_with_progress(config: RunConfig) -> Result<BenchmarkTable> {
    let total = config.sweep_len();
    let mut job = BenchmarkJob::spawn(config)?;

    let mut stderr = io::stderr();
    while let Some(record) = job.blocking_next_record() {
        let _ = write!(
            stderr,
            "\r{} {} size {}/{}",
            "⏳".cyan(),
            job.algorithm(),
            record.size,
            total
        );
        let _ = stderr.flush();
    }
    let _ = writeln!(stderr);

    Ok(job.join()?)
}
