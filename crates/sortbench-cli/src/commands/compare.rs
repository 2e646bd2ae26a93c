//! Compare command - run one sweep per algorithm and compare them
//!
//! Usage:
//! ```bash
//! sortbench compare --max-size 100 --repetitions 5
//! sortbench compare --algorithms bubble,quick --output comparison.md
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use sortbench_benchmark::{run_benchmark, BenchmarkTable, MarkdownReport};
use sortbench_core::AlgorithmKind;

use super::SweepArgs;
use crate::output;

/// Arguments for the compare command
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Algorithms to compare (all when omitted)
    #[arg(long, value_delimiter = ',')]
    pub algorithms: Vec<AlgorithmKind>,

    #[command(flatten)]
    pub sweep: SweepArgs,

    /// Write the Markdown comparison to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Run the compare command
pub fn run(args: CompareArgs) -> Result<()> {
    let kinds = if args.algorithms.is_empty() {
        AlgorithmKind::ALL.to_vec()
    } else {
        args.algorithms.clone()
    };

    let tables = kinds
        .into_iter()
        .map(|kind| -> Result<BenchmarkTable> {
            let config = args.sweep.resolve(Some(kind))?;
            Ok(run_benchmark(&config)?)
        })
        .collect::<Result<Vec<_>>>()?;

    let refs: Vec<&BenchmarkTable> = tables.iter().collect();
    output::emit(&MarkdownReport::comparison(&refs), args.output.as_deref())
}
