//! sortbench - benchmark sorting algorithms from the command line
//!
//! # Usage
//!
//! ```bash
//! # Sweep bucket sort over sizes 1..50 and print a table
//! sortbench run
//!
//! # Sweep quick sort and write CSV
//! sortbench run --algorithm quick-sort --max-size 200 --format csv --output quick.csv
//!
//! # Show one array before and after sorting
//! sortbench preview --algorithm insertion --max-size 12
//!
//! # Compare every algorithm on the same sweep parameters
//! sortbench compare --max-size 100
//!
//! # List algorithms and their cost models
//! sortbench list
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{compare, list, preview, run};

/// Benchmark sorting algorithms against their analytical cost models.
#[derive(Parser)]
#[command(
    name = "sortbench",
    version,
    about = "Sorting algorithm benchmarks",
    long_about = "Runs sorting algorithms over a sweep of random input sizes,\n\
                  measuring time and operation counts against each algorithm's\n\
                  closed-form cost estimate."
)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a benchmark sweep
    #[command(name = "run")]
    Run(run::RunArgs),

    /// Show one random array before and after sorting
    #[command(name = "preview")]
    Preview(preview::PreviewArgs),

    /// Run the same sweep for several algorithms
    #[command(name = "compare")]
    Compare(compare::CompareArgs),

    /// List available algorithms
    #[command(name = "list")]
    List(list::ListArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Run(args) => run::run(args),
        Commands::Preview(args) => preview::run(args),
        Commands::Compare(args) => compare::run(args),
        Commands::List(args) => list::run(args),
    }
}

/// Setup logging based on verbosity level
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => sortbench_console::DEFAULT_FILTER,
        1 => "sortbench_benchmark=debug",
        _ => "sortbench_benchmark=trace",
    };
    sortbench_console::init_with_filter(filter);
}
