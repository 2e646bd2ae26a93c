//! Preview command - show one sort before and after
//!
//! Usage:
//! ```bash
//! sortbench preview --algorithm quick --max-size 15
//! sortbench preview --books --algorithm bucket
//! ```

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;
use sortbench_benchmark::{BookColumns, BookPreview, RandomArrayGenerator, SortPreview};
use sortbench_core::{sample_shelf, AlgorithmKind};

use super::SweepArgs;

/// Arguments for the preview command
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Algorithm to preview
    #[arg(short, long)]
    pub algorithm: Option<AlgorithmKind>,

    #[command(flatten)]
    pub sweep: SweepArgs,

    /// Sort the built-in book shelf instead of random integers
    #[arg(long)]
    pub books: bool,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

/// Run the preview command
pub fn run(args: PreviewArgs) -> Result<()> {
    let config = args.sweep.resolve(args.algorithm)?;

    if args.books {
        let preview = BookPreview::generate(config.algorithm, sample_shelf())?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&preview)?);
        } else {
            print_header(preview.algorithm, preview.operation_count);
            print_books("Before", &preview.before);
            print_books("After", &preview.after);
        }
        return Ok(());
    }

    let mut generator = RandomArrayGenerator::from_config(&config);
    let preview = SortPreview::generate(config.algorithm, &config, &mut generator)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&preview)?);
    } else {
        print_header(preview.algorithm, preview.operation_count);
        println!("{:>8} {}", "Before:".dimmed(), preview.before.value.join(" "));
        println!("{:>8} {}", "After:".dimmed(), preview.after.value.join(" "));
    }

    Ok(())
}

fn print_header(algorithm: AlgorithmKind, operations: u64) {
    println!(
        "{} │ {} operations",
        algorithm.display_name().bold().cyan(),
        operations
    );
}

fn print_books(label: &str, books: &BookColumns) {
    println!();
    println!("{}", label.bold());
    for i in 0..books.title.len() {
        println!(
            "  {} {:<28} {:<24} {}",
            books.signature[i].dimmed(),
            books.title[i],
            books.author[i],
            books.publish_date[i]
        );
    }
}
