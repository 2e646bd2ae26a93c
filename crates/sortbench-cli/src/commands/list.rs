//! List command - show available algorithms
//!
//! Usage:
//! ```bash
//! sortbench list
//! ```

use anyhow::Result;
use clap::Args;
use owo_colors::OwoColorize;
use sortbench_algorithms::Strategy;
use sortbench_core::AlgorithmKind;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs;

/// Run the list command
pub fn run(_args: ListArgs) -> Result<()> {
    println!("{}", "Algorithms:".bold());
    for kind in AlgorithmKind::ALL {
        let default_marker = if kind == AlgorithmKind::default() {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        println!(
            "  {} {:<16} {:<16} {}{}",
            "•".cyan(),
            kind.id().green(),
            kind.display_name(),
            kind.cost_model().to_string().yellow(),
            default_marker
        );
    }
    Ok(())
}
