//! CLI command handlers.
//!
//! Execution logic for each CLI command, extracted from main.rs so
//! command behavior is testable.

use std::process::ExitCode;

use crate::catalog;
use crate::engine::SystemReport;
use crate::error::BenchResult;
use crate::experiment::run_experiment;

use super::output::{print_help, print_report, print_version};
use super::{Args, Command};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed
/// arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run => run_benchmark(),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Run the fixed benchmark suite and print the ranked report.
///
/// Faults surface as an `Error:` diagnostic on stderr and a non-zero
/// exit code.
#[must_use]
pub fn run_benchmark() -> ExitCode {
    match execute_benchmark() {
        Ok(reports) => {
            print_report(&reports);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// Build the catalog and run the experiment with the default
/// configuration.
fn execute_benchmark() -> BenchResult<Vec<SystemReport>> {
    let systems = catalog::benchmark_suite()?;
    run_experiment(&systems)
}
