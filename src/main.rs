//! kinbench CLI - Kinetic Conversion Efficiency Benchmark
//!
//! Command-line entry point; all logic lives in the library's cli module.

use std::process::ExitCode;

use kinbench::cli::{run_cli, Args};

fn main() -> ExitCode {
    run_cli(Args::parse())
}
