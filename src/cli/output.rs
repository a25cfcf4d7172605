//! CLI output formatting.
//!
//! All output generation for the CLI, extracted to enable testing of the
//! rendered text.

use std::fmt::Write as _;

use crate::engine::SystemReport;

/// Print version information.
pub fn print_version() {
    println!("kinbench {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message.
pub fn print_help() {
    println!(
        r"kinbench - Kinetic Conversion Efficiency Benchmark

USAGE:
    kinbench [COMMAND]

COMMANDS:
    run        Run the fixed benchmark suite (default)
    help       Show this help message
    version    Show version information

The benchmark always simulates the fixed catalog (Agile Robot,
Electric Vehicle, AI Agent) and prints one block per system, ranked
by S = final velocity / energy consumed, descending.
"
    );
}

/// Render the ordered report list as console text.
///
/// One five-line block per system: name, final velocity to six
/// decimals, energy consumed to two decimals in Joules, S in scientific
/// notation, the abstract flag, then a separator line.
#[must_use]
pub fn format_report(reports: &[SystemReport]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n=== Kinetic Conversion Efficiency Benchmark ===\n");
    for report in reports {
        let _ = writeln!(out, "System           : {}", report.system);
        let _ = writeln!(out, "Final Velocity   : {:.6}", report.final_velocity);
        let _ = writeln!(out, "Energy Consumed  : {:.2} J", report.energy_consumed);
        let _ = writeln!(out, "S (Δv / ΔE)      : {:.6e}", report.conversion_efficiency);
        let _ = writeln!(out, "Abstract System  : {}", report.abstract_system);
        let _ = writeln!(out, "{}", "-".repeat(50));
    }

    out
}

/// Print the ordered report list.
pub fn print_report(reports: &[SystemReport]) {
    print!("{}", format_report(reports));
}
