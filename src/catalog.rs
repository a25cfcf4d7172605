//! Standardized system archetypes.
//!
//! The benchmark catalog is fixed: three archetypes with literal
//! parameters, always simulated in the same order. Each archetype also
//! has its own constructor for use in tests and benches.

use crate::domains::kinetics::SystemParameters;
use crate::error::BenchResult;

/// A small, efficient physical platform.
///
/// # Errors
///
/// Returns error if the literal parameters fail validation.
pub fn agile_robot() -> BenchResult<SystemParameters> {
    SystemParameters::new("Agile Robot", 0.5, 0.70, 60.0)
}

/// A heavier platform with a larger budget and higher efficiency.
///
/// # Errors
///
/// Returns error if the literal parameters fail validation.
pub fn electric_vehicle() -> BenchResult<SystemParameters> {
    SystemParameters::new("Electric Vehicle", 1.0, 0.80, 100.0)
}

/// A non-physical system; its velocity is a normalized progress proxy.
///
/// # Errors
///
/// Returns error if the literal parameters fail validation.
pub fn ai_agent() -> BenchResult<SystemParameters> {
    SystemParameters::new_abstract("AI Agent (Abstract)", 1.0, 0.50, 50.0)
}

/// The fixed ordered benchmark suite.
///
/// # Errors
///
/// Returns error if any literal archetype fails validation.
pub fn benchmark_suite() -> BenchResult<Vec<SystemParameters>> {
    Ok(vec![agile_robot()?, electric_vehicle()?, ai_agent()?])
}
