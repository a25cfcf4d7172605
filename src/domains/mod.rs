//! Domain layer: the numeric leaves of the benchmark.
//!
//! - Kinetics: work-energy stepping and the conversion efficiency metric

pub mod kinetics;

pub use kinetics::{apply_energy_step, kinetic_conversion_efficiency, SystemParameters};
