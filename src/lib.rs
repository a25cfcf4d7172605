//! # kinbench
//!
//! Deterministic kinetic conversion efficiency benchmark.
//!
//! A fixed catalog of system archetypes (mass, efficiency, energy budget)
//! each absorbs discrete energy quanta under the work-energy relation. The
//! ranking metric S is the final velocity divided by the total energy
//! consumed. The benchmark is reproducible: same configuration, same
//! output, every run.
//!
//! ## Example
//!
//! ```rust
//! use kinbench::prelude::*;
//!
//! let systems = kinbench::catalog::benchmark_suite()?;
//! let reports = run_experiment(&systems)?;
//! assert_eq!(reports[0].system, "Agile Robot");
//! # Ok::<(), BenchError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::suboptimal_flops,  // Numerical code choices are intentional
    clippy::imprecise_flops,
    clippy::missing_const_for_fn,
)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod domains;
pub mod engine;
pub mod error;
pub mod experiment;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{BenchConfig, BenchConfigBuilder};
    pub use crate::domains::kinetics::{
        apply_energy_step, kinetic_conversion_efficiency, SystemParameters,
    };
    pub use crate::engine::rng::SimRng;
    pub use crate::engine::state::SystemState;
    pub use crate::engine::{simulate_system, SystemReport, SystemSim};
    pub use crate::error::{BenchError, BenchResult};
    pub use crate::experiment::{run_experiment, Experiment};
}

/// Re-export for public API
pub use error::{BenchError, BenchResult};
