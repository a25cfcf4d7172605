//! Core simulation engine.
//!
//! Drives a single system through its energy budget:
//! - fixed-quantum stepping loop with guaranteed termination
//! - stop-on-error guard against non-finite state
//! - result packaging into an immutable `SystemReport`

pub mod rng;
pub mod state;

use serde::{Deserialize, Serialize};

pub use rng::SimRng;
pub use state::SystemState;

use crate::domains::kinetics::{
    apply_energy_step, kinetic_conversion_efficiency, SystemParameters,
};
use crate::error::{BenchError, BenchResult};

/// Immutable outcome of one system simulation.
///
/// A snapshot taken after the run's state is final; independent of the
/// `SystemState` that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemReport {
    /// System name.
    pub system: String,
    /// Velocity after the budget was exhausted.
    pub final_velocity: f64,
    /// Total energy applied, possibly overshooting the budget by up to
    /// one quantum.
    pub energy_consumed: f64,
    /// Kinetic conversion efficiency S = Δv / ΔE.
    pub conversion_efficiency: f64,
    /// True for non-physical systems.
    #[serde(rename = "abstract")]
    pub abstract_system: bool,
}

/// Driver for a single system's energy-budget run.
///
/// Owns a fresh `SystemState` and applies fixed energy quanta until the
/// budget is exhausted. The final step may push consumption past the
/// budget by up to one quantum; the overshoot is accepted behavior, not
/// clipped.
#[derive(Debug, Clone)]
pub struct SystemSim {
    params: SystemParameters,
    state: SystemState,
    energy_quantum: f64,
}

impl SystemSim {
    /// Create a driver for the given system with a fixed energy quantum.
    ///
    /// Quantum positivity is enforced by configuration validation; the
    /// driver trusts its caller on that contract.
    #[must_use]
    pub fn new(params: SystemParameters, energy_quantum: f64) -> Self {
        Self {
            params,
            state: SystemState::new(),
            energy_quantum,
        }
    }

    /// Apply one energy quantum and check the state for numeric health.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::NonFiniteValue` if the step produced a NaN or
    /// infinite component. With validated parameters this cannot happen;
    /// the guard stops the run rather than let a bad value propagate.
    pub fn step(&mut self) -> BenchResult<()> {
        apply_energy_step(&mut self.state, &self.params, self.energy_quantum);

        if !self.state.is_finite() {
            return Err(BenchError::NonFiniteValue {
                location: format!("velocity ({})", self.params.name()),
            });
        }

        Ok(())
    }

    /// Run until the energy budget is exhausted and package the result.
    ///
    /// Terminates after at most ceil(budget / quantum) iterations since
    /// every step adds one full positive quantum.
    ///
    /// # Errors
    ///
    /// Returns error if any step trips the non-finite guard.
    pub fn run(&mut self) -> BenchResult<SystemReport> {
        while !self.state.exhausted(self.params.energy_budget()) {
            self.step()?;
        }

        Ok(SystemReport {
            system: self.params.name().to_string(),
            final_velocity: self.state.velocity,
            energy_consumed: self.state.energy_consumed,
            conversion_efficiency: kinetic_conversion_efficiency(&self.state),
            abstract_system: self.params.is_abstract(),
        })
    }

    /// Current run state.
    #[must_use]
    pub const fn state(&self) -> &SystemState {
        &self.state
    }

    /// System parameters under simulation.
    #[must_use]
    pub const fn params(&self) -> &SystemParameters {
        &self.params
    }

    /// Energy quantum applied per step.
    #[must_use]
    pub const fn energy_quantum(&self) -> f64 {
        self.energy_quantum
    }
}

/// Run a full energy-budget simulation for a single system.
///
/// # Errors
///
/// Returns error if the run trips the non-finite guard.
pub fn simulate_system(
    params: SystemParameters,
    energy_quantum: f64,
) -> BenchResult<SystemReport> {
    SystemSim::new(params, energy_quantum).run()
}
