//! Work-energy kinetics and the conversion efficiency metric.
//!
//! Implements the two numeric leaves of the benchmark:
//! - `apply_energy_step`: one discrete energy quantum into a system state
//! - `kinetic_conversion_efficiency`: the ranking metric S = Δv / ΔE
//!
//! Velocity of an abstract system is a normalized progress proxy, not a
//! literal speed; the arithmetic is identical either way.

use serde::Serialize;

use crate::engine::state::SystemState;
use crate::error::{BenchError, BenchResult};

/// Immutable parameters defining a system archetype.
///
/// Validated at construction: mass must be positive, efficiency in (0, 1],
/// energy budget non-negative, all values finite. A constructed instance
/// is therefore always safe to step. Deliberately not deserializable:
/// every instance goes through the validating constructors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemParameters {
    /// Display name, unique within a catalog.
    name: String,
    /// Mass (kg).
    mass: f64,
    /// Fraction of each quantum converted to kinetic work, in (0, 1].
    efficiency: f64,
    /// Total energy allotted to one run (Joules).
    energy_budget: f64,
    /// True for non-physical systems.
    #[serde(rename = "abstract")]
    abstract_system: bool,
}

impl SystemParameters {
    /// Create parameters for a physical system.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::InvalidSystem` if any constraint is violated.
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        efficiency: f64,
        energy_budget: f64,
    ) -> BenchResult<Self> {
        Self::build(name.into(), mass, efficiency, energy_budget, false)
    }

    /// Create parameters for an abstract system, where velocity is read
    /// as a progress proxy.
    ///
    /// # Errors
    ///
    /// Returns `BenchError::InvalidSystem` if any constraint is violated.
    pub fn new_abstract(
        name: impl Into<String>,
        mass: f64,
        efficiency: f64,
        energy_budget: f64,
    ) -> BenchResult<Self> {
        Self::build(name.into(), mass, efficiency, energy_budget, true)
    }

    fn build(
        name: String,
        mass: f64,
        efficiency: f64,
        energy_budget: f64,
        abstract_system: bool,
    ) -> BenchResult<Self> {
        if name.is_empty() {
            return Err(BenchError::invalid_system("<unnamed>", "name must be non-empty"));
        }
        if !mass.is_finite() || mass <= 0.0 {
            return Err(BenchError::invalid_system(
                name,
                format!("mass must be positive and finite, got {mass}"),
            ));
        }
        if !efficiency.is_finite() || efficiency <= 0.0 || efficiency > 1.0 {
            return Err(BenchError::invalid_system(
                name,
                format!("efficiency must be in (0, 1], got {efficiency}"),
            ));
        }
        if !energy_budget.is_finite() || energy_budget < 0.0 {
            return Err(BenchError::invalid_system(
                name,
                format!("energy budget must be non-negative and finite, got {energy_budget}"),
            ));
        }

        Ok(Self {
            name,
            mass,
            efficiency,
            energy_budget,
            abstract_system,
        })
    }

    /// System name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mass (kg).
    #[must_use]
    pub const fn mass(&self) -> f64 {
        self.mass
    }

    /// Conversion efficiency η in (0, 1].
    #[must_use]
    pub const fn efficiency(&self) -> f64 {
        self.efficiency
    }

    /// Energy budget (Joules).
    #[must_use]
    pub const fn energy_budget(&self) -> f64 {
        self.energy_budget
    }

    /// Whether velocity is a progress proxy rather than a literal speed.
    #[must_use]
    pub const fn is_abstract(&self) -> bool {
        self.abstract_system
    }
}

/// Apply one discrete energy quantum to the system state.
///
/// Uses the work-energy theorem:
///     ΔK = η · ΔE
///     v_new = sqrt(v_old² + 2·ΔK / m)
///
/// The relation is additive in squared velocity, so velocity never
/// decreases and the outcome is independent of quantum ordering.
/// `energy_consumed` accumulates the raw quantum, not the usable
/// fraction: S's denominator is energy spent, and inefficiency shows up
/// only in the numerator.
///
/// No-op once the budget is reached, so calling past exhaustion is safe.
pub fn apply_energy_step(state: &mut SystemState, params: &SystemParameters, energy_step: f64) {
    if state.exhausted(params.energy_budget()) {
        return;
    }

    let usable_energy = params.efficiency() * energy_step;
    let delta_v_squared = 2.0 * usable_energy / params.mass();
    state.velocity = (state.velocity * state.velocity + delta_v_squared).sqrt();
    state.energy_consumed += energy_step;
}

/// Compute the kinetic conversion efficiency S = Δv / ΔE.
///
/// Returns 0.0 for a state that has consumed no energy: a system that
/// never stepped has undefined efficiency, reported as zero by
/// convention. Pure function of the state snapshot.
#[must_use]
pub fn kinetic_conversion_efficiency(state: &SystemState) -> f64 {
    if state.energy_consumed <= 0.0 {
        return 0.0;
    }
    state.velocity / state.energy_consumed
}


#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Falsification test: velocity never decreases across any step
        /// sequence for any well-formed system.
        #[test]
        fn prop_velocity_monotone(
            mass in 0.01f64..1000.0,
            efficiency in 0.01f64..1.0,
            budget in 0.0f64..10_000.0,
            quantum in 0.01f64..100.0,
            steps in 1usize..200,
        ) {
            let params =
                SystemParameters::new("prop", mass, efficiency, budget).unwrap();
            let mut state = SystemState::new();
            let mut last_velocity = 0.0;

            for _ in 0..steps {
                apply_energy_step(&mut state, &params, quantum);
                prop_assert!(state.velocity >= last_velocity);
                last_velocity = state.velocity;
            }
        }

        /// Falsification test: the metric is non-negative for any
        /// reachable state.
        #[test]
        fn prop_metric_non_negative(
            mass in 0.01f64..1000.0,
            efficiency in 0.01f64..1.0,
            budget in 0.01f64..1000.0,
            quantum in 0.1f64..100.0,
        ) {
            let params =
                SystemParameters::new("prop", mass, efficiency, budget).unwrap();
            let mut state = SystemState::new();

            while !state.exhausted(params.energy_budget()) {
                apply_energy_step(&mut state, &params, quantum);
            }

            prop_assert!(kinetic_conversion_efficiency(&state) >= 0.0);
        }

        /// Falsification test: the guard keeps consumption within one
        /// quantum of the budget.
        #[test]
        fn prop_overshoot_bounded(
            mass in 0.01f64..1000.0,
            efficiency in 0.01f64..1.0,
            budget in 0.01f64..1000.0,
            quantum in 0.1f64..100.0,
        ) {
            let params =
                SystemParameters::new("prop", mass, efficiency, budget).unwrap();
            let mut state = SystemState::new();

            while !state.exhausted(params.energy_budget()) {
                apply_energy_step(&mut state, &params, quantum);
            }
            // Over-apply on purpose; the guard must hold the line.
            apply_energy_step(&mut state, &params, quantum);

            prop_assert!(state.energy_consumed >= params.energy_budget());
            // Tolerance absorbs accumulated rounding in the repeated sums.
            prop_assert!(
                state.energy_consumed < params.energy_budget() + quantum + 1e-9
            );
        }
    }
}
