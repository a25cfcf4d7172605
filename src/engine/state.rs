//! Run-local system state.
//!
//! A `SystemState` is created fresh for each simulation run, mutated in
//! place by the stepper, and discarded once the report is built. It never
//! escapes the run that owns it.

use serde::{Deserialize, Serialize};

/// Runtime state of a system under simulation.
///
/// Invariants maintained by the stepper:
/// - `velocity` never decreases within a run
/// - `energy_consumed` never exceeds the budget by more than one quantum
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemState {
    /// Accumulated velocity (m/s, or a progress proxy for abstract systems).
    pub velocity: f64,
    /// Total energy applied so far (Joules), counting the raw quanta.
    pub energy_consumed: f64,
}

impl SystemState {
    /// Create a fresh state at rest with no energy consumed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            velocity: 0.0,
            energy_consumed: 0.0,
        }
    }

    /// Whether the given energy budget has been reached or passed.
    ///
    /// Shared by the stepper's overshoot guard and the driver loop so the
    /// two can never disagree on the exhaustion boundary.
    #[must_use]
    pub fn exhausted(&self, energy_budget: f64) -> bool {
        self.energy_consumed >= energy_budget
    }

    /// Whether all state components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.velocity.is_finite() && self.energy_consumed.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_new_at_rest() {
        let state = SystemState::new();
        assert!((state.velocity - 0.0).abs() < f64::EPSILON);
        assert!((state.energy_consumed - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_state_default_matches_new() {
        assert_eq!(SystemState::default(), SystemState::new());
    }

    #[test]
    fn test_state_exhausted_boundary() {
        let state = SystemState {
            velocity: 1.0,
            energy_consumed: 60.0,
        };
        // Exactly at the budget counts as exhausted.
        assert!(state.exhausted(60.0));
        assert!(state.exhausted(59.9));
        assert!(!state.exhausted(60.1));
    }

    #[test]
    fn test_state_fresh_not_exhausted() {
        let state = SystemState::new();
        assert!(!state.exhausted(50.0));
        // Zero budget is exhausted before the first step.
        assert!(state.exhausted(0.0));
    }

    #[test]
    fn test_state_is_finite() {
        let state = SystemState {
            velocity: 3.0,
            energy_consumed: 10.0,
        };
        assert!(state.is_finite());

        let bad = SystemState {
            velocity: f64::NAN,
            energy_consumed: 10.0,
        };
        assert!(!bad.is_finite());

        let inf = SystemState {
            velocity: 1.0,
            energy_consumed: f64::INFINITY,
        };
        assert!(!inf.is_finite());
    }

    #[test]
    fn test_state_serde_roundtrip() {
        let state = SystemState {
            velocity: 12.961_481,
            energy_consumed: 60.0,
        };
        let json = serde_json::to_string(&state);
        assert!(json.is_ok());

        let restored: Option<SystemState> =
            json.ok().and_then(|j| serde_json::from_str(&j).ok());
        assert_eq!(restored, Some(state));
    }
}
