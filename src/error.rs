//! Error types for kinbench.
//!
//! All fallible operations return `Result<T, BenchError>` instead of
//! panicking; faults surface as diagnostics at the CLI boundary.

use thiserror::Error;

/// Result type alias for kinbench operations.
pub type BenchResult<T> = Result<T, BenchError>;

/// Unified error type for all kinbench operations.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Numerical instability detected (NaN or Inf) during a run.
    #[error("non-finite value detected at {location}")]
    NonFiniteValue {
        /// Location where the non-finite value was detected.
        location: String,
    },

    /// System parameters rejected at construction time.
    #[error("invalid parameters for system '{system}': {reason}")]
    InvalidSystem {
        /// Name of the offending system.
        system: String,
        /// Which constraint was violated.
        reason: String,
    },

    /// Invalid configuration value.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Schema validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BenchError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a parameter-validation error for a named system.
    #[must_use]
    pub fn invalid_system(system: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSystem {
            system: system.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error indicates a violated numeric invariant
    /// (requires immediate stop rather than a config fix).
    #[must_use]
    pub const fn is_guard_violation(&self) -> bool {
        matches!(self, Self::NonFiniteValue { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_violation_detection() {
        let non_finite = BenchError::NonFiniteValue {
            location: "velocity (Agile Robot)".to_string(),
        };
        assert!(non_finite.is_guard_violation());

        let config = BenchError::config("invalid");
        assert!(!config.is_guard_violation());

        let system = BenchError::invalid_system("Agile Robot", "mass must be positive");
        assert!(!system.is_guard_violation());
    }

    #[test]
    fn test_error_config() {
        let err = BenchError::config("invalid parameter");
        let msg = err.to_string();
        assert!(msg.contains("Configuration error"));
        assert!(msg.contains("invalid parameter"));
    }

    #[test]
    fn test_error_invalid_system_display() {
        let err = BenchError::invalid_system("Electric Vehicle", "efficiency must be in (0, 1]");
        let msg = err.to_string();
        assert!(msg.contains("Electric Vehicle"));
        assert!(msg.contains("efficiency must be in (0, 1]"));
    }

    #[test]
    fn test_error_non_finite_display() {
        let err = BenchError::NonFiniteValue {
            location: "velocity (AI Agent)".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("non-finite value"));
        assert!(msg.contains("AI Agent"));
    }

    #[test]
    fn test_error_io() {
        let err = BenchError::Io(std::io::Error::other("file not found"));
        assert!(!err.is_guard_violation());
        let msg = err.to_string();
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_error_debug() {
        let err = BenchError::config("test");
        let debug = format!("{err:?}");
        assert!(debug.contains("Config"));
    }
}
