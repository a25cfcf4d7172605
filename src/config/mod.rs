//! Configuration with YAML schema and validation.
//!
//! The benchmark always runs the fixed catalog; configuration carries only
//! the run-level knobs the library exposes:
//! - reproducibility seed (default 42)
//! - energy quantum applied per step (default 5.0 J)
//!
//! Constraints are checked twice: schema validation via `validator` and
//! semantic validation for what the schema cannot express.

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::error::{BenchError, BenchResult};

/// Top-level benchmark configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct BenchConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Reproducibility settings.
    #[validate(nested)]
    #[serde(default)]
    pub reproducibility: ReproducibilityConfig,

    /// Stepping settings.
    #[validate(nested)]
    #[serde(default)]
    pub stepping: SteppingConfig,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

impl BenchConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, YAML parsing fails, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> BenchResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> BenchResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;

        config.validate()?;
        config.validate_semantic()?;

        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> BenchConfigBuilder {
        BenchConfigBuilder::default()
    }

    /// Validate semantic constraints beyond schema.
    fn validate_semantic(&self) -> BenchResult<()> {
        let quantum = self.stepping.energy_quantum;
        if !quantum.is_finite() {
            return Err(BenchError::config("Energy quantum must be finite"));
        }
        if quantum <= 0.0 {
            return Err(BenchError::config("Energy quantum must be positive"));
        }
        Ok(())
    }

    /// Get the energy quantum in Joules.
    #[must_use]
    pub const fn energy_quantum(&self) -> f64 {
        self.stepping.energy_quantum
    }

    /// Get the master seed.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.reproducibility.seed
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            reproducibility: ReproducibilityConfig::default(),
            stepping: SteppingConfig::default(),
        }
    }
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct BenchConfigBuilder {
    seed: Option<u64>,
    energy_quantum: Option<f64>,
}

impl BenchConfigBuilder {
    /// Set the reproducibility seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the energy quantum in Joules.
    #[must_use]
    pub const fn energy_quantum(mut self, quantum: f64) -> Self {
        self.energy_quantum = Some(quantum);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> BenchConfig {
        let mut config = BenchConfig::default();

        if let Some(seed) = self.seed {
            config.reproducibility.seed = seed;
        }

        if let Some(quantum) = self.energy_quantum {
            config.stepping.energy_quantum = quantum;
        }

        config
    }
}

/// Reproducibility settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReproducibilityConfig {
    /// Master seed for the experiment RNG.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

const fn default_seed() -> u64 {
    42
}

impl Default for ReproducibilityConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
        }
    }
}

/// Stepping settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SteppingConfig {
    /// Fixed energy increment applied per step (Joules).
    #[validate(range(min = 0.000_001))]
    #[serde(default = "default_energy_quantum")]
    pub energy_quantum: f64,
}

const fn default_energy_quantum() -> f64 {
    5.0
}

impl Default for SteppingConfig {
    fn default() -> Self {
        Self {
            energy_quantum: default_energy_quantum(),
        }
    }
}
