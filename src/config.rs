//! Mutation-run configuration.
//!
//! ```
//! use reversal_check::config::MutationConfig;
//! use reversal_check::suite::Technique;
//!
//! let config = MutationConfig::default()
//!     .with_techniques(vec![Technique::BoundaryAnalysis])
//!     .with_fail_fast(true);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mutant::{Mutant, builtin_mutants};
use crate::suite::{ALL_TECHNIQUES, Technique};

/// Errors raised while loading or validating a [`MutationConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No technique was selected, so no case would run.
    #[error("mutation config selects no techniques")]
    NoTechniques,
    /// TOML input could not be parsed.
    #[cfg(feature = "config-file")]
    #[error("invalid mutation config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Selection of suites and mutants for a mutation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationConfig {
    /// Suites to run, in order.
    pub techniques: Vec<Technique>,
    /// Mutants to evaluate, in order.
    pub mutants: Vec<Mutant>,
    /// Stop evaluating a mutant at its first kill.
    ///
    /// Per-technique coverage then only credits the technique of that first
    /// kill, and each mutant's `cases_run` counts the cases up to it.
    pub fail_fast: bool,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            techniques: ALL_TECHNIQUES.to_vec(),
            mutants: builtin_mutants(),
            fail_fast: false,
        }
    }
}

impl MutationConfig {
    /// Replaces the selected techniques.
    #[must_use]
    pub fn with_techniques(mut self, techniques: Vec<Technique>) -> Self {
        self.techniques = techniques;
        self
    }

    /// Replaces the selected mutants.
    #[must_use]
    pub fn with_mutants(mut self, mutants: Vec<Mutant>) -> Self {
        self.mutants = mutants;
        self
    }

    /// Sets fail-fast mode.
    #[must_use]
    pub const fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Checks the configuration can drive a run.
    ///
    /// An empty mutant list is allowed: the run then only checks the baseline.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.techniques.is_empty() {
            return Err(ConfigError::NoTechniques);
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    ///
    /// Omitted keys fall back to [`MutationConfig::default`].
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.validate()?;
        Ok(config)
    }
}
