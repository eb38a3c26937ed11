//! Advisor configuration

use hearth_core::config::{ConfigValidation, ConfigValidator};
use hearth_core::HearthResult;
use serde::{Deserialize, Serialize};

/// Configuration for [`crate::SharingAdvisor`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Upper bound on suggestions per call
    pub max_suggestions: u32,
    /// RNG seed; equal seeds and inputs give equal suggestions
    pub seed: u64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            max_suggestions: 5,
            seed: 0,
        }
    }
}

impl ConfigValidation for AdvisorConfig {
    fn validate(&self) -> HearthResult<()> {
        let mut validator = ConfigValidator::new();
        validator.range("max_suggestions", self.max_suggestions, Some(1), Some(100));
        validator.result().map_err(Into::into)
    }
}
