//! Approval workflow configuration

use hearth_core::config::{ConfigValidation, ConfigValidator};
use hearth_core::time::DAY_MS;
use hearth_core::HearthResult;
use serde::{Deserialize, Serialize};

/// How the workflow maps time onto daily limits and allowed hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApprovalConfig {
    /// Offset from UTC used to read wall-clock time, in minutes
    pub utc_offset_minutes: i32,
    /// Length of the rolling upload-limit window, in milliseconds
    pub limit_window_ms: u64,
}

impl Default for ApprovalConfig {
    fn default() -> Self {
        Self {
            utc_offset_minutes: 0,
            limit_window_ms: DAY_MS,
        }
    }
}

impl ConfigValidation for ApprovalConfig {
    fn validate(&self) -> HearthResult<()> {
        let mut validator = ConfigValidator::new();
        validator
            .range(
                "utc_offset_minutes",
                self.utc_offset_minutes,
                Some(-12 * 60),
                Some(14 * 60),
            )
            .custom(
                "limit_window_ms",
                &self.limit_window_ms,
                |ms| *ms > 0,
                "must be positive",
            );
        validator.result().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_bounds() {
        assert!(ApprovalConfig::default().validate().is_ok());

        let config = ApprovalConfig {
            utc_offset_minutes: 15 * 60,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ApprovalConfig {
            utc_offset_minutes: -5 * 60,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }
}
