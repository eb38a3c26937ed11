//! Invitation service configuration

use hearth_core::config::{ConfigValidation, ConfigValidator};
use hearth_core::time::DAY_MS;
use hearth_core::HearthResult;
use serde::{Deserialize, Serialize};

/// Configuration for the invitation service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvitationConfig {
    /// Time from (re)sending to expiry, in milliseconds
    pub expiration_ms: u64,
}

impl InvitationConfig {
    /// Invitations are valid for seven days.
    pub const DEFAULT_EXPIRATION_MS: u64 = 7 * DAY_MS;
}

impl Default for InvitationConfig {
    fn default() -> Self {
        Self {
            expiration_ms: Self::DEFAULT_EXPIRATION_MS,
        }
    }
}

impl ConfigValidation for InvitationConfig {
    fn validate(&self) -> HearthResult<()> {
        let mut validator = ConfigValidator::new();
        validator.custom(
            "expiration_ms",
            &self.expiration_ms,
            |ms| *ms > 0,
            "must be positive",
        );
        validator.result().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hearth_core::config::{parse_config_str, ConfigFormat};

    #[test]
    fn test_default_is_seven_days() {
        assert_eq!(InvitationConfig::default().expiration_ms, 604_800_000);
    }

    #[test]
    fn test_parse_and_validate() {
        let config: InvitationConfig =
            parse_config_str("expiration_ms = 3600000", ConfigFormat::Toml).unwrap();
        assert_eq!(config.expiration_ms, 3_600_000);

        let result: HearthResult<InvitationConfig> =
            parse_config_str("expiration_ms = 0", ConfigFormat::Toml);
        assert!(result.is_err());
    }
}
