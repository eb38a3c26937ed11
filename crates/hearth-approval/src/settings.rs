//! Parental control settings

use chrono::NaiveTime;
use hearth_core::config::{parse_wall_clock, ConfigValidation, ConfigValidator};
use hearth_core::{HearthError, HearthResult};
use serde::{Deserialize, Serialize};

/// Daily window during which children may submit uploads.
///
/// `start` is inclusive and `end` exclusive. A window whose end precedes
/// its start wraps past midnight; equal bounds allow the whole day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedHours {
    /// Opening time, "HH:MM"
    pub start: String,
    /// Closing time, "HH:MM"
    pub end: String,
}

impl AllowedHours {
    /// Create a window from two "HH:MM" strings.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Whether `time` falls inside the window.
    pub fn contains(&self, time: NaiveTime) -> HearthResult<bool> {
        let (start, end) = self.bounds()?;
        let inside = if start == end {
            true
        } else if start < end {
            start <= time && time < end
        } else {
            time >= start || time < end
        };
        Ok(inside)
    }

    fn bounds(&self) -> HearthResult<(NaiveTime, NaiveTime)> {
        let parse = |value: &str| {
            parse_wall_clock(value)
                .ok_or_else(|| HearthError::invalid(format!("'{value}' is not an HH:MM time")))
        };
        Ok((parse(&self.start)?, parse(&self.end)?))
    }

    fn validate_into(&self, validator: &mut ConfigValidator) {
        validator
            .format("start", &self.start, "wall_clock")
            .format("end", &self.end, "wall_clock");
    }
}

impl Default for AllowedHours {
    fn default() -> Self {
        Self::new("08:00", "20:00")
    }
}

/// Per-group parental control settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParentalControlSettings {
    /// Child uploads go through approval
    pub require_approval: bool,
    /// Children may not download album photos
    pub restrict_download: bool,
    /// Content filtering requested (carried for the storage collaborator)
    pub content_filter: bool,
    /// Submission window
    pub allowed_hours: AllowedHours,
    /// Approved uploads per child per day
    pub max_daily_uploads: u32,
}

impl ParentalControlSettings {
    /// Lower bound for `max_daily_uploads`
    pub const MIN_DAILY_UPLOADS: u32 = 1;
    /// Upper bound for `max_daily_uploads`
    pub const MAX_DAILY_UPLOADS: u32 = 50;
}

impl Default for ParentalControlSettings {
    fn default() -> Self {
        Self {
            require_approval: true,
            restrict_download: true,
            content_filter: true,
            allowed_hours: AllowedHours::default(),
            max_daily_uploads: 10,
        }
    }
}

impl ConfigValidation for ParentalControlSettings {
    fn validate(&self) -> HearthResult<()> {
        let mut validator = ConfigValidator::new();
        validator.range(
            "max_daily_uploads",
            self.max_daily_uploads,
            Some(Self::MIN_DAILY_UPLOADS),
            Some(Self::MAX_DAILY_UPLOADS),
        );

        let mut hours = validator.for_field("allowed_hours");
        self.allowed_hours.validate_into(&mut hours);
        validator.merge(hours);

        validator.result().map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = ParentalControlSettings::default();
        assert!(settings.require_approval);
        assert!(settings.restrict_download);
        assert!(settings.content_filter);
        assert_eq!(settings.allowed_hours, AllowedHours::new("08:00", "20:00"));
        assert_eq!(settings.max_daily_uploads, 10);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_daytime_window() {
        let hours = AllowedHours::default();
        assert!(!hours.contains(at(7, 59)).unwrap());
        assert!(hours.contains(at(8, 0)).unwrap());
        assert!(hours.contains(at(19, 59)).unwrap());
        assert!(!hours.contains(at(20, 0)).unwrap());
    }

    #[test]
    fn test_window_wraps_midnight() {
        let hours = AllowedHours::new("22:00", "06:00");
        assert!(hours.contains(at(23, 30)).unwrap());
        assert!(hours.contains(at(0, 0)).unwrap());
        assert!(hours.contains(at(5, 59)).unwrap());
        assert!(!hours.contains(at(6, 0)).unwrap());
        assert!(!hours.contains(at(12, 0)).unwrap());
    }

    #[test]
    fn test_equal_bounds_allow_all_day() {
        let hours = AllowedHours::new("09:00", "09:00");
        assert!(hours.contains(at(3, 0)).unwrap());
        assert!(hours.contains(at(9, 0)).unwrap());
    }

    #[test]
    fn test_validation_bounds() {
        let mut settings = ParentalControlSettings {
            max_daily_uploads: 0,
            ..Default::default()
        };
        assert_matches!(settings.validate(), Err(HearthError::Invalid { .. }));

        settings.max_daily_uploads = 51;
        assert!(settings.validate().is_err());

        settings.max_daily_uploads = 50;
        assert!(settings.validate().is_ok());

        settings.allowed_hours.end = "8pm".to_string();
        assert!(settings.validate().is_err());
        assert!(settings.allowed_hours.contains(at(9, 0)).is_err());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let settings: ParentalControlSettings =
            serde_json::from_str(r#"{"max_daily_uploads": 3}"#).unwrap();
        assert_eq!(settings.max_daily_uploads, 3);
        assert!(settings.require_approval);
        assert_eq!(settings.allowed_hours.start, "08:00");
    }
}
