//! Configuration validation utilities and rules

use crate::HearthError;
use chrono::NaiveTime;
use std::fmt;

/// Configuration validation result
pub type ValidationResult = Result<(), ValidationError>;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Value is required but missing
    Required { field: String },
    /// Value is out of acceptable range
    OutOfRange {
        field: String,
        min: Option<f64>,
        max: Option<f64>,
        actual: f64,
    },
    /// Value format is invalid
    InvalidFormat {
        field: String,
        expected: String,
        actual: String,
    },
    /// Custom validation failed
    Custom { field: String, message: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Required { field } => {
                write!(f, "Field '{field}' is required but missing")
            }
            ValidationError::OutOfRange {
                field,
                min,
                max,
                actual,
            } => {
                let range_desc = match (min, max) {
                    (Some(min), Some(max)) => format!("between {min} and {max}"),
                    (Some(min), None) => format!("at least {min}"),
                    (None, Some(max)) => format!("at most {max}"),
                    (None, None) => "in valid range".to_string(),
                };
                write!(f, "Field '{field}' must be {range_desc} (got {actual})")
            }
            ValidationError::InvalidFormat {
                field,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Field '{field}' has invalid format. Expected: {expected}, got: {actual}"
                )
            }
            ValidationError::Custom { field, message } => {
                write!(f, "Field '{field}': {message}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for HearthError {
    fn from(err: ValidationError) -> Self {
        HearthError::invalid(err.to_string())
    }
}

/// Parse an "HH:MM" wall-clock string.
pub fn parse_wall_clock(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").ok()
}

/// Configuration validator that accumulates validation rules
#[derive(Debug, Default)]
pub struct ConfigValidator {
    errors: Vec<ValidationError>,
    field_prefix: String,
}

impl ConfigValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator for a nested field
    pub fn for_field(&self, field_name: &str) -> Self {
        Self {
            errors: Vec::new(),
            field_prefix: self.full_field_name(field_name),
        }
    }

    /// Validate that a string value is present and not blank
    pub fn required(&mut self, field_name: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.errors.push(ValidationError::Required {
                field: self.full_field_name(field_name),
            });
        }
        self
    }

    /// Validate that a number is within range
    pub fn range<T>(&mut self, field_name: &str, value: T, min: Option<T>, max: Option<T>) -> &mut Self
    where
        T: PartialOrd + Copy + Into<f64>,
    {
        let below = min.is_some_and(|min_val| value < min_val);
        let above = max.is_some_and(|max_val| value > max_val);

        if below || above {
            self.errors.push(ValidationError::OutOfRange {
                field: self.full_field_name(field_name),
                min: min.map(Into::into),
                max: max.map(Into::into),
                actual: value.into(),
            });
        }

        self
    }

    /// Validate using a custom predicate
    pub fn custom<T, F>(&mut self, field_name: &str, value: &T, predicate: F, message: &str) -> &mut Self
    where
        F: FnOnce(&T) -> bool,
    {
        if !predicate(value) {
            self.errors.push(ValidationError::Custom {
                field: self.full_field_name(field_name),
                message: message.to_string(),
            });
        }
        self
    }

    /// Validate string format.
    ///
    /// Supported patterns: `"wall_clock"` (HH:MM) and `"contact"` (an
    /// email-like address). Unknown patterns only require a non-empty value.
    pub fn format(&mut self, field_name: &str, value: &str, pattern: &str) -> &mut Self {
        let is_valid = match pattern {
            "wall_clock" => parse_wall_clock(value).is_some(),
            "contact" => is_valid_contact(value),
            _ => !value.is_empty(),
        };

        if !is_valid {
            self.errors.push(ValidationError::InvalidFormat {
                field: self.full_field_name(field_name),
                expected: pattern.to_string(),
                actual: value.to_string(),
            });
        }

        self
    }

    /// Merge errors from another validator
    pub fn merge(&mut self, other: ConfigValidator) {
        self.errors.extend(other.errors);
    }

    /// Get validation result, reporting the first error
    pub fn result(self) -> ValidationResult {
        match self.errors.into_iter().next() {
            None => Ok(()),
            Some(first) => Err(first),
        }
    }

    /// Get all validation errors
    pub fn all_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    fn full_field_name(&self, field_name: &str) -> String {
        if self.field_prefix.is_empty() {
            field_name.to_string()
        } else {
            format!("{}.{}", self.field_prefix, field_name)
        }
    }
}

fn is_valid_contact(value: &str) -> bool {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_validation() {
        let mut validator = ConfigValidator::new();
        validator.range("max_daily_uploads", 0u32, Some(1), Some(50));
        let err = validator.result().unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
        assert!(err.to_string().contains("between 1 and 50"));
    }

    #[test]
    fn test_nested_field_names() {
        let root = ConfigValidator::new();
        let mut nested = root.for_field("allowed_hours");
        nested.format("start", "25:00", "wall_clock");
        let errors = nested.all_errors();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("allowed_hours.start"));
    }

    #[test]
    fn test_formats() {
        let mut validator = ConfigValidator::new();
        validator
            .format("start", "08:00", "wall_clock")
            .format("address", "parent@example.com", "contact");
        assert!(validator.result().is_ok());

        let mut validator = ConfigValidator::new();
        validator.format("address", "not-an-address", "contact");
        assert!(validator.result().is_err());
    }

    #[test]
    fn test_required_rejects_blank() {
        let mut validator = ConfigValidator::new();
        validator.required("name", "   ");
        assert!(matches!(
            validator.result(),
            Err(ValidationError::Required { .. })
        ));
    }
}
