// Field Validators - Reusable validation components
use std::fmt::Display;

use once_cell::sync::Lazy;

/// Trait for field validators
pub trait FieldValidator<T: ?Sized> {
    /// Validate a field value
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// Inclusive bounds check for numeric fields; either side may be open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeValidator<T> {
    min: Option<T>,
    max: Option<T>,
}

impl<T> RangeValidator<T>
where
    T: PartialOrd + Display + Copy,
{
    /// Both bounds, inclusive
    pub fn new(min: T, max: T) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    /// Lower bound only
    pub fn at_least(min: T) -> Self {
        Self { min: Some(min), max: None }
    }
}

impl<T> FieldValidator<T> for RangeValidator<T>
where
    T: PartialOrd + Display + Copy,
{
    fn validate(&self, value: &T) -> Result<(), String> {
        match (self.min, self.max) {
            (Some(min), _) if *value < min => Err(format!("Value must be at least {min}")),
            (_, Some(max)) if *value > max => Err(format!("Value must not exceed {max}")),
            _ => Ok(()),
        }
    }
}

/// String validator; surrounding whitespace is ignored
#[derive(Debug, Clone)]
pub struct StringValidator {
    min_length: Option<usize>,
    not_empty: bool,
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl StringValidator {
    /// Create a new string validator
    pub fn new() -> Self {
        Self { min_length: None, not_empty: false }
    }

    /// Require non-empty string
    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }

    /// Set minimum length (in characters)
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }
}

impl FieldValidator<str> for StringValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let val = value.trim();
        // Names carry accents; count characters, not bytes.
        let length = val.chars().count();

        if self.not_empty && val.is_empty() {
            return Err("Value cannot be empty".to_string());
        }

        if let Some(min) = self.min_length {
            if length < min {
                return Err(format!("Length must be at least {} characters", min));
            }
        }

        Ok(())
    }
}

static EMAIL_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("EMAIL_REGEX pattern is valid and well-formed")
});

/// Email validator
#[derive(Debug, Clone, Default)]
pub struct EmailValidator;

impl EmailValidator {
    /// Create a new email validator
    pub fn new() -> Self {
        Self
    }
}

impl FieldValidator<str> for EmailValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if !EMAIL_REGEX.is_match(value.trim()) {
            return Err("Invalid email format".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_validator() {
        let validator = RangeValidator::new(1, 5);
        assert!(validator.validate(&1).is_ok());
        assert!(validator.validate(&5).is_ok());
        assert!(validator.validate(&0).is_err());
        assert!(validator.validate(&6).is_err());

        let open_ended = RangeValidator::at_least(1i64);
        assert!(open_ended.validate(&1_000).is_ok());
        assert_eq!(open_ended.validate(&0), Err("Value must be at least 1".to_string()));
    }

    #[test]
    fn test_string_validator_counts_characters() {
        let validator = StringValidator::new().not_empty().min_length(2);
        assert!(FieldValidator::<str>::validate(&validator, "Zé").is_ok());
        assert!(FieldValidator::<str>::validate(&validator, "é").is_err());
        assert!(FieldValidator::<str>::validate(&validator, "   ").is_err());
    }

    #[test]
    fn test_email_validator() {
        let validator = EmailValidator::new();
        assert!(FieldValidator::<str>::validate(&validator, "a@b.com").is_ok());
        assert!(FieldValidator::<str>::validate(&validator, "user.name+tag@example.co.uk").is_ok());
        assert!(FieldValidator::<str>::validate(&validator, "not-an-email").is_err());
        assert!(FieldValidator::<str>::validate(&validator, "a@b").is_err());
    }
}
