// Validation Rules - declarative per-field rule sets
use super::validators::{EmailValidator, FieldValidator, RangeValidator, StringValidator};
use super::{ValidationError, ValidationResult};

/// A form field as seen by the rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(i64),
}

/// Implemented by form structs so a [`FormSchema`] can read them by field name
pub trait FormValues {
    /// Current value of `field`, or `None` if the form has no such field
    fn value(&self, field: &str) -> Option<FieldValue<'_>>;
}

/// One constraint on a field; each carries the message shown when it fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Text must be non-blank. Numbers always satisfy it.
    Required(String),
    /// Text must have at least this many characters
    MinLength(usize, String),
    /// Text must look like an email address
    Email(String),
    /// Number must be at least this value
    Min(i64, String),
    /// Number must lie within the inclusive range
    Range(i64, i64, String),
    /// Value must equal another field's value
    EqualsField(String, String),
}

impl Rule {
    fn check(&self, value: FieldValue<'_>, form: &dyn FormValues) -> Result<(), String> {
        let failed = match (self, value) {
            (Self::Required(_), FieldValue::Text(text)) => {
                FieldValidator::<str>::validate(&StringValidator::new().not_empty(), text).is_err()
            }
            (Self::Required(_), FieldValue::Number(_)) => false,
            (Self::MinLength(min, _), FieldValue::Text(text)) => {
                FieldValidator::<str>::validate(&StringValidator::new().min_length(*min), text)
                    .is_err()
            }
            (Self::Email(_), FieldValue::Text(text)) => {
                FieldValidator::<str>::validate(&EmailValidator::new(), text).is_err()
            }
            (Self::Min(min, _), FieldValue::Number(number)) => {
                RangeValidator::at_least(*min).validate(&number).is_err()
            }
            (Self::Range(min, max, _), FieldValue::Number(number)) => {
                RangeValidator::new(*min, *max).validate(&number).is_err()
            }
            (Self::EqualsField(other, _), value) => form.value(other) != Some(value),
            // Text rules on numbers and number rules on text never match
            _ => true,
        };

        if failed {
            Err(self.message().to_string())
        } else {
            Ok(())
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Required(message)
            | Self::MinLength(_, message)
            | Self::Email(message)
            | Self::Min(_, message)
            | Self::Range(_, _, message)
            | Self::EqualsField(_, message) => message,
        }
    }
}

/// Ordered rules for one field; the first failing rule is the one reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules {
    field: String,
    rules: Vec<Rule>,
}

impl FieldRules {
    pub fn new(field: impl Into<String>) -> Self {
        Self { field: field.into(), rules: Vec::new() }
    }

    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.rules.push(Rule::Required(message.into()));
        self
    }

    pub fn min_length(mut self, min: usize, message: impl Into<String>) -> Self {
        self.rules.push(Rule::MinLength(min, message.into()));
        self
    }

    pub fn email(mut self, message: impl Into<String>) -> Self {
        self.rules.push(Rule::Email(message.into()));
        self
    }

    pub fn min(mut self, min: i64, message: impl Into<String>) -> Self {
        self.rules.push(Rule::Min(min, message.into()));
        self
    }

    pub fn range(mut self, min: i64, max: i64, message: impl Into<String>) -> Self {
        self.rules.push(Rule::Range(min, max, message.into()));
        self
    }

    pub fn equals_field(mut self, other: impl Into<String>, message: impl Into<String>) -> Self {
        self.rules.push(Rule::EqualsField(other.into(), message.into()));
        self
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    fn check(&self, form: &dyn FormValues) -> Option<String> {
        let Some(value) = form.value(&self.field) else {
            return Some(format!("unknown field: {}", self.field));
        };
        self.rules.iter().find_map(|rule| rule.check(value, form).err())
    }
}

/// A form's complete rule set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSchema {
    fields: Vec<FieldRules>,
}

impl FormSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field's rules (builder style)
    pub fn field(mut self, rules: FieldRules) -> Self {
        self.fields.push(rules);
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validate every field; at most one error per field, in schema order
    pub fn validate(&self, form: &dyn FormValues) -> ValidationResult<()> {
        let mut errors = ValidationError::new();
        for rules in &self.fields {
            if let Some(message) = rules.check(form) {
                errors.add_field_error(rules.field(), message);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
