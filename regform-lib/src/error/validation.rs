//! Validation error types

use crate::model::Field;

/// Error information for a specific field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldValidationError {
    /// The field that failed validation.
    pub field: Field,
    /// Human-readable validation error message.
    pub message: String,
}

impl FieldValidationError {
    /// Creates a new field validation error.
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field failures from one validation attempt.
///
/// Produced fresh by every validation pass and swapped in wholesale; never
/// merged with a previous attempt's errors. At most one message per field,
/// the first failing rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("validation failed for {} field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldValidationError>,
}

impl ValidationErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for one field.
    pub fn push(&mut self, error: FieldValidationError) {
        self.errors.push(error);
    }

    /// Check whether any field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failed fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// The message for one field, if it failed.
    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Iterate over all failures.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldValidationError> {
        self.errors.iter()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldValidationError;
    type IntoIter = std::vec::IntoIter<FieldValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a FieldValidationError;
    type IntoIter = std::slice::Iter<'a, FieldValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
