//! Per-field validation errors for inline display.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One failed field, addressed by its form field name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All field errors from one submission attempt.
///
/// Collected in form order so the UI can render every inline message at
/// once rather than stopping at the first failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Error)]
#[error("validation failed for {} field(s)", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for a field.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The first error recorded for a field, if any.
    pub fn for_field(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }
}

/// True if an option-select field holds a real choice rather than nothing
/// or a `-- Select ... --` placeholder.
pub(crate) fn is_selected(value: &Option<String>) -> bool {
    match value {
        Some(v) => !v.trim().is_empty() && !v.starts_with("-- Select"),
        None => false,
    }
}
