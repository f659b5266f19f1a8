use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

use crate::feedback::model::Field;

/// Out-of-bounds ratings, keyed by field.
///
/// Never reaches the store: the validator produces it and the form
/// shows the messages next to each question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationFailed {
    errors: BTreeMap<Field, String>,
}

impl ValidationFailed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reject(&mut self, field: Field, message: String) {
        self.errors.insert(field, message);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn message(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.errors.keys().copied()
    }

    pub fn into_messages(self) -> BTreeMap<Field, String> {
        self.errors
    }
}

impl fmt::Display for ValidationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailed {}

/// Errors surfaced by the store, the service and the controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("Feedback {id} not found")]
    NotFound { id: u64 },

    #[error("Feedback {id} already exists")]
    DuplicateId { id: u64 },

    #[error("Invalid feedback: {0}")]
    Validation(#[from] ValidationFailed),

    #[error("Failed to submit feedback: {reason}")]
    SubmissionFailed { reason: String },

    #[error("Failed to load feedback: {reason}")]
    LoadFailed { reason: String },
}
