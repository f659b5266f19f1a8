use std::collections::BTreeMap;

use crate::feedback::{FeedbackInput, Field};
use crate::survey::QUESTIONS;
use crate::ui::mvi::UiState;

/// Answers and per-question errors on the form screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub values: FeedbackInput,
    /// Messages from the last failed validation, cleared field by field.
    pub errors: BTreeMap<Field, String>,
    /// Index into [`QUESTIONS`] of the question with keyboard focus.
    pub focused: usize,
    /// A submission is in flight; answers are frozen until it settles.
    pub submitting: bool,
}

impl UiState for FormState {}

impl FormState {
    pub fn focused_field(&self) -> Field {
        QUESTIONS[self.focused.min(QUESTIONS.len() - 1)].field
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Share of questions whose current answer is in bounds, 0..=100.
    pub fn completion_percentage(&self) -> u16 {
        let valid = Field::ALL
            .iter()
            .filter(|field| field.contains(self.values.get(**field)))
            .count();
        ((valid * 100 + Field::ALL.len() / 2) / Field::ALL.len()) as u16
    }
}
