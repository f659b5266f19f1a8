use crate::feedback::{Field, ValidationFailed};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FormIntent {
    FocusNext,
    FocusPrev,
    /// Move the focused slider one step up, stopping at the maximum.
    Increment,
    /// Move the focused slider one step down, stopping at the minimum.
    Decrement,
    SetValue { field: Field, value: i64 },
    /// Validation rejected the answers; show the messages.
    Rejected(ValidationFailed),
    SubmitStarted,
    SubmitFailed,
}

impl Intent for FormIntent {}
