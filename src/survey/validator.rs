use crate::feedback::{FeedbackInput, Field, ValidatedInput, ValidationFailed};

/// Message shown under a question whose answer is out of range.
pub fn bounds_message(field: Field) -> String {
    let (min, max) = field.bounds();
    format!("Please select a value between {min} and {max}")
}

/// Check one answer against its question's bounds.
pub fn validate_field(field: Field, value: i64) -> Result<u8, String> {
    if field.contains(value) {
        // in bounds, so it fits
        Ok(value as u8)
    } else {
        Err(bounds_message(field))
    }
}

/// Check all three answers together.
///
/// Either every field is in bounds and a [`ValidatedInput`] comes back, or
/// the error lists every failing field. There is no partial result.
pub fn validate(input: &FeedbackInput) -> Result<ValidatedInput, ValidationFailed> {
    let mut failed = ValidationFailed::new();
    let mut checked = [0u8; 3];
    for (slot, field) in checked.iter_mut().zip(Field::ALL) {
        match validate_field(field, input.get(field)) {
            Ok(value) => *slot = value,
            Err(message) => failed.reject(field, message),
        }
    }

    if failed.is_empty() {
        Ok(ValidatedInput::new(checked[0], checked[1], checked[2]))
    } else {
        Err(failed)
    }
}
