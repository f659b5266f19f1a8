//! The three survey questions and the rules their answers must meet.

mod questions;
mod validator;

pub use questions::{question, Question, Scale, QUESTIONS};
pub use validator::{bounds_message, validate, validate_field};
