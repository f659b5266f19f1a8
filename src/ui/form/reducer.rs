use crate::feedback::Field;
use crate::ui::form::intent::FormIntent;
use crate::ui::form::state::FormState;
use crate::ui::mvi::Reducer;
use crate::survey::QUESTIONS;

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::FocusNext => FormState {
                focused: (state.focused + 1) % QUESTIONS.len(),
                ..state
            },
            FormIntent::FocusPrev => FormState {
                focused: if state.focused == 0 {
                    QUESTIONS.len() - 1
                } else {
                    state.focused - 1
                },
                ..state
            },
            FormIntent::Increment => {
                let field = state.focused_field();
                let (_, max) = field.bounds();
                let next = (state.values.get(field) + 1).min(i64::from(max));
                change_value(state, field, next)
            }
            FormIntent::Decrement => {
                let field = state.focused_field();
                let (min, _) = field.bounds();
                let next = (state.values.get(field) - 1).max(i64::from(min));
                change_value(state, field, next)
            }
            FormIntent::SetValue { field, value } => change_value(state, field, value),
            FormIntent::Rejected(failed) => FormState {
                errors: failed.into_messages(),
                submitting: false,
                ..state
            },
            FormIntent::SubmitStarted => FormState {
                errors: Default::default(),
                submitting: true,
                ..state
            },
            FormIntent::SubmitFailed => FormState {
                submitting: false,
                ..state
            },
        }
    }
}

/// Store a new answer and drop that question's error if the value moved.
fn change_value(mut state: FormState, field: Field, value: i64) -> FormState {
    if state.submitting || state.values.get(field) == value {
        return state;
    }
    state.values.set(field, value);
    state.errors.remove(&field);
    state
}
