//! Reducer trait for the MVI layer.

use super::intent::Intent;
use super::state::UiState;

/// Turns a state and an intent into the next state.
///
/// Reducers never touch the service or the terminal. Anything with side
/// effects happens in [`crate::ui::app::App`] before or after dispatching.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
