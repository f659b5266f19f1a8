//! Base trait for UI state in the MVI layer.

/// Marker trait for screen state.
///
/// `Default` lets the app move the state out with `std::mem::take`
/// while a reducer runs; `PartialEq` lets tests compare whole states.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
