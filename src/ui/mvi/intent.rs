//! Base trait for intents in the MVI layer.

/// Marker trait for intent objects.
///
/// Intents carry either a user action (moving the slider, submitting)
/// or the outcome of a service call that the screen has to reflect.
pub trait Intent: Send + 'static {}
