//! Base trait for actions (user intents) in MVI architecture.

/// Marker trait for action objects.
///
/// Actions represent discrete user intents (button presses, key presses).
/// They are consumed by a [`Reactor`](super::Reactor), which decides what
/// mutations to emit and when.
pub trait Action: Send + 'static {}
