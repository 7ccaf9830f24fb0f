//! Actions for the counter screen.

use crate::ui::mvi::Action;

/// Actions that can be dispatched to the counter store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    /// User pressed the `+` button.
    Increase,
    /// User pressed the `-` button.
    Decrease,
}

impl Action for CounterAction {}
