use serde::Serialize;

use crate::ui::mvi::UiState;

/// Snapshot of what the counter screen displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CounterState {
    pub value: i64,
    pub is_loading: bool,
}

impl UiState for CounterState {}
