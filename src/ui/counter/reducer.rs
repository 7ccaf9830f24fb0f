//! Reducer for the counter screen.

use crate::ui::mvi::Reducer;

use super::mutation::CounterMutation;
use super::state::CounterState;

/// Pure reducer: each mutation touches exactly one field.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Mutation = CounterMutation;

    fn reduce(state: Self::State, mutation: Self::Mutation) -> Self::State {
        match mutation {
            CounterMutation::IncreaseValue => CounterState {
                value: state.value.saturating_add(1),
                ..state
            },
            CounterMutation::DecreaseValue => CounterState {
                value: state.value.saturating_sub(1),
                ..state
            },
            CounterMutation::SetLoading(is_loading) => CounterState { is_loading, ..state },
        }
    }
}
