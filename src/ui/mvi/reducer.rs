//! Reducer trait for MVI architecture.

use super::mutation::Mutation;
use super::state::UiState;

/// Reducer transforms state based on mutations.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Mutation) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The mutation type this reducer handles.
    type Mutation: Mutation;

    /// Apply a mutation and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, mutation: Self::Mutation) -> Self::State;
}
