//! Reactor trait: the action → mutation half of the pipeline.

use std::time::Duration;

use super::action::Action;
use super::reducer::Reducer;

/// One step of a mutation schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<M> {
    /// Emit a mutation to the reducer right away.
    Emit(M),
    /// Suspend this schedule without blocking the store.
    Delay(Duration),
}

/// Maps actions to ordered mutation schedules.
///
/// `mutate` only describes *what* happens and *when*; the store owns the
/// clock and applies each emitted mutation through [`Reducer::reduce`].
pub trait Reactor: Reducer + Send + 'static {
    /// The action type this reactor accepts.
    type Action: Action + std::fmt::Debug;

    /// State the store starts from.
    fn initial_state(&self) -> Self::State {
        Default::default()
    }

    /// Build the mutation schedule for one action.
    fn mutate(&self, action: Self::Action) -> Vec<Step<Self::Mutation>>;
}
