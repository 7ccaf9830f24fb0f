//! Action → mutation schedule for the counter.

use std::time::Duration;

use crate::ui::mvi::{Reactor, Reducer, Step};

use super::action::CounterAction;
use super::mutation::CounterMutation;
use super::reducer::CounterReducer;
use super::state::CounterState;

/// Simulated backend latency between `SetLoading(true)` and the value change.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Reactor for the counter screen.
///
/// Every action produces the same shape of schedule:
/// `SetLoading(true)`, wait `delay`, value change, `SetLoading(false)`.
#[derive(Debug, Clone, Copy)]
pub struct CounterReactor {
    delay: Duration,
}

impl CounterReactor {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for CounterReactor {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl Reducer for CounterReactor {
    type State = CounterState;
    type Mutation = CounterMutation;

    fn reduce(state: Self::State, mutation: Self::Mutation) -> Self::State {
        CounterReducer::reduce(state, mutation)
    }
}

impl Reactor for CounterReactor {
    type Action = CounterAction;

    fn mutate(&self, action: Self::Action) -> Vec<Step<Self::Mutation>> {
        let change = match action {
            CounterAction::Increase => CounterMutation::IncreaseValue,
            CounterAction::Decrease => CounterMutation::DecreaseValue,
        };
        vec![
            Step::Emit(CounterMutation::SetLoading(true)),
            Step::Delay(self.delay),
            Step::Emit(change),
            Step::Emit(CounterMutation::SetLoading(false)),
        ]
    }
}
