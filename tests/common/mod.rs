//! Shared test utilities.

#![allow(dead_code)]

use std::time::Duration;

use counter::shutdown::ShutdownCoordinator;
use counter::store::{self, DispatchOrder, StateStream, StoreHandle};
use counter::ui::counter::{CounterReactor, CounterState};

pub const DELAY: Duration = Duration::from_secs(1);

pub fn state(value: i64, is_loading: bool) -> CounterState {
    CounterState { value, is_loading }
}

/// Spawn a counter store with the default one-second delay.
///
/// The coordinator is returned so tests can trigger shutdown; dropping it
/// does not stop the store.
pub fn spawn_counter(order: DispatchOrder) -> (StoreHandle<CounterReactor>, ShutdownCoordinator) {
    let shutdown = ShutdownCoordinator::new();
    let handle = store::spawn(CounterReactor::new(DELAY), order, shutdown.handle());
    (handle, shutdown)
}

/// Pull exactly `count` states from the stream.
pub async fn take(states: &mut StateStream<CounterState>, count: usize) -> Vec<CounterState> {
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        match states.next().await {
            Some(state) => out.push(state),
            None => break,
        }
    }
    out
}

/// Drain a stream until the store closes it.
pub async fn drain(states: &mut StateStream<CounterState>) -> Vec<CounterState> {
    let mut out = Vec::new();
    while let Some(state) = states.next().await {
        out.push(state);
    }
    out
}
