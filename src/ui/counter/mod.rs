//! Counter feature module.
//!
//! A single value that is nudged up or down by user actions, with a
//! simulated slow backend: every action flips a loading flag on, waits,
//! applies the change, then flips the flag off.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `action.rs` - User intents (Increase, Decrease)
//! - `mutation.rs` - Internal state changes (IncreaseValue, DecreaseValue, SetLoading)
//! - `reactor.rs` - Action → timed mutation schedule
//! - `reducer.rs` - Mutation → state (pure, no side effects)
//! - `state.rs` - Value and loading flag

mod action;
mod mutation;
mod reactor;
mod reducer;
mod state;

pub use action::CounterAction;
pub use mutation::CounterMutation;
pub use reactor::{CounterReactor, DEFAULT_DELAY};
pub use reducer::CounterReducer;
pub use state::CounterState;
