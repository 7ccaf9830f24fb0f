//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reactor ──→ Mutation ──→ Reducer ──→ State ──→ View
//!    ↑                                                        │
//!    └────────────────────────────────────────────────────────┘
//! ```
//!
//! - **Action**: User intent fed into the store
//! - **Reactor**: Turns an action into a timed schedule of mutations
//! - **Mutation**: Internal state-change instruction, never seen by the view
//! - **Reducer**: Pure function that folds a mutation into the state
//! - **State**: Immutable representation of UI state

mod action;
mod mutation;
mod reactor;
mod reducer;
mod state;

pub use action::Action;
pub use mutation::Mutation;
pub use reactor::{Reactor, Step};
pub use reducer::Reducer;
pub use state::UiState;
