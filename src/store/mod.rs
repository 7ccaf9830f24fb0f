//! Reactive state container.
//!
//! A [`StoreHandle`] feeds actions to a single tokio task that owns the
//! current state. That task asks the [`Reactor`] for a mutation schedule,
//! lays it on the timeline (see [`DispatchOrder`]), and folds every due
//! mutation through the reducer, publishing each new snapshot.
//!
//! ```text
//! dispatch ─→ [action queue] ─→ store task ─→ Scheduler ─→ reduce ─→ subscribers
//!                                   ↑ sleep_until(next deadline)
//! ```

mod error;
mod order;
mod schedule;
mod stream;

pub use error::StoreError;
pub use order::DispatchOrder;
pub use stream::StateStream;

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

use crate::shutdown::ShutdownHandle;
use crate::ui::mvi::Reactor;
use schedule::Scheduler;

struct Published<S> {
    current: S,
    /// One sender per live subscriber; `None` once the store has stopped.
    subscribers: Option<Vec<mpsc::UnboundedSender<S>>>,
}

/// Current snapshot plus fan-out. Both sit behind one lock so a new
/// subscriber can never miss or double-see a state.
struct Shared<S> {
    inner: Mutex<Published<S>>,
}

impl<S: Clone> Shared<S> {
    fn new(initial: S) -> Self {
        Self {
            inner: Mutex::new(Published {
                current: initial,
                subscribers: Some(Vec::new()),
            }),
        }
    }

    fn current(&self) -> S {
        self.inner.lock().current.clone()
    }

    fn publish(&self, state: S) {
        let mut inner = self.inner.lock();
        inner.current = state.clone();
        if let Some(subscribers) = &mut inner.subscribers {
            subscribers.retain(|tx| tx.send(state.clone()).is_ok());
        }
    }

    fn subscribe(&self) -> StateStream<S> {
        let mut inner = self.inner.lock();
        let replay = inner.current.clone();
        let live = inner.subscribers.as_mut().map(|subscribers| {
            let (tx, rx) = mpsc::unbounded_channel();
            subscribers.push(tx);
            rx
        });
        StateStream::new(replay, live)
    }

    fn close(&self) {
        self.inner.lock().subscribers = None;
    }

    fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.as_ref().map_or(0, Vec::len)
    }
}

/// Cloneable front door to a running store.
pub struct StoreHandle<R: Reactor> {
    actions: mpsc::UnboundedSender<R::Action>,
    shared: Arc<Shared<R::State>>,
}

impl<R: Reactor> Clone for StoreHandle<R> {
    fn clone(&self) -> Self {
        Self {
            actions: self.actions.clone(),
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<R: Reactor> StoreHandle<R> {
    /// Queue an action. Never blocks; after shutdown the action is logged and dropped.
    pub fn dispatch(&self, action: R::Action) {
        if let Err(err) = self.try_dispatch(action) {
            tracing::warn!(error = %err, "dispatch ignored");
        }
    }

    pub fn try_dispatch(&self, action: R::Action) -> Result<(), StoreError> {
        self.actions.send(action).map_err(|_| StoreError::Closed)
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> R::State {
        self.shared.current()
    }

    /// Current state first, then every state produced after it.
    pub fn subscribe(&self) -> StateStream<R::State> {
        self.shared.subscribe()
    }
}

/// Start the store task on the current tokio runtime.
///
/// The task stops when `shutdown` fires (pending schedules are dropped), or
/// when every handle is gone and all pending schedules have completed.
/// Either way, open [`StateStream`]s end after that.
pub fn spawn<R: Reactor>(
    reactor: R,
    order: DispatchOrder,
    shutdown: ShutdownHandle,
) -> StoreHandle<R> {
    let (tx, rx) = mpsc::unbounded_channel();
    let shared = Arc::new(Shared::new(reactor.initial_state()));
    let task_shared = Arc::clone(&shared);

    tokio::spawn(async move {
        tracing::info!(%order, "store started");
        run(reactor, order, rx, &task_shared, shutdown).await;
        tracing::info!(subscribers = task_shared.subscriber_count(), "store stopped");
        task_shared.close();
    });

    StoreHandle {
        actions: tx,
        shared,
    }
}

async fn run<R: Reactor>(
    reactor: R,
    order: DispatchOrder,
    mut actions: mpsc::UnboundedReceiver<R::Action>,
    shared: &Shared<R::State>,
    shutdown: ShutdownHandle,
) {
    let mut scheduler = Scheduler::new(order);
    let mut state = shared.current();
    let mut accepting = true;

    loop {
        let deadline = scheduler.next_deadline();
        let timer = async move {
            match deadline {
                Some(at) => sleep_until(at).await,
                None => std::future::pending().await,
            }
        };

        let emitted = tokio::select! {
            biased;
            _ = shutdown.wait() => {
                if !scheduler.is_idle() {
                    tracing::info!(pending = scheduler.pending(), "shutdown with schedules in flight");
                }
                return;
            }
            _ = timer => scheduler.advance(Instant::now()),
            action = actions.recv(), if accepting => match action {
                Some(action) => {
                    tracing::debug!(?action, pending = scheduler.pending(), "dispatch");
                    scheduler.push(reactor.mutate(action), Instant::now())
                }
                None => {
                    accepting = false;
                    Vec::new()
                }
            },
        };

        for mutation in emitted {
            tracing::debug!(?mutation, "reduce");
            state = R::reduce(state, mutation);
            shared.publish(state.clone());
        }

        if !accepting && scheduler.is_idle() {
            return;
        }
    }
}
