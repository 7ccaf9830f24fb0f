use tokio::sync::mpsc;

/// Replay-latest-then-live view of a store's state.
///
/// The first [`next`](StateStream::next) yields the snapshot that was current
/// at subscribe time; every later call yields the next reduced state. Nothing
/// is dropped for a slow reader: undelivered states queue up per subscriber.
/// Returns `None` once the store task has stopped and the backlog is drained.
pub struct StateStream<S> {
    replay: Option<S>,
    live: Option<mpsc::UnboundedReceiver<S>>,
}

impl<S> StateStream<S> {
    pub(crate) fn new(replay: S, live: Option<mpsc::UnboundedReceiver<S>>) -> Self {
        Self {
            replay: Some(replay),
            live,
        }
    }

    pub async fn next(&mut self) -> Option<S> {
        if let Some(state) = self.replay.take() {
            return Some(state);
        }
        let live = self.live.as_mut()?;
        match live.recv().await {
            Some(state) => Some(state),
            None => {
                self.live = None;
                None
            }
        }
    }
}
