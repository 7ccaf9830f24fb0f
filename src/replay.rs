//! Headless mode: dispatch a scripted burst of actions and stream every
//! resulting state as JSON lines.

use std::io::Write;

use thiserror::Error;

use crate::shutdown::ShutdownHandle;
use crate::store::{self, DispatchOrder};
use crate::ui::counter::{CounterAction, CounterReactor};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("invalid character {ch:?} at position {position}; expected '+' or '-'")]
    InvalidChar { ch: char, position: usize },
}

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("failed to write state: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode state: {0}")]
    Json(#[from] serde_json::Error),
    #[error("interrupted after {written} states; output is incomplete")]
    Interrupted { written: usize },
}

/// Parse a `+`/`-` script. Whitespace and commas are ignored.
pub fn parse_script(script: &str) -> Result<Vec<CounterAction>, ScriptError> {
    script
        .chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_whitespace() && *ch != ',')
        .map(|(position, ch)| match ch {
            '+' => Ok(CounterAction::Increase),
            '-' => Ok(CounterAction::Decrease),
            ch => Err(ScriptError::InvalidChar { ch, position }),
        })
        .collect()
}

/// Dispatch all `actions` at once, then write each state (starting with the
/// initial one) to `out` until every schedule has finished.
///
/// Returns the number of states written.
pub async fn replay<W: Write>(
    actions: Vec<CounterAction>,
    reactor: CounterReactor,
    order: DispatchOrder,
    shutdown: ShutdownHandle,
    out: &mut W,
) -> Result<usize, ReplayError> {
    let handle = store::spawn(reactor, order, shutdown.clone());
    let mut states = handle.subscribe();

    tracing::info!(actions = actions.len(), %order, "replaying script");
    for action in actions {
        handle.dispatch(action);
    }
    // Dropping the last handle lets the store drain and close the stream.
    drop(handle);

    let mut written = 0;
    while let Some(state) = states.next().await {
        serde_json::to_writer(&mut *out, &state)?;
        writeln!(out)?;
        written += 1;
    }
    out.flush()?;

    // The stream also ends on shutdown, with schedules still in flight.
    if shutdown.is_shutting_down() {
        return Err(ReplayError::Interrupted { written });
    }
    Ok(written)
}
