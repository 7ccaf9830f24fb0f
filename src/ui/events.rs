use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc;

use crate::shutdown::ShutdownHandle;

/// How often the input thread re-checks the shutdown flag.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub enum AppEvent {
    Key(KeyEvent),
    /// Terminal was resized; the next draw picks up the new size.
    Resize,
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    reader: thread::JoinHandle<()>,
}

impl EventHandler {
    /// Spawn the blocking terminal reader thread.
    pub fn new(shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();

        let reader = thread::spawn(move || loop {
            if shutdown.is_shutting_down() {
                break;
            }

            match event::poll(POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(err) => {
                    tracing::error!(error = %err, "terminal poll failed");
                    break;
                }
            }

            let app_event = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Resize(_, _)) => AppEvent::Resize,
                Ok(_) => continue,
                Err(err) => {
                    tracing::error!(error = %err, "terminal read failed");
                    break;
                }
            };

            if tx.send(app_event).is_err() {
                break;
            }
        });

        Self { rx, reader }
    }

    /// Next terminal event; `None` once the reader thread has exited.
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    /// Wait for the reader thread to exit. It only notices shutdown between
    /// polls, so signal the handle it was built with first.
    pub async fn stop(self) {
        drop(self.rx);
        let reader = self.reader;
        match tokio::task::spawn_blocking(move || reader.join()).await {
            Ok(Ok(())) => {}
            Ok(Err(_)) => tracing::error!("input thread panicked"),
            Err(err) => tracing::error!(error = %err, "failed to join input thread"),
        }
    }
}
