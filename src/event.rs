use color_eyre::eyre::OptionExt;
use crossterm::event::{Event as CrosstermEvent, KeyEvent, KeyEventKind};
use futures::{FutureExt, Stream, StreamExt};
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::api::types::ProfileRecord;

/// Representation of all possible events.
#[derive(Clone, Debug)]
pub enum Event {
    /// The loading timer elapsed.
    TimerFired,
    /// A profile fetch finished. `seq` identifies the refresh that issued it.
    FetchCompleted {
        seq: u64,
        result: ApiResult<ProfileRecord>,
    },
    /// A key was pressed in the terminal.
    KeyPressed(KeyEvent),
    /// The terminal was resized; only a redraw is needed.
    Resized,
    /// The terminal input stream ended or failed. Keys can no longer
    /// arrive, so the loop must stop with an error.
    InputClosed(String),
}

/// API result type using `Arc<String>` so errors are `Clone`.
pub type ApiResult<T> = Result<T, Arc<String>>;

/// Terminal event handler.
///
/// Spawns a background task that forwards terminal input, and exposes an
/// unbounded channel that timer and fetch tasks also send into.
#[derive(Debug)]
pub struct EventHandler {
    /// Event sender channel.
    sender: mpsc::UnboundedSender<Event>,
    /// Event receiver channel.
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    /// Constructs a new instance of [`EventHandler`] and spawns the input task.
    pub fn new() -> Self {
        let handler = Self::detached();
        let actor = InputTask::new(handler.sender.clone());
        tokio::spawn(async { actor.run(crossterm::event::EventStream::new()).await });
        handler
    }

    /// Constructs a handler without a terminal reader. Events only arrive
    /// through [`EventHandler::sender`].
    pub fn detached() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self { sender, receiver }
    }

    /// Receives the next event, blocking until one is available.
    pub async fn next(&mut self) -> color_eyre::Result<Event> {
        self.receiver
            .recv()
            .await
            .ok_or_eyre("Failed to receive event")
    }

    /// Clone the underlying sender for use in spawned async tasks.
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }
}

/// Background task that reads crossterm events.
struct InputTask {
    sender: mpsc::UnboundedSender<Event>,
}

impl InputTask {
    fn new(sender: mpsc::UnboundedSender<Event>) -> Self {
        Self { sender }
    }

    async fn run<S>(self, mut reader: S)
    where
        S: Stream<Item = io::Result<CrosstermEvent>> + Unpin,
    {
        loop {
            let crossterm_event = reader.next().fuse();
            tokio::select! {
                _ = self.sender.closed() => {
                    break;
                }
                maybe_event = crossterm_event => match maybe_event {
                    Some(Ok(evt)) => {
                        if let Some(event) = translate(evt) {
                            let _ = self.sender.send(event);
                        }
                    }
                    Some(Err(e)) => {
                        let reason = format!("terminal input error: {e}");
                        tracing::error!("{reason}");
                        let _ = self.sender.send(Event::InputClosed(reason));
                        break;
                    }
                    None => {
                        let reason = "terminal input stream ended".to_string();
                        tracing::error!("{reason}");
                        let _ = self.sender.send(Event::InputClosed(reason));
                        break;
                    }
                },
            };
        }
    }
}

/// Map a raw terminal event onto the loop's vocabulary. Key releases and
/// repeats, mouse and focus events are dropped.
fn translate(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
            Some(Event::KeyPressed(key))
        }
        CrosstermEvent::Resize(..) => Some(Event::Resized),
        _ => None,
    }
}
