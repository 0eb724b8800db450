//! View state and the transition function driving the interaction loop.
//!
//! [`update`] is pure: it consumes the current state and one event and
//! returns the next state plus the side effects the runtime must perform.
//! Nothing here touches the network, the clock or the terminal.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::api::types::ProfileRecord;
use crate::event::Event;

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Arm the one-shot loading timer.
    StartTimer,
    /// Fetch the profile; the completion carries `seq` back.
    StartFetch { seq: u64 },
    /// Leave the interaction loop.
    Quit,
}

/// The single mutable state behind the screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub username: String,
    pub loading: bool,
    /// Last successfully fetched profile, if any.
    pub record: Option<ProfileRecord>,
    /// Outcome of the last completed fetch when it failed.
    pub last_error: Option<Arc<String>>,
    /// Sequence number of the most recently issued fetch.
    pub request_seq: u64,
}

impl ViewState {
    /// Initial state: loading, with the first fetch and timer requested.
    pub fn init(username: impl Into<String>) -> (Self, Vec<Command>) {
        let state = Self {
            username: username.into(),
            ..Self::default()
        };
        state.refresh()
    }

    fn refresh(mut self) -> (Self, Vec<Command>) {
        self.loading = true;
        self.request_seq += 1;
        let seq = self.request_seq;
        (self, vec![Command::StartTimer, Command::StartFetch { seq }])
    }
}

/// Apply one event to the state.
pub fn update(mut state: ViewState, event: Event) -> (ViewState, Vec<Command>) {
    match event {
        Event::FetchCompleted { seq, result } => {
            if seq != state.request_seq {
                tracing::debug!(seq, latest = state.request_seq, "discarding stale fetch");
                return (state, Vec::new());
            }
            state.loading = false;
            match result {
                Ok(record) => {
                    state.record = Some(record);
                    state.last_error = None;
                }
                Err(e) => {
                    state.last_error = Some(e);
                }
            }
            (state, Vec::new())
        }
        Event::TimerFired => {
            if state.loading {
                (state, vec![Command::StartTimer])
            } else {
                (state, Vec::new())
            }
        }
        Event::KeyPressed(key) => handle_key(state, key),
        // Input loss is fatal and handled by the runtime before it gets here.
        Event::Resized | Event::InputClosed(_) => (state, Vec::new()),
    }
}

fn handle_key(state: ViewState, key: KeyEvent) -> (ViewState, Vec<Command>) {
    // Ctrl-C always quits.
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c' | 'C'))
    {
        return (state, vec![Command::Quit]);
    }

    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return (state, Vec::new());
    }

    match key.code {
        KeyCode::Char('r') => state.refresh(),
        KeyCode::Char('q') => (state, vec![Command::Quit]),
        _ => (state, Vec::new()),
    }
}
