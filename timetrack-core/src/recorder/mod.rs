//! Recorder: the local timing session.
//!
//! `date_start` is empty while idle and holds the session's start timestamp
//! while recording. Nothing here is persisted; the session lives only as
//! long as the store does.

mod elapsed;
mod ticker;

pub use elapsed::{Elapsed, add_zero};
pub use ticker::Ticker;

use chrono::{DateTime, Utc};

use crate::event::iso_timestamp;
use crate::store::{Action, RootState};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecorderState {
    pub date_start: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecorderAction {
    /// Begin a session at `at`. Issued while already recording, it moves the
    /// start to the new timestamp.
    Start { at: DateTime<Utc> },
    Stop,
}

/// Start a session now.
pub fn start() -> RecorderAction {
    RecorderAction::Start { at: Utc::now() }
}

pub fn stop() -> RecorderAction {
    RecorderAction::Stop
}

pub fn reducer(state: RecorderState, action: &Action) -> RecorderState {
    match action {
        Action::Recorder(RecorderAction::Start { at }) => RecorderState {
            date_start: iso_timestamp(*at),
        },
        Action::Recorder(RecorderAction::Stop) => RecorderState {
            date_start: String::new(),
        },
        _ => state,
    }
}

pub fn select_recorder_state(state: &RootState) -> &RecorderState {
    &state.recorder
}

pub fn select_date_start(state: &RootState) -> &str {
    &select_recorder_state(state).date_start
}

pub fn is_recording(state: &RootState) -> bool {
    !select_date_start(state).is_empty()
}
