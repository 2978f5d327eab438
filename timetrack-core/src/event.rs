//! Event types exchanged with the remote `/events` service.

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned event identifier.
pub type EventId = u64;

/// A recorded time interval with a title.
///
/// Timestamps are kept as the strings the server sent. `date_start <= date_end`
/// is expected but not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEvent {
    pub id: EventId,
    pub title: String,
    pub date_start: String,
    pub date_end: String,
}

/// Body of a create request: an event the server has not assigned an id to yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserEvent {
    pub title: String,
    pub date_start: String,
    pub date_end: String,
}

impl UserEvent {
    pub fn start(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date_start)
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.date_end)
    }

    /// Length of the interval, if both ends parse.
    pub fn duration(&self) -> Option<Duration> {
        Some(self.end()? - self.start()?)
    }
}

impl fmt::Display for UserEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Format a timestamp the way browsers do for `Date.toISOString()`
/// (`2025-02-01T10:00:00.000Z`).
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parse an RFC 3339 timestamp into UTC. Empty or malformed input yields `None`.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
