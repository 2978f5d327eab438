//! Elapsed time of a recording session, split into clock fields.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::event::parse_timestamp;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Elapsed {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Elapsed {
    /// Split a whole number of seconds into hours, minutes and seconds.
    pub fn from_seconds(total: u64) -> Self {
        let mut seconds = total;

        let hours = seconds / 3600;
        seconds -= hours * 3600;

        let minutes = seconds / 60;
        seconds -= minutes * 60;

        Elapsed {
            hours,
            minutes,
            seconds,
        }
    }

    /// Time since `date_start`, floored to whole seconds.
    ///
    /// Recomputed from the wall clock on every call, so a missed redraw never
    /// makes it drift. An empty, unparseable or future `date_start` yields zero.
    pub fn since(date_start: &str, now: DateTime<Utc>) -> Self {
        let Some(start) = parse_timestamp(date_start) else {
            return Elapsed::default();
        };

        let seconds = (now - start).num_seconds().max(0) as u64;
        Elapsed::from_seconds(seconds)
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            add_zero(self.hours),
            add_zero(self.minutes),
            add_zero(self.seconds)
        )
    }
}

/// Zero-pad to at least two digits.
pub fn add_zero(n: u64) -> String {
    format!("{n:02}")
}
