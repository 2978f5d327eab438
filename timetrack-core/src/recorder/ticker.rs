//! Periodic redraw trigger for a running recording.
//!
//! The ticker never touches the store. It only bumps a counter so a
//! front-end knows when to re-render; the displayed time is always derived
//! from the session's start timestamp.

use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Handle to a running periodic task. Dropping it stops the task.
pub struct Ticker {
    count: watch::Receiver<u64>,
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawn the task on the current tokio runtime. The first tick fires one
    /// `period` after the call.
    pub fn start(period: Duration) -> Self {
        let (tx, rx) = watch::channel(0u64);

        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                interval.tick().await;
                tx.send_modify(|count| *count += 1);
            }
        });

        Ticker { count: rx, handle }
    }

    /// Number of ticks so far. Never decreases.
    pub fn count(&self) -> u64 {
        *self.count.borrow()
    }

    /// Receiver that is notified on every tick. It reports the channel as
    /// closed once the ticker is cancelled.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.count.clone()
    }

    pub fn is_active(&self) -> bool {
        !self.handle.is_finished()
    }

    pub fn cancel(self) {
        // Drop does the work.
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
