pub mod config;
pub mod delete;
pub mod events;
pub mod record;
pub mod rename;

use anyhow::Result;
use timetrack_core::TimeTracker;
use timetrack_core::remote::EventsClient;

use crate::utils::tui;

/// Load the event collection, with a spinner while the request is in flight.
async fn load(tracker: &TimeTracker<EventsClient>) -> Result<()> {
    let server_url = tracker.api().base_url();
    let spinner = tui::loading_spinner(server_url);
    let loaded = tracker.load().await;
    spinner.finish_and_clear();

    if !loaded {
        anyhow::bail!(
            "{}. Is the events service at {} running?",
            timetrack_core::user_events::LOAD_FAILURE_MESSAGE,
            server_url
        );
    }

    Ok(())
}
