use anyhow::Result;
use owo_colors::OwoColorize;
use timetrack_core::TimeTracker;
use timetrack_core::remote::EventsClient;
use timetrack_core::user_events::select_user_event;

use crate::render::Render;

pub async fn run(tracker: TimeTracker<EventsClient>, id: u64, title: String) -> Result<()> {
    super::load(&tracker).await?;

    let Some(mut event) = select_user_event(&tracker.snapshot(), id).cloned() else {
        anyhow::bail!("Event #{} not found", id);
    };
    event.title = title;

    let Some(updated) = tracker.update_event(&event).await else {
        anyhow::bail!("Failed to update event #{}", id);
    };

    println!("{} {}", "~".yellow(), updated.render());
    Ok(())
}
