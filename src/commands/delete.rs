use anyhow::Result;
use owo_colors::OwoColorize;
use timetrack_core::TimeTracker;
use timetrack_core::remote::EventsClient;
use timetrack_core::user_events::select_user_event;

use crate::render::Render;

pub async fn run(tracker: TimeTracker<EventsClient>, id: u64) -> Result<()> {
    super::load(&tracker).await?;

    let Some(event) = select_user_event(&tracker.snapshot(), id).cloned() else {
        anyhow::bail!("Event #{} not found", id);
    };

    if !tracker.delete_by_id(id).await {
        anyhow::bail!("Event #{} was not deleted", id);
    }

    println!("{} Deleted {}", "-".red(), event.render());
    Ok(())
}
