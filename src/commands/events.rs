use std::collections::BTreeMap;

use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use timetrack_core::TimeTracker;
use timetrack_core::UserEvent;
use timetrack_core::remote::EventsClient;

use crate::render::{Render, event_day, format_day_label};

pub async fn run(tracker: TimeTracker<EventsClient>) -> Result<()> {
    super::load(&tracker).await?;

    let events = tracker.events();
    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    // Days in calendar order; within a day, events keep the store's order.
    let mut days: BTreeMap<Option<NaiveDate>, Vec<&UserEvent>> = BTreeMap::new();
    for event in &events {
        days.entry(event_day(event)).or_default().push(event);
    }

    for (i, (day, events)) in days.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", format_day_label(*day).bold());
        for event in events {
            println!("  {}", event.render());
        }
    }

    Ok(())
}
