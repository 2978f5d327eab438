//! Terminal rendering for timetrack types.

use chrono::{DateTime, Local, NaiveDate, Utc};
use owo_colors::OwoColorize;
use timetrack_core::UserEvent;
use timetrack_core::recorder::Elapsed;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for UserEvent {
    fn render(&self) -> String {
        let time = format!("{} - {}", format_time(self.start()), format_time(self.end()));
        let id = format!("#{}", self.id);

        match self.duration() {
            Some(duration) => {
                let length = Elapsed::from_seconds(duration.num_seconds().max(0) as u64);
                format!(
                    "{} {} {} {}",
                    time,
                    self.title,
                    format!("({length})").dimmed(),
                    id.dimmed()
                )
            }
            None => format!("{} {} {}", time, self.title, id.dimmed()),
        }
    }
}

impl Render for Elapsed {
    fn render(&self) -> String {
        format!("{} {}", "REC".red(), self.to_string().bold())
    }
}

/// Local calendar day an event starts on, if its start parses.
pub fn event_day(event: &UserEvent) -> Option<NaiveDate> {
    event.start().map(|dt| dt.with_timezone(&Local).date_naive())
}

/// Format a day as a label like "Today", "Yesterday" or "Sat Feb 1".
pub fn format_day_label(day: Option<NaiveDate>) -> String {
    let Some(day) = day else {
        return "Undated".to_string();
    };

    let today = Local::now().date_naive();
    match (today - day).num_days() {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        _ => day.format("%a %b %-d").to_string(),
    }
}

/// Local "HH:MM", or "--:--" for a missing timestamp.
fn format_time(time: Option<DateTime<Utc>>) -> String {
    match time {
        Some(dt) => dt.with_timezone(&Local).format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}
