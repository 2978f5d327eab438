use std::io::Write;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use timetrack_core::TimeTracker;
use timetrack_core::remote::EventsClient;

use crate::render::Render;

pub async fn run(mut tracker: TimeTracker<EventsClient>, discard: bool) -> Result<()> {
    tracker.start();
    let mut redraws = tracker
        .redraws()
        .context("Recorder did not start its redraw timer")?;

    println!("{}", "Recording. Press Ctrl-C to stop.".dimmed());
    draw(&tracker)?;

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            signal = &mut ctrl_c => {
                signal.context("Failed to listen for Ctrl-C")?;
                break;
            }
            changed = redraws.changed() => {
                if changed.is_err() {
                    break;
                }
                draw(&tracker)?;
            }
        }
    }
    println!();

    let elapsed = tracker.elapsed();

    if discard {
        tracker.stop();
        println!("Discarded {}", elapsed.to_string().dimmed());
        return Ok(());
    }

    // The event takes its start from the running session, so save first.
    let created = tracker.create_from_current_recording().await;
    tracker.stop();

    match created {
        Some(event) => {
            println!(
                "{} Saved {} {}",
                "+".green(),
                event.render(),
                format!("[{elapsed}]").dimmed()
            );
            Ok(())
        }
        None => anyhow::bail!(
            "Failed to save the recording. Is the events service at {} running?",
            tracker.api().base_url()
        ),
    }
}

fn draw(tracker: &TimeTracker<EventsClient>) -> Result<()> {
    let mut stdout = std::io::stdout();
    write!(stdout, "\r{}", tracker.elapsed().render())?;
    stdout.flush()?;
    Ok(())
}
