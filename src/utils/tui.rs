use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const SPINNER_TICK: Duration = Duration::from_millis(100);

/// Spinner shown while the event collection is fetched from `server_url`.
pub fn loading_spinner(server_url: &str) -> ProgressBar {
    let spinner = with_loading_style(ProgressBar::new_spinner(), server_url);
    spinner.enable_steady_tick(SPINNER_TICK);
    spinner
}

fn with_loading_style(spinner: ProgressBar, server_url: &str) -> ProgressBar {
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ")
        .template("{spinner:.cyan} {msg:.dim}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());

    spinner.set_style(style);
    spinner.set_message(format!("Loading events from {server_url}"));
    spinner
}
