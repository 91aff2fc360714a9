use std::time::Duration;

use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use rand::{Rng, distr::Alphanumeric};

/// Random value for the OAuth `state` parameter.
pub fn generate_state() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

/// Title of the playlist created for a run on `date`, e.g. `DJ Lazy 3/7/2025`.
pub fn playlist_title(date: NaiveDate) -> String {
    format!("DJ Lazy {}", date.format("%-m/%-d/%Y"))
}

/// Normalizes the `--max` flag: absent or zero means unlimited.
pub fn normalize_max(max: Option<usize>) -> Option<usize> {
    max.filter(|m| *m > 0)
}

pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
