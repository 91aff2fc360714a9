//! DJ Lazy playlist builder library
//!
//! This library turns a scraped "new releases" listing into a Spotify playlist.
//! It authenticates against the Spotify Web API, scrapes the listing page,
//! searches the catalog for every scraped album, collects the tracks of the
//! matches and appends them to a freshly created playlist in throttled batches.
//!
//! # Modules
//!
//! - `api` - HTTP handler for the local OAuth callback listener
//! - `cli` - Command implementations driven by `main`
//! - `config` - Configuration management and environment variables
//! - `error` - The crate-wide error type
//! - `listing` - New-releases listing scraper
//! - `matching` - Picks one catalog album per scraped entry
//! - `orchestrator` - Sequences one run from user lookup to report
//! - `pipeline` - Batched, throttled track submission
//! - `report` - Run report rendering
//! - `server` - One-shot local HTTP listener for OAuth callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod listing;
pub mod matching;
pub mod orchestrator;
pub mod pipeline;
pub mod report;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{DjError, Result};

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for stage transitions and general
/// status updates throughout a run.
///
/// # Example
///
/// ```
/// info!("Scraping {}", url);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Playlist {} created", playlist_id);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1 right after printing. Only used
/// for failures that end the run.
///
/// # Example
///
/// ```
/// error!("Something went wrong while {}: {}", stage, err);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues the operator should notice, such as an
/// unknown `--status` value or a listing page without rows.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
