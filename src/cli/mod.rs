//! # CLI Module
//!
//! User-facing command implementations. `main` parses the flags and hands
//! over to these functions, which own operator output and the process exit
//! code.
//!
//! ## Commands
//!
//! - [`playlist`] - Authorizes, scrapes the listing, matches releases against
//!   the catalog and fills a new playlist in throttled batches. Any failure
//!   prints the stage it happened in and exits with code 1.
//!
//! ## Usage Patterns
//!
//! ```bash
//! djlazy                          # Public playlist with every matched album
//! djlazy --max 10                 # Stop after ten matched albums
//! djlazy --status private         # Private playlist
//! djlazy completions zsh          # Shell completions
//! ```

mod playlist;

pub use playlist::playlist;
