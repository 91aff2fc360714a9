//! Batched, throttled track submission.
//!
//! Track URIs are written to the playlist in consecutive batches of at most
//! [`BATCH_SIZE`]. Batches go out strictly one after another: the next write
//! starts only after the previous one was acknowledged and [`BATCH_DELAY`]
//! has elapsed. The delay also follows the final batch.
//!
//! There is no retry. The first failed write ends the submission and the
//! error is returned as-is; batches written before it stay in the playlist.

use std::time::Duration;

use tokio::time::sleep;

use crate::{
    error::Result,
    info,
    spotify::{Catalog, playlist::MAX_TRACKS_PER_REQUEST},
    types::{PlaylistTarget, TrackUri},
};

pub const BATCH_SIZE: usize = MAX_TRACKS_PER_REQUEST;
pub const BATCH_DELAY: Duration = Duration::from_millis(2000);

/// Batch size and inter-batch delay of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batching {
    size: usize,
    delay: Duration,
}

impl Default for Batching {
    fn default() -> Self {
        Self {
            size: BATCH_SIZE,
            delay: BATCH_DELAY,
        }
    }
}

impl Batching {
    /// Size is clamped to `1..=BATCH_SIZE`.
    pub fn new(size: usize, delay: Duration) -> Self {
        Self {
            size: size.clamp(1, BATCH_SIZE),
            delay,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Splits `uris` into consecutive batches. Empty input yields no batches.
    pub fn partition<'a>(&self, uris: &'a [TrackUri]) -> std::slice::Chunks<'a, TrackUri> {
        uris.chunks(self.size)
    }

    pub fn batch_count(&self, len: usize) -> usize {
        len.div_ceil(self.size)
    }
}

/// Writes `uris` to the target playlist batch by batch.
pub async fn submit_in_batches(
    catalog: &dyn Catalog,
    target: &PlaylistTarget,
    uris: &[TrackUri],
    batching: Batching,
) -> Result<()> {
    let total = batching.batch_count(uris.len());

    for (index, batch) in batching.partition(uris).enumerate() {
        catalog.add_tracks(target, batch).await?;
        info!(
            "Added batch {}/{} ({} tracks) to playlist {}",
            index + 1,
            total,
            batch.len(),
            target.playlist_id
        );
        sleep(batching.delay()).await;
    }

    Ok(())
}
