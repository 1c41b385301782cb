//! Batch orchestration across a resolved track list.

use super::SoundcloudDownloader;
use crate::types::{RunStats, Track};

impl SoundcloudDownloader {
    /// Retrieve every track in order, bounded by `limit`
    ///
    /// The effective length is `min(limit, len)` when `limit > 0`; zero
    /// means the whole list. Items run strictly in the order the resolver
    /// produced them and strictly sequentially. Every dispatched item is
    /// tallied into the returned [`RunStats`], which starts at zero for each
    /// call.
    pub async fn run_batch(&self, tracks: &[Track], limit: usize) -> RunStats {
        let effective = if limit > 0 {
            limit.min(tracks.len())
        } else {
            tracks.len()
        };

        let mut stats = RunStats::default();
        for track in &tracks[..effective] {
            let outcome = self.retrieve(track).await;
            stats.record(outcome);
        }

        if stats.errors() > 0 {
            tracing::warn!(
                attempted = stats.attempted,
                succeeded = stats.succeeded,
                failed = stats.failed,
                no_stream = stats.no_stream,
                "batch finished with errors"
            );
        } else {
            tracing::info!(
                attempted = stats.attempted,
                succeeded = stats.succeeded,
                "batch finished"
            );
        }
        stats
    }
}
