//! Core downloader implementation split into focused submodules.
//!
//! The [`SoundcloudDownloader`] struct and its methods are organized by
//! domain:
//! - `retrieve` - Per-track retrieval (existence check, stream lookup, byte
//!   transfer, file write)
//! - `batch` - Batch orchestration across resolved track lists

mod batch;
mod retrieve;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;

use std::path::PathBuf;
use std::sync::Arc;

use crate::api::{ApiClient, HttpTransport, ReqwestTransport};
use crate::config::Config;
use crate::error::Result;
use crate::resolver::TrackResolver;
use crate::types::{Outcome, RunStats, Track};

/// Likes page size requested when the caller gives no count
pub(crate) const DEFAULT_LIKES_LIMIT: usize = 10;

/// Main downloader instance driving the resolve-and-retrieve pipeline
///
/// Owns the validated configuration and the API gateway for the duration of
/// one run. Construction prepares the save directory, so configuration
/// errors surface before any network activity. Items within a run are
/// retrieved strictly sequentially; one transfer and file write completes
/// before the next begins.
pub struct SoundcloudDownloader {
    /// API gateway bound to the run's transport and scheme
    pub(crate) api: ApiClient,
    /// Run configuration
    pub(crate) config: Config,
    /// Validated absolute save directory; `None` for the current directory
    pub(crate) save_dir: Option<PathBuf>,
}

impl SoundcloudDownloader {
    /// Create a downloader with the production HTTP transport
    pub async fn new(config: Config) -> Result<Self> {
        Self::with_transport(config, Arc::new(ReqwestTransport::new())).await
    }

    /// Create a downloader over a custom transport
    ///
    /// Used by tests and by embedders that bring their own HTTP stack.
    pub async fn with_transport(
        config: Config,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self> {
        let save_dir = config.prepare_save_dir().await?;
        let api = ApiClient::new(&config, transport);
        Ok(Self {
            api,
            config,
            save_dir,
        })
    }

    /// Download a single track by its public URL
    pub async fn download_track(&self, reference: &str) -> Result<Outcome> {
        let track = TrackResolver::new(&self.api).resolve_track(reference).await?;
        Ok(self.retrieve(&track).await)
    }

    /// Download a set (playlist) by its public URL
    ///
    /// A `limit` of zero means everything in the set. Tracks are retrieved
    /// in set order.
    pub async fn download_set(&self, reference: &str, limit: usize) -> Result<RunStats> {
        let tracks = TrackResolver::new(&self.api).resolve_set(reference).await?;
        Ok(self.run_batch(&tracks, limit).await)
    }

    /// Download a user's liked tracks, newest first
    ///
    /// Likes pointing at deleted or hidden tracks are dropped before the
    /// limit applies, so `limit` bounds attempted retrievals rather than raw
    /// list positions. A `limit` of zero requests the default page of likes
    /// and attempts all of them.
    pub async fn download_likes(&self, username: &str, limit: usize) -> Result<RunStats> {
        let resolver = TrackResolver::new(&self.api);
        let user_id = resolver.resolve_user_id(username).await?;

        let fetch_limit = if limit == 0 { DEFAULT_LIKES_LIMIT } else { limit };
        let entries = self.api.fetch_likes(&user_id, fetch_limit).await?;

        let total = entries.len();
        let tracks: Vec<Track> = entries
            .into_iter()
            .filter_map(|entry| entry.track.and_then(|t| t.into_track()))
            .collect();
        let dropped = total - tracks.len();
        if dropped > 0 {
            tracing::debug!(dropped, username, "dropped likes without a retrievable track");
        }

        tracing::info!(count = tracks.len(), username, "preparing to download likes");
        Ok(self.run_batch(&tracks, limit).await)
    }
}
