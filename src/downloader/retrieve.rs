//! Per-track retrieval: existence check, stream lookup, transfer, file write.

use super::SoundcloudDownloader;
use crate::filename::track_filename;
use crate::types::{DownloadTarget, Outcome, Track};

impl SoundcloudDownloader {
    /// Where the given track would be written under the current configuration
    pub(crate) fn target_for(&self, track: &Track) -> DownloadTarget {
        DownloadTarget {
            dir: self.save_dir.clone(),
            filename: track_filename(&track.title, &track.username),
            overwrite: self.config.overwrite,
        }
    }

    /// Retrieve one track and write it to disk
    ///
    /// Every path out of this method is a discriminated [`Outcome`], logged
    /// with its cause, so a batch continues past individual items. No retry
    /// is performed; a failed item is final for the current run.
    ///
    /// Phases:
    /// 1. Existence check. A file already at the destination short-circuits
    ///    before any network call when overwriting is disabled.
    /// 2. Stream-info lookup. A track without a progressive stream is
    ///    [`Outcome::NoStream`], a known platform limitation rather than a
    ///    failure of this system.
    /// 3. Byte transfer from the stream URL.
    /// 4. File write (create or truncate).
    pub async fn retrieve(&self, track: &Track) -> Outcome {
        let target = self.target_for(track);
        let path = target.path();

        if path.is_file() && !target.overwrite {
            tracing::info!(file = %path.display(), "file already exists, skipping");
            return Outcome::SkippedExisting;
        }

        let info = match self.api.fetch_stream_info(track.id).await {
            Ok(info) => info,
            Err(e) => {
                tracing::error!(track_id = %track.id, error = %e, "stream-info lookup failed");
                return Outcome::Failed;
            }
        };

        let Some(stream_url) = info.http_mp3_128_url else {
            tracing::warn!(
                track_id = %track.id,
                title = %track.title,
                "no progressive stream for track"
            );
            return Outcome::NoStream;
        };

        tracing::info!(track_id = %track.id, file = %target.filename, "downloading track");
        let data = match self.api.download(&stream_url).await {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(track_id = %track.id, error = %e, "stream download failed");
                return Outcome::Failed;
            }
        };

        if let Err(e) = tokio::fs::write(&path, &data).await {
            tracing::error!(file = %path.display(), error = %e, "failed to write track to disk");
            return Outcome::Failed;
        }

        tracing::info!(file = %path.display(), bytes = data.len(), "track download completed");
        Outcome::Downloaded
    }
}
