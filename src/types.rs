//! Core types for soundcloud-dl

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Unique identifier for a track
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TrackId(pub u64);

impl TrackId {
    /// Create a new TrackId
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner u64 value
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for TrackId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<TrackId> for u64 {
    fn from(id: TrackId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TrackId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Opaque identifier for a user profile
///
/// Produced by resolving a username; treated as text and never assumed to be
/// numeric.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Metadata for a single resolved track
///
/// Produced by decoding an API response, consumed once the corresponding
/// file is written or the item fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Track id, required for the stream-info lookup
    pub id: TrackId,
    /// Title as supplied by the service; may be empty or arbitrary Unicode
    pub title: String,
    /// Display name of the uploading user; may be empty
    pub username: String,
}

/// Where a retrieved track is written
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadTarget {
    /// Directory to save into; the current directory when `None`
    pub dir: Option<PathBuf>,
    /// Sanitized filename, always ending in the fixed audio extension
    pub filename: String,
    /// Whether an existing file at the destination may be replaced
    pub overwrite: bool,
}

impl DownloadTarget {
    /// Effective destination path
    pub fn path(&self) -> PathBuf {
        match &self.dir {
            Some(dir) => dir.join(&self.filename),
            None => PathBuf::from(&self.filename),
        }
    }
}

/// Outcome of retrieving a single track
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The stream was downloaded and written to disk
    Downloaded,
    /// The destination file already existed and overwriting is disabled
    SkippedExisting,
    /// The service offers no progressive-download stream for this track
    NoStream,
    /// Transport or filesystem failure; the item is final for this run
    Failed,
}

/// Statistics aggregated over one batch run
///
/// Returned as a value by the orchestrator. Every run starts from zero;
/// nothing accumulates across invocations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Items dispatched to the retrieval engine
    pub attempted: usize,
    /// Items downloaded, or already present on disk
    pub succeeded: usize,
    /// Items that failed for transport or filesystem reasons
    pub failed: usize,
    /// Items the service offers no downloadable stream for
    pub no_stream: usize,
}

impl RunStats {
    /// Record the outcome of one attempted retrieval
    ///
    /// A pre-existing file counts as a success: the file is present and
    /// correct regardless of whether this run fetched it.
    pub fn record(&mut self, outcome: Outcome) {
        self.attempted += 1;
        match outcome {
            Outcome::Downloaded | Outcome::SkippedExisting => self.succeeded += 1,
            Outcome::NoStream => self.no_stream += 1,
            Outcome::Failed => self.failed += 1,
        }
    }

    /// Total items that did not produce a file this run
    pub fn errors(&self) -> usize {
        self.failed + self.no_stream
    }
}
