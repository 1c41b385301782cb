//! Configuration types for soundcloud-dl

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

/// Configuration for one downloader run
///
/// Immutable after construction and owned by the downloader for the duration
/// of the run. The transport scheme is chosen once from [`Config::https`]
/// and applies to every endpoint within the run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// API client id appended to every request
    pub client_id: String,

    /// Directory tracks are saved into (default: the current directory)
    #[serde(default)]
    pub save_dir: Option<PathBuf>,

    /// Create the save directory if it does not exist (default: false)
    #[serde(default)]
    pub create_dir: bool,

    /// Overwrite files that already exist (default: false)
    #[serde(default)]
    pub overwrite: bool,

    /// Query the API over HTTPS instead of plain HTTP (default: false)
    #[serde(default)]
    pub https: bool,
}

impl Config {
    /// Create a configuration with the given client id and default settings
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            save_dir: None,
            create_dir: false,
            overwrite: false,
            https: false,
        }
    }

    /// URL scheme used for every endpoint within a run
    pub fn scheme(&self) -> &'static str {
        if self.https { "https" } else { "http" }
    }

    /// Validate the save directory, creating it when permitted
    ///
    /// Returns the absolute path tracks are saved into, or `None` when they
    /// go to the current directory. A missing directory without
    /// [`Config::create_dir`] is a configuration error, reported before any
    /// network activity.
    pub async fn prepare_save_dir(&self) -> Result<Option<PathBuf>> {
        let Some(dir) = &self.save_dir else {
            return Ok(None);
        };

        if dir.is_dir() {
            return Ok(Some(std::path::absolute(dir)?));
        }

        if !self.create_dir {
            return Err(Error::Config {
                message: format!("'{}' is not a valid directory", dir.display()),
                key: Some("save_dir".to_string()),
            });
        }

        tokio::fs::create_dir_all(dir).await.map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("failed to create save directory '{}': {}", dir.display(), e),
            ))
        })?;
        tracing::info!(dir = %dir.display(), "created save directory");
        Ok(Some(std::path::absolute(dir)?))
    }
}
