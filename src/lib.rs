//! # soundcloud-dl
//!
//! Download SoundCloud tracks, sets, and user likes to local files.
//!
//! ## Design Philosophy
//!
//! soundcloud-dl is designed to be:
//! - **Library-first** - The CLI binary is a thin shell over the crate API
//! - **Transport-injected** - All HTTP goes through a trait, so every layer
//!   is testable without the network
//! - **Failure-honest** - Every public operation returns a typed error or a
//!   discriminated per-item outcome; nothing panics across the API boundary
//!
//! ## Quick Start
//!
//! ```no_run
//! use soundcloud_dl::{Config, SoundcloudDownloader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = Config::new("your-client-id");
//!     config.save_dir = Some("music".into());
//!     config.create_dir = true;
//!
//!     let downloader = SoundcloudDownloader::new(config).await?;
//!     let stats = downloader
//!         .download_set("https://soundcloud.com/artist/sets/album", 0)
//!         .await?;
//!     println!("saved {} of {} tracks", stats.succeeded, stats.attempted);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// SoundCloud API gateway and HTTP transport abstraction
pub mod api;
/// Configuration types
pub mod config;
/// Core downloader implementation (decomposed into focused submodules)
pub mod downloader;
/// Error types
pub mod error;
/// Filesystem-safe filename derivation
pub mod filename;
/// Reference resolution (tracks, sets, usernames)
pub mod resolver;
/// Core types
pub mod types;

// Re-export commonly used types
pub use api::{ApiClient, HttpTransport, ReqwestTransport, TransportResponse};
pub use config::Config;
pub use downloader::SoundcloudDownloader;
pub use error::{Error, ResolveError, Result, TransportError};
pub use filename::track_filename;
pub use resolver::TrackResolver;
pub use types::{DownloadTarget, Outcome, RunStats, Track, TrackId, UserId};
