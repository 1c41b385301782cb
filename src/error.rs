//! Error types for soundcloud-dl
//!
//! This module provides the error taxonomy for the crate:
//! - Configuration errors, raised before any network activity
//! - Resolution failures (the service answered, but without the field the
//!   operation needs)
//! - Transport failures, classified by HTTP status for the human-facing
//!   message while control flow treats them uniformly
//! - I/O and serialization errors converted via `#[from]`

use thiserror::Error;

/// Result type alias for soundcloud-dl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for soundcloud-dl
///
/// This is the primary error type used throughout the crate. Each variant
/// includes contextual information to help diagnose issues.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "save_dir")
        key: Option<String>,
    },

    /// A resolve or set-lookup response lacked the expected field
    #[error("{0}")]
    Resolve(#[from] ResolveError),

    /// HTTP-level failure reported by the remote service
    #[error("{0}")]
    Transport(#[from] TransportError),

    /// Connection-level network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Resolution failures
///
/// The service returned a well-formed document that does not carry what the
/// operation needs. The usual causes are private, deleted, or mistyped
/// content, so each variant has a distinct user-facing message.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The resolve response carried no track id
    #[error("could not retrieve track data for '{reference}'")]
    Track {
        /// The reference that failed to resolve
        reference: String,
    },

    /// The set response carried no track list
    #[error("could not retrieve set data for '{reference}' - is the set public?")]
    Set {
        /// The set reference that failed to resolve
        reference: String,
    },

    /// The profile response carried no user id
    #[error("could not resolve a user id for '{username}'")]
    User {
        /// The username that failed to resolve
        username: String,
    },
}

/// Transport failures, subdivided by HTTP status
///
/// The subdivision exists purely for the human-facing message; every variant
/// flows through the same failed-item path and none is retried.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The requested resource does not exist
    #[error("nothing found at {url} (HTTP 404)")]
    NotFound {
        /// The URL that was requested
        url: String,
    },

    /// The request was rejected for lack of authorization
    #[error("request for {url} was not authorized (HTTP 401)")]
    Unauthorized {
        /// The URL that was requested
        url: String,
    },

    /// The remote server reported an internal failure
    #[error("the remote server failed on {url} (HTTP {status})")]
    Server {
        /// The 5xx status code returned
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// A status outside the recognized classes
    #[error("unexpected HTTP status {status} for {url}")]
    Unexpected {
        /// The status code returned
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The response body was empty where content was required
    #[error("empty response body from {url}")]
    EmptyBody {
        /// The URL that was requested
        url: String,
    },

    /// The service handed back a stream URL that does not parse
    #[error("malformed stream URL '{url}'")]
    InvalidUrl {
        /// The unparseable URL
        url: String,
    },
}

impl TransportError {
    /// Classify a non-success HTTP status into a transport error
    pub fn from_status(status: u16, url: impl Into<String>) -> Self {
        let url = url.into();
        match status {
            404 => Self::NotFound { url },
            401 => Self::Unauthorized { url },
            500..=599 => Self::Server { status, url },
            _ => Self::Unexpected { status, url },
        }
    }

    /// The HTTP status carried by this error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Unauthorized { .. } => Some(401),
            Self::Server { status, .. } | Self::Unexpected { status, .. } => Some(*status),
            Self::EmptyBody { .. } | Self::InvalidUrl { .. } => None,
        }
    }
}
