//! SoundCloud API gateway
//!
//! Builds the three endpoint URLs (resolve, likes, stream-info), executes
//! them through an injected HTTP transport, decodes JSON into per-endpoint
//! optional-field structs, and classifies failures. No raw transport error
//! leaves this module unclassified.

use std::sync::Arc;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{Result, TransportError};
use crate::types::{Track, TrackId, UserId};

/// Host serving the resolve and stream-info endpoints
const API_HOST: &str = "api.soundcloud.com";
/// Host serving the likes endpoint
const API_V2_HOST: &str = "api-v2.soundcloud.com";
/// Host of public profile pages, accepted by the resolve endpoint
const WEB_HOST: &str = "soundcloud.com";

/// Raw result of a transport-level GET
#[derive(Clone, Debug)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Raw response body; may be empty
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Whether the status code is in the success range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstraction over HTTP GET, enabling testability
///
/// Implementations return `Err` only for connection-level failures;
/// non-success statuses come back as a normal [`TransportResponse`] and are
/// classified by the gateway.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform a GET request, returning the status and raw body
    async fn get(&self, url: &str) -> Result<TransportResponse>;
}

/// Production [`HttpTransport`] backed by a shared reqwest client
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a fresh client
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<TransportResponse> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(TransportResponse { status, body })
    }
}

/// Decoded resolve endpoint response
///
/// The endpoint is overloaded: tracks and user profiles answer with an `id`,
/// sets answer with a `tracks` array. Every field is optional because
/// private or deleted content comes back as a well-formed but partial
/// document.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ResolveResponse {
    /// Canonical id of the resolved track or user
    pub id: Option<u64>,
    /// Track title, present for track lookups
    pub title: Option<String>,
    /// Uploading user, present for track lookups
    pub user: Option<ResolvedUser>,
    /// Track list, present for set lookups
    pub tracks: Option<Vec<ResolvedTrack>>,
}

impl ResolveResponse {
    /// Convert a track-shaped response into domain metadata
    ///
    /// `None` when the response carries no id, which is how the service
    /// answers for private or deleted tracks.
    pub fn into_track(self) -> Option<Track> {
        let id = self.id?;
        Some(Track {
            id: TrackId(id),
            title: self.title.unwrap_or_default(),
            username: self.user.and_then(|u| u.username).unwrap_or_default(),
        })
    }
}

/// User object nested in resolve responses
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ResolvedUser {
    /// Display name of the user
    pub username: Option<String>,
}

/// Track document nested in set and likes responses
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ResolvedTrack {
    /// Track id; entries without one cannot be retrieved
    pub id: Option<u64>,
    /// Track title
    pub title: Option<String>,
    /// Uploading user
    pub user: Option<ResolvedUser>,
}

impl ResolvedTrack {
    /// Convert into domain metadata; `None` without an id
    pub fn into_track(self) -> Option<Track> {
        let id = self.id?;
        Some(Track {
            id: TrackId(id),
            title: self.title.unwrap_or_default(),
            username: self.user.and_then(|u| u.username).unwrap_or_default(),
        })
    }
}

/// One entry of a user's likes collection
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LikeEntry {
    /// The liked track; `null` when it has since been deleted or hidden
    pub track: Option<ResolvedTrack>,
}

#[derive(Debug, Deserialize)]
struct LikesResponse {
    #[serde(default)]
    collection: Vec<LikeEntry>,
}

/// Decoded stream-info endpoint response
///
/// An absent URL models a track the service only serves as an adaptive
/// stream. That is an expected per-item condition, not a transport error.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StreamInfo {
    /// Direct progressive-download URL
    pub http_mp3_128_url: Option<String>,
}

/// Gateway for the three SoundCloud endpoints
///
/// URLs are built by template substitution of the identifier, the configured
/// client id, and (for likes) the limit. The scheme is captured once from
/// the configuration at construction and is uniform for the whole run.
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    client_id: String,
    scheme: &'static str,
}

impl ApiClient {
    /// Create a gateway bound to the given transport
    pub fn new(config: &Config, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            client_id: config.client_id.clone(),
            scheme: config.scheme(),
        }
    }

    pub(crate) fn resolve_url(&self, reference: &str) -> String {
        format!(
            "{}://{}/resolve.json?url={}&client_id={}",
            self.scheme,
            API_HOST,
            urlencoding::encode(reference),
            self.client_id
        )
    }

    pub(crate) fn likes_url(&self, user_id: &UserId, limit: usize) -> String {
        format!(
            "{}://{}/users/{}/track_likes?client_id={}&limit={}",
            self.scheme, API_V2_HOST, user_id, self.client_id, limit
        )
    }

    pub(crate) fn stream_info_url(&self, track_id: TrackId) -> String {
        format!(
            "{}://{}/i1/tracks/{}/streams?client_id={}",
            self.scheme, API_HOST, track_id, self.client_id
        )
    }

    /// URL of a user's public profile page, accepted by the resolve endpoint
    pub(crate) fn profile_url(&self, username: &str) -> String {
        format!("{}://{}/{}", self.scheme, WEB_HOST, username)
    }

    /// Resolve an arbitrary public-facing reference (track URL, set URL, or
    /// profile URL) to its canonical document
    pub async fn resolve(&self, reference: &str) -> Result<ResolveResponse> {
        self.get_json(&self.resolve_url(reference)).await
    }

    /// Fetch a user's likes, newest first, exactly as the service orders them
    pub async fn fetch_likes(&self, user_id: &UserId, limit: usize) -> Result<Vec<LikeEntry>> {
        let response: LikesResponse = self.get_json(&self.likes_url(user_id, limit)).await?;
        Ok(response.collection)
    }

    /// Fetch stream-location candidates for a track
    pub async fn fetch_stream_info(&self, track_id: TrackId) -> Result<StreamInfo> {
        self.get_json(&self.stream_info_url(track_id)).await
    }

    /// Download raw bytes from an absolute URL (the audio stream itself)
    ///
    /// The URL comes from a stream-info response and is validated before the
    /// request goes out. An empty body is a transport-class failure; the
    /// service never serves zero-length streams.
    pub async fn download(&self, stream_url: &str) -> Result<Vec<u8>> {
        if url::Url::parse(stream_url).is_err() {
            return Err(TransportError::InvalidUrl {
                url: stream_url.to_string(),
            }
            .into());
        }
        let response = self.checked_get(stream_url).await?;
        if response.body.is_empty() {
            return Err(TransportError::EmptyBody {
                url: stream_url.to_string(),
            }
            .into());
        }
        Ok(response.body)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.checked_get(url).await?;
        Ok(serde_json::from_slice(&response.body)?)
    }

    async fn checked_get(&self, url: &str) -> Result<TransportResponse> {
        tracing::debug!(url, "GET");
        let response = self.transport.get(url).await?;
        if !response.is_success() {
            return Err(TransportError::from_status(response.status, url).into());
        }
        Ok(response)
    }
}
