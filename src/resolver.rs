//! Reference resolution: tracks, sets, and usernames
//!
//! Turns user-supplied references into concrete track metadata through the
//! overloaded resolve endpoint. Missing fields in otherwise well-formed
//! responses become typed [`ResolveError`]s here, distinct from transport
//! failures, so callers can tell "private or deleted" apart from "the
//! network broke".

use crate::api::ApiClient;
use crate::error::{ResolveError, Result};
use crate::types::{Track, UserId};

/// Resolves references against the API gateway
pub struct TrackResolver<'a> {
    api: &'a ApiClient,
}

impl<'a> TrackResolver<'a> {
    /// Create a resolver over the given gateway
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Resolve a track URL to its metadata
    ///
    /// A well-formed response without an id (private or deleted content) is
    /// a [`ResolveError::Track`].
    pub async fn resolve_track(&self, reference: &str) -> Result<Track> {
        let response = self.api.resolve(reference).await?;
        response.into_track().ok_or_else(|| {
            ResolveError::Track {
                reference: reference.to_string(),
            }
            .into()
        })
    }

    /// Resolve a set URL to its ordered track list
    ///
    /// The order is exactly what the service returned. An absent or empty
    /// `tracks` list is a [`ResolveError::Set`]; the common cause is a
    /// playlist that is not public. Entries without an id are skipped with a
    /// warning rather than failing the whole set.
    pub async fn resolve_set(&self, reference: &str) -> Result<Vec<Track>> {
        let response = self.api.resolve(reference).await?;
        let entries = match response.tracks {
            Some(entries) if !entries.is_empty() => entries,
            _ => {
                return Err(ResolveError::Set {
                    reference: reference.to_string(),
                }
                .into());
            }
        };

        let mut tracks = Vec::with_capacity(entries.len());
        for entry in entries {
            match entry.into_track() {
                Some(track) => tracks.push(track),
                None => tracing::warn!(reference, "skipping set entry without a track id"),
            }
        }
        Ok(tracks)
    }

    /// Resolve a username to its opaque user id
    pub async fn resolve_user_id(&self, username: &str) -> Result<UserId> {
        let profile = self.api.profile_url(username);
        let response = self.api.resolve(&profile).await?;
        match response.id {
            Some(id) => Ok(UserId(id.to_string())),
            None => Err(ResolveError::User {
                username: username.to_string(),
            }
            .into()),
        }
    }
}
