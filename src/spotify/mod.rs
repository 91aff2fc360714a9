//! # Spotify Integration Module
//!
//! This module is the Catalog Search Client of a run: the integration layer
//! between the playlist pipeline and the Spotify Web API. It handles all HTTP
//! communication, OAuth and the mapping of HTTP failures onto [`DjError`].
//!
//! ## Architecture
//!
//! ```text
//! Orchestrator / Pipeline
//!          ↓
//!     Catalog trait
//!          ↓
//! SpotifyClient
//!     ├── Authentication (authorization code grant)
//!     ├── User (current user id)
//!     ├── Albums (search, track listing)
//!     └── Playlist (create, add tracks)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Error Handling
//!
//! Every call is treated as potentially failing. Non-success statuses are
//! mapped by [`crate::error::check_status`]: 429 becomes a rate-limit error,
//! 401/403 an auth error, everything else a transport error. Nothing is
//! retried here; the caller decides what a failure means for the run.
//!
//! ## Timeouts
//!
//! The underlying `reqwest::Client` carries a per-request timeout taken from
//! [`crate::config::http_timeout`], so a hung endpoint fails the run instead
//! of stalling it forever.
//!
//! ## API Coverage
//!
//! - `GET /me` - Current user id
//! - `GET /search?type=album` - Album search
//! - `GET /albums/{id}/tracks` - Album track listing (paged)
//! - `POST /users/{user_id}/playlists` - Create new playlists
//! - `POST /playlists/{playlist_id}/tracks` - Add tracks to playlists
//! - `POST /api/token` - Authorization code exchange

pub mod albums;
pub mod auth;
pub mod playlist;
pub mod user;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::{
    error::{DjError, Result},
    types::{PlaylistTarget, Token, TrackUri, Visibility},
};

/// Catalog operations a run depends on.
///
/// Implemented by [`SpotifyClient`]; tests substitute mocks or recording
/// fakes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Id of the user the credential belongs to.
    async fn current_user(&self) -> Result<String>;

    /// Creates an empty playlist and returns its id.
    async fn create_playlist(
        &self,
        user_id: &str,
        title: &str,
        description: &str,
        visibility: Visibility,
    ) -> Result<String>;

    /// Candidate album ids for a query, best match first. May be empty.
    async fn search_albums(&self, query: &str) -> Result<Vec<String>>;

    /// Every track URI of an album, in album order.
    async fn album_tracks(&self, album_id: &str) -> Result<Vec<TrackUri>>;

    /// Appends at most 50 tracks to the target playlist, in slice order.
    async fn add_tracks(&self, target: &PlaylistTarget, uris: &[TrackUri]) -> Result<()>;
}

/// Spotify Web API client bound to one access token.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    access_token: String,
}

impl SpotifyClient {
    pub fn new(api_url: impl Into<String>, token: &Token, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: http_client(timeout)?,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            access_token: token.access_token.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

/// Builds the shared HTTP client with a per-request timeout.
pub fn http_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| DjError::Transport(format!("cannot build HTTP client: {}", e)))
}

#[async_trait]
impl Catalog for SpotifyClient {
    async fn current_user(&self) -> Result<String> {
        self.get_current_user().await
    }

    async fn create_playlist(
        &self,
        user_id: &str,
        title: &str,
        description: &str,
        visibility: Visibility,
    ) -> Result<String> {
        self.create_user_playlist(user_id, title, description, visibility)
            .await
    }

    async fn search_albums(&self, query: &str) -> Result<Vec<String>> {
        self.search_album_ids(query).await
    }

    async fn album_tracks(&self, album_id: &str) -> Result<Vec<TrackUri>> {
        self.get_album_track_uris(album_id).await
    }

    async fn add_tracks(&self, target: &PlaylistTarget, uris: &[TrackUri]) -> Result<()> {
        self.add_tracks_to_playlist(target, uris).await
    }
}
