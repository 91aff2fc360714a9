use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Opaque catalog identifier of a single track, e.g. `spotify:track:...`.
pub type TrackUri = String;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: String,
    #[serde(default)]
    pub expires_in: u64,
}

/// An (artist, title) pair taken from the listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapedEntry {
    pub artist: String,
    pub title: String,
}

impl ScrapedEntry {
    pub fn new(artist: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            artist: artist.into(),
            title: title.into(),
        }
    }

    /// Field-filtered album search query for the catalog.
    pub fn search_query(&self) -> String {
        format!("album:{} artist:{}", self.title, self.artist)
    }
}

/// A scraped entry for which the catalog returned at least one album.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedAlbum {
    pub entry: ScrapedEntry,
    pub album_id: String,
}

#[derive(Tabled)]
pub struct MatchedAlbumRow {
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Artist")]
    pub artist: String,
}

/// Mutable aggregate of one run, owned by the orchestrator.
#[derive(Debug, Clone, Default)]
pub struct RunState {
    pub user_id: String,
    pub playlist_id: String,
    pub scraped_albums: Vec<ScrapedEntry>,
    pub albums_success: Vec<MatchedAlbum>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistTarget {
    pub user_id: String,
    pub playlist_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

impl Visibility {
    /// Parses a `--status` value. Anything but `public`/`private` is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "public" => Some(Visibility::Public),
            "private" => Some(Visibility::Private),
            _ => None,
        }
    }

    pub fn is_public(&self) -> bool {
        matches!(self, Visibility::Public)
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Cap on matched albums; `None` means unlimited.
    pub max_albums: Option<usize>,
    pub visibility: Visibility,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUserResponse {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchAlbumsResponse {
    #[serde(default)]
    pub albums: Option<AlbumPage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumPage {
    #[serde(default)]
    pub items: Vec<SimplifiedAlbum>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifiedAlbum {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumTracksResponse {
    #[serde(default)]
    pub items: Vec<Track>,
    #[serde(default)]
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub collaborative: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    #[serde(default)]
    pub snapshot_id: String,
}
