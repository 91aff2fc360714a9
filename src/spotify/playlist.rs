use crate::{
    error::{DjError, Result, check_status},
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistRequest,
        CreatePlaylistResponse, PlaylistTarget, TrackUri, Visibility,
    },
};

use super::SpotifyClient;

/// Largest number of URIs the add-tracks endpoint accepts per call.
pub const MAX_TRACKS_PER_REQUEST: usize = 50;

impl SpotifyClient {
    /// Creates an empty, non-collaborative playlist owned by `user_id`.
    ///
    /// # API Endpoint
    ///
    /// `POST /users/{user_id}/playlists`
    pub async fn create_user_playlist(
        &self,
        user_id: &str,
        title: &str,
        description: &str,
        visibility: Visibility,
    ) -> Result<String> {
        let body = CreatePlaylistRequest {
            name: title.to_string(),
            description: description.to_string(),
            public: visibility.is_public(),
            collaborative: false,
        };

        let response = self
            .http
            .post(self.endpoint(&format!("/users/{}/playlists", user_id)))
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;

        let playlist = check_status(response)
            .await?
            .json::<CreatePlaylistResponse>()
            .await?;
        Ok(playlist.id)
    }

    /// Appends `uris` to the end of the target playlist in one write call.
    ///
    /// # Errors
    ///
    /// Rejects more than [`MAX_TRACKS_PER_REQUEST`] URIs before sending
    /// anything; the batching pipeline never produces such a slice.
    ///
    /// # API Endpoint
    ///
    /// `POST /playlists/{playlist_id}/tracks`
    pub async fn add_tracks_to_playlist(
        &self,
        target: &PlaylistTarget,
        uris: &[TrackUri],
    ) -> Result<()> {
        if uris.len() > MAX_TRACKS_PER_REQUEST {
            return Err(DjError::Transport(format!(
                "refusing to send {} tracks in one request (limit {})",
                uris.len(),
                MAX_TRACKS_PER_REQUEST
            )));
        }

        let body = AddTrackToPlaylistRequest {
            uris: uris.to_vec(),
        };

        let response = self
            .http
            .post(self.endpoint(&format!("/playlists/{}/tracks", target.playlist_id)))
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;

        check_status(response)
            .await?
            .json::<AddTrackToPlaylistResponse>()
            .await?;
        Ok(())
    }
}
