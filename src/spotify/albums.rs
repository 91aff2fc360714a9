use crate::{
    error::{Result, check_status},
    types::{AlbumTracksResponse, SearchAlbumsResponse, TrackUri},
};

use super::SpotifyClient;

const TRACKS_PAGE_LIMIT: u32 = 50;

impl SpotifyClient {
    /// Searches the catalog for albums matching `query`.
    ///
    /// Returns the album ids in the order the API ranks them. A response
    /// without an `albums` object counts as no results rather than an error.
    ///
    /// # API Endpoint
    ///
    /// `GET /search?q=<query>&type=album`
    pub async fn search_album_ids(&self, query: &str) -> Result<Vec<String>> {
        let response = self
            .http
            .get(self.endpoint("/search"))
            .query(&[("q", query), ("type", "album")])
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let json = check_status(response)
            .await?
            .json::<SearchAlbumsResponse>()
            .await?;

        Ok(json
            .albums
            .map(|page| page.items.into_iter().map(|album| album.id).collect())
            .unwrap_or_default())
    }

    /// Retrieves every track URI of an album, in track order.
    ///
    /// Follows the `next` link of each page, so albums longer than one page
    /// come back complete.
    ///
    /// # API Endpoint
    ///
    /// `GET /albums/{id}/tracks?limit=50`
    pub async fn get_album_track_uris(&self, album_id: &str) -> Result<Vec<TrackUri>> {
        let mut uris = Vec::new();
        let mut next = Some(format!(
            "{}?limit={}",
            self.endpoint(&format!("/albums/{}/tracks", album_id)),
            TRACKS_PAGE_LIMIT
        ));

        while let Some(url) = next {
            let response = self
                .http
                .get(&url)
                .bearer_auth(&self.access_token)
                .send()
                .await?;

            let page = check_status(response)
                .await?
                .json::<AlbumTracksResponse>()
                .await?;

            uris.extend(page.items.into_iter().map(|track| track.uri));
            next = page.next;
        }

        Ok(uris)
    }
}
