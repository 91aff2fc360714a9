use crate::{
    error::{Result, check_status},
    types::CurrentUserResponse,
};

use super::SpotifyClient;

impl SpotifyClient {
    /// Fetches the id of the user the access token belongs to (`GET /me`).
    pub async fn get_current_user(&self) -> Result<String> {
        let response = self
            .http
            .get(self.endpoint("/me"))
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let user = check_status(response)
            .await?
            .json::<CurrentUserResponse>()
            .await?;
        Ok(user.id)
    }
}
