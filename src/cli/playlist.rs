use crate::{
    config, error,
    error::Result,
    listing::{ListingScraper, ListingSelectors},
    orchestrator::{Orchestrator, Stage},
    spotify::{self, SpotifyClient},
    success,
    types::RunOptions,
};

/// Builds one playlist from the new-releases listing and exits non-zero on failure.
pub async fn playlist(options: RunOptions) {
    let scraper = match ListingScraper::new(
        config::listing_url(),
        ListingSelectors::default(),
        config::http_timeout(),
    ) {
        Ok(scraper) => scraper,
        Err(e) => error!("Something went wrong while {}: {}", Stage::Scraping, e),
    };

    let mut orchestrator = Orchestrator::new(&scraper, options);
    let client = match orchestrator.authorize(authorize()).await {
        Ok(client) => client,
        Err(e) => error!("Something went wrong while {}: {}", orchestrator.stage(), e),
    };

    if let Err(e) = orchestrator.run(&client).await {
        error!("Something went wrong while {}: {}", orchestrator.stage(), e);
    }

    success!(
        "Playlist ready with {} albums",
        orchestrator.state().albums_success.len()
    );
}

async fn authorize() -> Result<SpotifyClient> {
    let token = spotify::auth::resolve_token().await?;
    SpotifyClient::new(config::api_url(), &token, config::http_timeout())
}
