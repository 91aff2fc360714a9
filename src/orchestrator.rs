//! Sequencing of one playlist run.
//!
//! A run moves through a fixed, linear list of stages. Each stage starts only
//! after the previous one finished; the first failure stops the run and the
//! orchestrator keeps the stage it happened in for the error message.
//! Independent requests inside a stage (one search per scraped entry, one
//! track listing per matched album) are issued concurrently and joined in
//! input order. Track submission is the exception and stays sequential.

use std::{fmt, future::Future};

use chrono::Local;
use futures::future::try_join_all;

use crate::{
    error::Result,
    info,
    listing::ListingSource,
    matching, pipeline,
    pipeline::Batching,
    report,
    spotify::Catalog,
    success,
    types::{PlaylistTarget, RunOptions, RunState, TrackUri},
    utils,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Idle,
    Authorizing,
    FetchingUser,
    CreatingPlaylist,
    Scraping,
    Searching,
    FetchingTracks,
    Submitting,
    Reporting,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::Idle => "starting",
            Stage::Authorizing => "authorizing",
            Stage::FetchingUser => "fetching the current user",
            Stage::CreatingPlaylist => "creating the playlist",
            Stage::Scraping => "scraping the listing",
            Stage::Searching => "searching the catalog",
            Stage::FetchingTracks => "fetching album tracks",
            Stage::Submitting => "adding tracks to the playlist",
            Stage::Reporting => "reporting",
            Stage::Done => "done",
        };
        write!(f, "{}", label)
    }
}

pub struct Orchestrator<'a> {
    listing: &'a dyn ListingSource,
    options: RunOptions,
    batching: Batching,
    stage: Stage,
    state: RunState,
}

impl<'a> Orchestrator<'a> {
    pub fn new(listing: &'a dyn ListingSource, options: RunOptions) -> Self {
        Self {
            listing,
            options,
            batching: Batching::default(),
            stage: Stage::Idle,
            state: RunState::default(),
        }
    }

    pub fn with_batching(mut self, batching: Batching) -> Self {
        self.batching = batching;
        self
    }

    /// Stage the run is in, or failed in.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    fn enter(&mut self, stage: Stage) {
        self.stage = stage;
    }

    /// Resolves the credential the catalog client is built from.
    ///
    /// The stage stays on [`Stage::Authorizing`] when `step` fails.
    pub async fn authorize<C, F>(&mut self, step: F) -> Result<C>
    where
        F: Future<Output = Result<C>>,
    {
        self.enter(Stage::Authorizing);
        let catalog = step.await?;
        info!("Authorization complete");
        Ok(catalog)
    }

    /// Runs every stage from user lookup to the printed report.
    pub async fn run(&mut self, catalog: &dyn Catalog) -> Result<()> {
        self.enter(Stage::FetchingUser);
        self.state.user_id = catalog.current_user().await?;
        info!("Authorized as {}", self.state.user_id);

        self.enter(Stage::CreatingPlaylist);
        let title = utils::playlist_title(Local::now().date_naive());
        let description = format!("New releases from {}", self.listing.source());
        self.state.playlist_id = catalog
            .create_playlist(
                &self.state.user_id,
                &title,
                &description,
                self.options.visibility,
            )
            .await?;
        success!(
            "Created {} playlist \"{}\"",
            self.options.visibility,
            title
        );

        self.enter(Stage::Scraping);
        let pb = utils::spinner(format!("Scraping {}...", self.listing.source()));
        let scraped = self.listing.fetch_entries().await;
        pb.finish_and_clear();
        self.state.scraped_albums = scraped?;
        info!("Scraped {} releases", self.state.scraped_albums.len());

        self.enter(Stage::Searching);
        let album_ids = self.search(catalog).await?;

        self.enter(Stage::FetchingTracks);
        let uris = Self::fetch_tracks(catalog, &album_ids).await?;

        self.enter(Stage::Submitting);
        let target = PlaylistTarget {
            user_id: self.state.user_id.clone(),
            playlist_id: self.state.playlist_id.clone(),
        };
        pipeline::submit_in_batches(catalog, &target, &uris, self.batching).await?;
        if !uris.is_empty() {
            success!("Added {} tracks", uris.len());
        }

        self.enter(Stage::Reporting);
        report::print(&self.state.albums_success);

        self.enter(Stage::Done);
        Ok(())
    }

    async fn search(&mut self, catalog: &dyn Catalog) -> Result<Vec<String>> {
        let queries: Vec<String> = self
            .state
            .scraped_albums
            .iter()
            .map(|entry| entry.search_query())
            .collect();

        let pb = utils::spinner(format!("Searching {} releases...", queries.len()));
        let results = try_join_all(queries.iter().map(move |q| catalog.search_albums(q))).await;
        pb.finish_and_clear();

        Ok(matching::select_matches(
            &mut self.state,
            &results?,
            self.options.max_albums,
        ))
    }

    async fn fetch_tracks(catalog: &dyn Catalog, album_ids: &[String]) -> Result<Vec<TrackUri>> {
        let pb = utils::spinner(format!("Fetching tracks of {} albums...", album_ids.len()));
        let tracks = try_join_all(album_ids.iter().map(move |id| catalog.album_tracks(id))).await;
        pb.finish_and_clear();

        Ok(tracks?.into_iter().flatten().collect())
    }
}
