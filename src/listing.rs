//! New-releases listing scraper.
//!
//! Fetches the listing page and extracts one [`ScrapedEntry`] per release row
//! using CSS selectors. Parsing is a pure function over the page body so it
//! can be exercised without the network.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};

use crate::{
    error::{DjError, Result},
    spotify::http_client,
    types::ScrapedEntry,
    warning,
};

/// Source of scraped releases for a run.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch_entries(&self) -> Result<Vec<ScrapedEntry>>;

    /// Where the entries come from, for playlist descriptions and logs.
    fn source(&self) -> String;
}

/// CSS selectors describing one release row and its fields.
#[derive(Debug, Clone)]
pub struct ListingSelectors {
    pub row: String,
    pub artist: String,
    pub title: String,
}

impl Default for ListingSelectors {
    fn default() -> Self {
        Self {
            row: ".featured-rows .row .featured".to_string(),
            artist: ".artist a:first-child".to_string(),
            title: ".title a:first-child".to_string(),
        }
    }
}

pub struct ListingScraper {
    http: Client,
    url: String,
    selectors: ListingSelectors,
}

impl ListingScraper {
    pub fn new(url: impl Into<String>, selectors: ListingSelectors, timeout: Duration) -> Result<Self> {
        Ok(Self {
            http: http_client(timeout)?,
            url: url.into(),
            selectors,
        })
    }
}

#[async_trait]
impl ListingSource for ListingScraper {
    async fn fetch_entries(&self) -> Result<Vec<ScrapedEntry>> {
        let response = self
            .http
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DjError::Scrape(format!("cannot reach {}: {}", self.url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DjError::Scrape(format!("{} answered {}", self.url, status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DjError::Scrape(format!("cannot read {}: {}", self.url, e)))?;

        let entries = parse_listing(&body, &self.selectors)?;
        if entries.is_empty() {
            warning!("No releases found on {}", self.url);
        }
        Ok(entries)
    }

    fn source(&self) -> String {
        self.url.clone()
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| DjError::Scrape(format!("invalid selector '{}': {}", css, e)))
}

fn first_text(row: &ElementRef<'_>, selector: &Selector) -> Option<String> {
    row.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|text| !text.is_empty())
}

/// Extracts release rows from a listing page, in page order.
///
/// Rows missing either the artist or the title are skipped. Duplicate rows
/// are kept.
///
/// # Errors
///
/// Returns [`DjError::Scrape`] when one of the selectors is not valid CSS.
pub fn parse_listing(html: &str, selectors: &ListingSelectors) -> Result<Vec<ScrapedEntry>> {
    let row_selector = selector(&selectors.row)?;
    let artist_selector = selector(&selectors.artist)?;
    let title_selector = selector(&selectors.title)?;

    let document = Html::parse_document(html);
    let entries = document
        .select(&row_selector)
        .filter_map(|row| {
            let artist = first_text(&row, &artist_selector)?;
            let title = first_text(&row, &title_selector)?;
            Some(ScrapedEntry { artist, title })
        })
        .collect();

    Ok(entries)
}
