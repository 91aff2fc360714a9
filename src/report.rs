use tabled::Table;

use crate::types::{MatchedAlbum, MatchedAlbumRow};

pub const REPORT_TITLE: &str = "Found Spotify Albums For";

/// Renders the run report: a heading and one row per matched album.
///
/// With no matches only the heading is rendered.
pub fn render(albums: &[MatchedAlbum]) -> String {
    let mut out = format!("{}\n{}\n", REPORT_TITLE, "=".repeat(REPORT_TITLE.len() + 1));

    if albums.is_empty() {
        return out;
    }

    let rows: Vec<MatchedAlbumRow> = albums
        .iter()
        .map(|album| MatchedAlbumRow {
            title: album.entry.title.clone(),
            artist: album.entry.artist.clone(),
        })
        .collect();

    out.push_str(&Table::new(rows).to_string());
    out.push('\n');
    out
}

pub fn print(albums: &[MatchedAlbum]) {
    print!("{}", render(albums));
}
