use crate::types::{MatchedAlbum, RunState};

/// Picks one album per scraped entry from the search results.
///
/// `results[i]` holds the search result for `state.scraped_albums[i]`. The
/// first id of a non-empty result is always the match; entries without
/// results are skipped. Once `max_albums` matches are recorded, no further
/// entries are accepted. Accepted matches are appended to
/// `state.albums_success` in scrape order and their album ids are returned
/// in the same order.
pub fn select_matches(
    state: &mut RunState,
    results: &[Vec<String>],
    max_albums: Option<usize>,
) -> Vec<String> {
    let mut album_ids = Vec::new();

    for (entry, candidates) in state.scraped_albums.iter().zip(results) {
        if max_albums.is_some_and(|max| state.albums_success.len() >= max) {
            break;
        }

        let Some(album_id) = candidates.first() else {
            continue;
        };

        state.albums_success.push(MatchedAlbum {
            entry: entry.clone(),
            album_id: album_id.clone(),
        });
        album_ids.push(album_id.clone());
    }

    album_ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ScrapedEntry;

    fn state_with(entries: &[(&str, &str)]) -> RunState {
        RunState {
            scraped_albums: entries
                .iter()
                .map(|(artist, title)| ScrapedEntry::new(*artist, *title))
                .collect(),
            ..RunState::default()
        }
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn takes_first_result_and_skips_empty_ones() {
        let mut state = state_with(&[("A", "One"), ("B", "Two"), ("C", "Three")]);
        let results = vec![ids(&["a1", "a2"]), vec![], ids(&["c1"])];

        let chosen = select_matches(&mut state, &results, None);

        assert_eq!(chosen, ids(&["a1", "c1"]));
        let titles: Vec<&str> = state
            .albums_success
            .iter()
            .map(|m| m.entry.title.as_str())
            .collect();
        assert_eq!(titles, vec!["One", "Three"]);
    }

    #[test]
    fn stops_at_the_cap_in_scrape_order() {
        let mut state = state_with(&[
            ("A", "1"),
            ("B", "2"),
            ("C", "3"),
            ("D", "4"),
            ("E", "5"),
        ]);
        let results = vec![
            ids(&["a"]),
            ids(&["b"]),
            ids(&["c"]),
            ids(&["d"]),
            ids(&["e"]),
        ];

        let chosen = select_matches(&mut state, &results, Some(2));

        assert_eq!(chosen, ids(&["a", "b"]));
        assert_eq!(state.albums_success.len(), 2);
        assert_eq!(state.albums_success[0].entry.artist, "A");
        assert_eq!(state.albums_success[1].entry.artist, "B");
    }

    #[test]
    fn cap_counts_only_matched_entries() {
        let mut state = state_with(&[("A", "1"), ("B", "2"), ("C", "3")]);
        let results = vec![vec![], ids(&["b"]), ids(&["c"])];

        let chosen = select_matches(&mut state, &results, Some(2));

        assert_eq!(chosen, ids(&["b", "c"]));
    }

    #[test]
    fn keeps_duplicate_entries() {
        let mut state = state_with(&[("A", "1"), ("A", "1")]);
        let results = vec![ids(&["a"]), ids(&["a"])];

        let chosen = select_matches(&mut state, &results, None);

        assert_eq!(chosen.len(), 2);
        assert_eq!(state.albums_success.len(), 2);
    }
}
