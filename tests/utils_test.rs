use chrono::NaiveDate;
use djlazy::types::{ScrapedEntry, Visibility};
use djlazy::utils::*;

#[test]
fn test_generate_state() {
    let state = generate_state();

    // Should be exactly 32 characters
    assert_eq!(state.len(), 32);

    // Should contain only alphanumeric characters
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated values should be different
    assert_ne!(state, generate_state());
}

#[test]
fn test_playlist_title() {
    let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
    assert_eq!(playlist_title(date), "DJ Lazy 3/7/2025");

    let date = NaiveDate::from_ymd_opt(2024, 12, 24).unwrap();
    assert_eq!(playlist_title(date), "DJ Lazy 12/24/2024");
}

#[test]
fn test_normalize_max() {
    assert_eq!(normalize_max(None), None);
    assert_eq!(normalize_max(Some(0)), None);
    assert_eq!(normalize_max(Some(3)), Some(3));
}

#[test]
fn test_visibility_parse() {
    assert_eq!(Visibility::parse("public"), Some(Visibility::Public));
    assert_eq!(Visibility::parse("Private"), Some(Visibility::Private));
    assert_eq!(Visibility::parse(" private "), Some(Visibility::Private));
    assert_eq!(Visibility::parse("secret"), None);
    assert_eq!(Visibility::default(), Visibility::Public);
}

#[test]
fn test_search_query() {
    let entry = ScrapedEntry::new("Wilco", "Cousin");
    assert_eq!(entry.search_query(), "album:Cousin artist:Wilco");
}
