use djlazy::{
    report::{REPORT_TITLE, render},
    types::{MatchedAlbum, ScrapedEntry},
};

fn matched(artist: &str, title: &str) -> MatchedAlbum {
    MatchedAlbum {
        entry: ScrapedEntry::new(artist, title),
        album_id: format!("{artist}-{title}"),
    }
}

#[test]
fn test_empty_report_has_only_the_heading() {
    let out = render(&[]);
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], REPORT_TITLE);
    assert!(lines[1].chars().all(|c| c == '='));
}

#[test]
fn test_report_lists_albums_in_order() {
    let out = render(&[matched("Wilco", "Cousin"), matched("Some Band", "Second")]);

    assert!(out.starts_with(REPORT_TITLE));
    assert!(out.contains("Title"));
    assert!(out.contains("Artist"));

    let cousin = out.find("Cousin").unwrap();
    let second = out.find("Second").unwrap();
    assert!(cousin < second);
    assert!(out.contains("Wilco"));
    assert!(out.contains("Some Band"));
}
