use djlazy::{
    DjError,
    listing::{ListingSelectors, parse_listing},
    types::ScrapedEntry,
};

const NEW_RELEASES_PAGE: &str = r#"
<html>
  <body>
    <div class="featured-rows">
      <div class="row">
        <div class="featured">
          <div class="title"><a href="/album/1">Cousin</a> <a href="/album/1/credits">credits</a></div>
          <div class="artist"><a href="/artist/1">Wilco</a></div>
        </div>
        <div class="featured">
          <div class="title"><a href="/album/2">  Tension &amp; Release  </a></div>
          <div class="artist"><a href="/artist/2">Some Band</a><a href="/artist/3">Guest</a></div>
        </div>
      </div>
      <div class="row">
        <div class="featured">
          <div class="title"><a href="/album/3">No Artist Here</a></div>
        </div>
        <div class="featured">
          <div class="title"><a href="/album/1">Cousin</a></div>
          <div class="artist"><a href="/artist/1">Wilco</a></div>
        </div>
      </div>
    </div>
    <div class="sidebar">
      <div class="featured">
        <div class="title"><a href="/album/9">Not In The Listing</a></div>
        <div class="artist"><a href="/artist/9">Elsewhere</a></div>
      </div>
    </div>
  </body>
</html>
"#;

#[test]
fn test_parses_rows_in_page_order() {
    let entries = parse_listing(NEW_RELEASES_PAGE, &ListingSelectors::default()).unwrap();

    assert_eq!(
        entries,
        vec![
            ScrapedEntry::new("Wilco", "Cousin"),
            ScrapedEntry::new("Some Band", "Tension & Release"),
            ScrapedEntry::new("Wilco", "Cousin"),
        ]
    );
}

#[test]
fn test_page_without_rows_is_empty_not_an_error() {
    let entries = parse_listing(
        "<html><body><p>Nothing new</p></body></html>",
        &ListingSelectors::default(),
    )
    .unwrap();

    assert!(entries.is_empty());
}

#[test]
fn test_invalid_selector_is_a_scrape_error() {
    let selectors = ListingSelectors {
        row: "div[".to_string(),
        ..ListingSelectors::default()
    };

    let err = parse_listing(NEW_RELEASES_PAGE, &selectors).unwrap_err();
    assert!(matches!(err, DjError::Scrape(_)));
}

#[test]
fn test_custom_selectors() {
    let html = r#"
      <ul>
        <li class="hit"><span class="by">Artist A</span><span class="name">Album A</span></li>
        <li class="hit"><span class="by">Artist B</span><span class="name">Album B</span></li>
      </ul>
    "#;
    let selectors = ListingSelectors {
        row: "li.hit".to_string(),
        artist: ".by".to_string(),
        title: ".name".to_string(),
    };

    let entries = parse_listing(html, &selectors).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1], ScrapedEntry::new("Artist B", "Album B"));
}
