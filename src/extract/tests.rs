//! Extract module tests.

use super::*;
use url::Url;

fn base() -> Url {
    Url::parse("https://example.com").expect("static test URL should parse")
}

#[test]
fn test_extract_title_basic() {
    let html = r#"<html><head><title>Test Page</title></head><body></body></html>"#;
    let record = extract(html, &base());
    assert_eq!(record.title.as_deref(), Some("Test Page"));
}

#[test]
fn test_extract_title_trims_whitespace() {
    // Common gotcha: titles with extra whitespace/newlines
    let html = r#"<html><head><title>
        Test Page
    </title></head></html>"#;
    let record = extract(html, &base());
    assert_eq!(record.title.as_deref(), Some("Test Page"));
}

#[test]
fn test_extract_title_missing_vs_empty() {
    let missing = extract(r#"<html><head></head></html>"#, &base());
    assert_eq!(missing.title, None);

    let empty = extract(r#"<html><head><title></title></head></html>"#, &base());
    assert_eq!(empty.title.as_deref(), Some(""));
}

#[test]
fn test_extract_title_first_wins() {
    let html = r#"<html><head><title>First</title><title>Second</title></head></html>"#;
    let record = extract(html, &base());
    assert_eq!(record.title.as_deref(), Some("First"));
}

#[test]
fn test_extract_description_verbatim() {
    // content is taken verbatim, no trimming
    let html =
        r#"<html><head><meta name="description" content="  A test description  "></head></html>"#;
    let record = extract(html, &base());
    assert_eq!(record.description.as_deref(), Some("  A test description  "));
}

#[test]
fn test_extract_description_duplicate_first_wins() {
    // Extraction policy: the first occurrence of a duplicated tag wins
    let html = r#"<html><head>
        <meta name="description" content="first description">
        <meta name="description" content="second description">
    </head></html>"#;
    let record = extract(html, &base());
    assert_eq!(record.description.as_deref(), Some("first description"));
}

#[test]
fn test_extract_description_missing_vs_empty() {
    // "tag absent" and "tag present but empty" are different states
    let missing = extract(r#"<html><head></head></html>"#, &base());
    assert_eq!(missing.description, None);

    let empty = extract(
        r#"<html><head><meta name="description" content=""></head></html>"#,
        &base(),
    );
    assert_eq!(empty.description.as_deref(), Some(""));
}

#[test]
fn test_extract_meta_without_content_attr_is_missing() {
    let html = r#"<html><head><meta name="description"></head></html>"#;
    let record = extract(html, &base());
    assert_eq!(record.description, None);
}

#[test]
fn test_extract_keywords_and_robots_and_viewport() {
    let html = r#"<html><head>
        <meta name="keywords" content="rust, seo, analysis">
        <meta name="robots" content="index,follow">
        <meta name="viewport" content="width=device-width, initial-scale=1">
    </head></html>"#;
    let record = extract(html, &base());
    assert_eq!(record.keywords.as_deref(), Some("rust, seo, analysis"));
    assert_eq!(record.robots.as_deref(), Some("index,follow"));
    assert_eq!(
        record.viewport.as_deref(),
        Some("width=device-width, initial-scale=1")
    );
}

#[test]
fn test_extract_canonical_resolves_relative() {
    let html = r#"<html><head><link rel="canonical" href="/about"></head></html>"#;
    let record = extract(html, &base());
    assert_eq!(record.canonical.as_deref(), Some("https://example.com/about"));
}

#[test]
fn test_extract_canonical_keeps_absolute() {
    let html =
        r#"<html><head><link rel="canonical" href="https://other.example/page"></head></html>"#;
    let record = extract(html, &base());
    assert_eq!(record.canonical.as_deref(), Some("https://other.example/page"));
}

#[test]
fn test_extract_open_graph_full_set() {
    let html = r#"<html><head>
        <meta property="og:title" content="OG Title">
        <meta property="og:description" content="OG Description">
        <meta property="og:image" content="/img/card.png">
        <meta property="og:url" content="https://example.com/page">
        <meta property="og:type" content="website">
    </head></html>"#;
    let record = extract(html, &base());
    assert_eq!(record.og.title.as_deref(), Some("OG Title"));
    assert_eq!(record.og.description.as_deref(), Some("OG Description"));
    assert_eq!(
        record.og.image.as_deref(),
        Some("https://example.com/img/card.png")
    );
    assert_eq!(record.og.url.as_deref(), Some("https://example.com/page"));
    assert_eq!(record.og.kind.as_deref(), Some("website"));
}

#[test]
fn test_extract_og_lookup_is_by_property_not_name() {
    // og:* lives in the property attribute; a name attribute must not match
    let html = r#"<html><head><meta name="og:title" content="wrong"></head></html>"#;
    let record = extract(html, &base());
    assert_eq!(record.og.title, None);
}

#[test]
fn test_extract_twitter_card() {
    let html = r#"<html><head>
        <meta name="twitter:card" content="summary_large_image">
        <meta name="twitter:title" content="Tweet Title">
        <meta name="twitter:image" content="//cdn.example.com/card.png">
    </head></html>"#;
    let record = extract(html, &base());
    assert_eq!(record.twitter.card.as_deref(), Some("summary_large_image"));
    assert_eq!(record.twitter.title.as_deref(), Some("Tweet Title"));
    // Protocol-relative URLs pick up the base URL's scheme
    assert_eq!(
        record.twitter.image.as_deref(),
        Some("https://cdn.example.com/card.png")
    );
    assert_eq!(record.twitter.description, None);
}

#[test]
fn test_extract_favicon_relative_resolution() {
    let html = r#"<html><head><link rel="icon" href="/favicon.ico"></head></html>"#;
    let record = extract(html, &base());
    assert_eq!(
        record.favicon.as_deref(),
        Some("https://example.com/favicon.ico")
    );
}

#[test]
fn test_extract_favicon_shortcut_icon_case_insensitive() {
    let html = r#"<html><head><link rel="Shortcut Icon" href="fav.png"></head></html>"#;
    let record = extract(html, &base());
    assert_eq!(record.favicon.as_deref(), Some("https://example.com/fav.png"));
}

#[test]
fn test_extract_favicon_ignores_other_rels() {
    let html = r#"<html><head>
        <link rel="stylesheet" href="/style.css">
        <link rel="apple-touch-icon" href="/apple.png">
    </head></html>"#;
    let record = extract(html, &base());
    assert_eq!(record.favicon, None);
}

#[test]
fn test_extract_tolerates_malformed_markup() {
    // Unclosed tags and garbage must degrade to missing fields, not errors
    let html = r#"<html><head><title>Broken<meta name="description" content="still here"<div><<<"#;
    let record = extract(html, &base());
    assert!(record.canonical.is_none());
    assert!(record.favicon.is_none());
}

#[test]
fn test_extract_empty_input() {
    let record = extract("", &base());
    assert_eq!(record, crate::models::SignalRecord::default());
}
