//! Signal extraction from parsed HTML documents.

use regex::Regex;
use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::models::{OpenGraphTags, SignalRecord, TwitterCardTags};
use crate::utils::parse_selector_unsafe;

// CSS selector strings. Attribute value matching is case-sensitive, which is
// what we want: `og:title` is matched by key exactly.
const TITLE_SELECTOR_STR: &str = "title";
const META_DESCRIPTION_SELECTOR_STR: &str = "meta[name='description']";
const META_KEYWORDS_SELECTOR_STR: &str = "meta[name='keywords']";
const META_ROBOTS_SELECTOR_STR: &str = "meta[name='robots']";
const META_VIEWPORT_SELECTOR_STR: &str = "meta[name='viewport']";
const OG_TITLE_SELECTOR_STR: &str = "meta[property='og:title']";
const OG_DESCRIPTION_SELECTOR_STR: &str = "meta[property='og:description']";
const OG_IMAGE_SELECTOR_STR: &str = "meta[property='og:image']";
const OG_URL_SELECTOR_STR: &str = "meta[property='og:url']";
const OG_TYPE_SELECTOR_STR: &str = "meta[property='og:type']";
const TWITTER_CARD_SELECTOR_STR: &str = "meta[name='twitter:card']";
const TWITTER_TITLE_SELECTOR_STR: &str = "meta[name='twitter:title']";
const TWITTER_DESCRIPTION_SELECTOR_STR: &str = "meta[name='twitter:description']";
const TWITTER_IMAGE_SELECTOR_STR: &str = "meta[name='twitter:image']";
const CANONICAL_SELECTOR_STR: &str = "link[rel='canonical']";
const LINK_REL_SELECTOR_STR: &str = "link[rel]";

/// Favicon rel values: `icon` or `shortcut icon`, case-insensitively.
const ICON_REL_PATTERN: &str = r"(?i)^(icon|shortcut icon)$";

static TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TITLE_SELECTOR_STR, "TITLE_SELECTOR"));
static META_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(META_DESCRIPTION_SELECTOR_STR, "META_DESCRIPTION_SELECTOR")
});
static META_KEYWORDS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(META_KEYWORDS_SELECTOR_STR, "META_KEYWORDS_SELECTOR"));
static META_ROBOTS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(META_ROBOTS_SELECTOR_STR, "META_ROBOTS_SELECTOR"));
static META_VIEWPORT_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(META_VIEWPORT_SELECTOR_STR, "META_VIEWPORT_SELECTOR"));
static OG_TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(OG_TITLE_SELECTOR_STR, "OG_TITLE_SELECTOR"));
static OG_DESCRIPTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(OG_DESCRIPTION_SELECTOR_STR, "OG_DESCRIPTION_SELECTOR"));
static OG_IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(OG_IMAGE_SELECTOR_STR, "OG_IMAGE_SELECTOR"));
static OG_URL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(OG_URL_SELECTOR_STR, "OG_URL_SELECTOR"));
static OG_TYPE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(OG_TYPE_SELECTOR_STR, "OG_TYPE_SELECTOR"));
static TWITTER_CARD_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TWITTER_CARD_SELECTOR_STR, "TWITTER_CARD_SELECTOR"));
static TWITTER_TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TWITTER_TITLE_SELECTOR_STR, "TWITTER_TITLE_SELECTOR"));
static TWITTER_DESCRIPTION_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    parse_selector_unsafe(
        TWITTER_DESCRIPTION_SELECTOR_STR,
        "TWITTER_DESCRIPTION_SELECTOR",
    )
});
static TWITTER_IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(TWITTER_IMAGE_SELECTOR_STR, "TWITTER_IMAGE_SELECTOR"));
static CANONICAL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(CANONICAL_SELECTOR_STR, "CANONICAL_SELECTOR"));
static LINK_REL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(LINK_REL_SELECTOR_STR, "LINK_REL_SELECTOR"));

static ICON_REL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(ICON_REL_PATTERN).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}': {}. This is a programming error.",
            ICON_REL_PATTERN, e
        )
    })
});

/// Extracts all SEO signals from raw HTML.
///
/// Never fails: any signal that cannot be located (or whose markup is
/// malformed) comes back as `None`. Relative URLs are resolved against
/// `base_url` before they land in the record.
///
/// # Arguments
///
/// * `html` - Raw page markup
/// * `base_url` - The page's resolved absolute base URL (scheme + host of the
///   final request URL)
pub fn extract(html: &str, base_url: &Url) -> SignalRecord {
    let document = Html::parse_document(html);

    let og = OpenGraphTags {
        title: first_attr_value(&document, &OG_TITLE_SELECTOR, "content"),
        description: first_attr_value(&document, &OG_DESCRIPTION_SELECTOR, "content"),
        image: first_attr_value(&document, &OG_IMAGE_SELECTOR, "content")
            .map(|href| resolve_url(&href, base_url)),
        url: first_attr_value(&document, &OG_URL_SELECTOR, "content"),
        kind: first_attr_value(&document, &OG_TYPE_SELECTOR, "content"),
    };

    let twitter = TwitterCardTags {
        card: first_attr_value(&document, &TWITTER_CARD_SELECTOR, "content"),
        title: first_attr_value(&document, &TWITTER_TITLE_SELECTOR, "content"),
        description: first_attr_value(&document, &TWITTER_DESCRIPTION_SELECTOR, "content"),
        image: first_attr_value(&document, &TWITTER_IMAGE_SELECTOR, "content")
            .map(|href| resolve_url(&href, base_url)),
    };

    SignalRecord {
        title: extract_title(&document),
        description: first_attr_value(&document, &META_DESCRIPTION_SELECTOR, "content"),
        keywords: first_attr_value(&document, &META_KEYWORDS_SELECTOR, "content"),
        canonical: first_attr_value(&document, &CANONICAL_SELECTOR, "href")
            .map(|href| resolve_url(&href, base_url)),
        robots: first_attr_value(&document, &META_ROBOTS_SELECTOR, "content"),
        viewport: first_attr_value(&document, &META_VIEWPORT_SELECTOR, "content"),
        og,
        twitter,
        favicon: extract_favicon(&document, base_url),
    }
}

/// Extracts the text content of the first `<title>` element, trimmed.
fn extract_title(document: &Html) -> Option<String> {
    let element = document.select(&TITLE_SELECTOR).next()?;
    // text() handles HTML entities and nested tags correctly
    let title: String = element.text().collect::<String>().trim().to_string();
    log::debug!("Extracted title: '{}' ({} chars)", title, title.len());
    Some(title)
}

/// Returns the value of `attr` on the first element matching `selector`.
///
/// This is the one lookup shared by every meta/link signal: locate the first
/// match in document order (duplicates are ignored) and return the attribute
/// verbatim, or `None` if the element or the attribute is absent.
fn first_attr_value(document: &Html, selector: &Selector, attr: &str) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .map(|value| value.to_string())
}

/// Finds the favicon from `<link rel="icon">` or `<link rel="shortcut icon">`
/// (case-insensitive) and resolves its href against the base URL.
fn extract_favicon(document: &Html, base_url: &Url) -> Option<String> {
    document
        .select(&LINK_REL_SELECTOR)
        .find(|element| {
            element
                .value()
                .attr("rel")
                .is_some_and(|rel| ICON_REL_RE.is_match(rel.trim()))
        })
        .and_then(|element| element.value().attr("href"))
        .map(|href| resolve_url(href, base_url))
}

/// Resolves a possibly-relative href against the base URL.
///
/// Absolute http(s) URLs pass through untouched. Anything else is joined onto
/// the base; if even that fails the raw value is kept so the rule engine can
/// flag it as malformed instead of reporting the tag as missing.
fn resolve_url(href: &str, base_url: &Url) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    match base_url.join(href) {
        Ok(resolved) => resolved.to_string(),
        Err(e) => {
            log::debug!("Could not resolve '{}' against {}: {}", href, base_url, e);
            href.to_string()
        }
    }
}
