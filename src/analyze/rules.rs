//! Individual SEO rules, one per signal.
//!
//! Each rule is independent and produces exactly one finding. Severity
//! policy for absent signals: title, description, canonical, and viewport
//! are critical (direct ranking or mobile-usability impact); keywords,
//! robots, Open Graph, Twitter Card, and favicon are warnings (secondary
//! signals).

use url::Url;

use crate::config::{
    DESCRIPTION_MAX_CHARS, DESCRIPTION_MIN_CHARS, TITLE_MAX_CHARS, TITLE_MIN_CHARS,
};
use crate::models::{Finding, OpenGraphTags, TwitterCardTags};

pub(super) fn check_title(title: &Option<String>) -> Finding {
    let Some(title) = title else {
        return Finding::critical(
            "title",
            "Missing title tag",
            format!(
                "Add a <title> tag that describes the page in {}-{} characters",
                TITLE_MIN_CHARS, TITLE_MAX_CHARS
            ),
        );
    };

    let length = title.chars().count();
    if length == 0 {
        Finding::warning(
            "title",
            "Title tag is present but empty",
            "Fill in the <title> tag; an empty title is ignored by search engines",
        )
    } else if length < TITLE_MIN_CHARS {
        Finding::warning(
            "title",
            format!("Title may be too short or generic ({} characters)", length),
            format!(
                "Expand the title to {}-{} characters with descriptive keywords",
                TITLE_MIN_CHARS, TITLE_MAX_CHARS
            ),
        )
    } else if length > TITLE_MAX_CHARS {
        Finding::warning(
            "title",
            format!(
                "Title may be truncated in search results ({} characters)",
                length
            ),
            format!("Shorten the title to at most {} characters", TITLE_MAX_CHARS),
        )
    } else {
        Finding::good("title", "Title is present and within the ideal length")
    }
}

pub(super) fn check_description(description: &Option<String>) -> Finding {
    let Some(description) = description else {
        return Finding::critical(
            "description",
            "Missing meta description",
            format!(
                "Add a <meta name=\"description\"> summarizing the page in {}-{} characters",
                DESCRIPTION_MIN_CHARS, DESCRIPTION_MAX_CHARS
            ),
        );
    };

    let length = description.chars().count();
    if length == 0 {
        Finding::warning(
            "description",
            "Meta description is present but empty",
            "Fill in the description; search engines will substitute arbitrary page text",
        )
    } else if length < DESCRIPTION_MIN_CHARS {
        Finding::warning(
            "description",
            format!("Meta description may be too thin ({} characters)", length),
            format!(
                "Expand the description to {}-{} characters",
                DESCRIPTION_MIN_CHARS, DESCRIPTION_MAX_CHARS
            ),
        )
    } else if length > DESCRIPTION_MAX_CHARS {
        Finding::warning(
            "description",
            format!(
                "Meta description may be truncated in search results ({} characters)",
                length
            ),
            format!(
                "Shorten the description to at most {} characters",
                DESCRIPTION_MAX_CHARS
            ),
        )
    } else {
        Finding::good(
            "description",
            "Meta description is present and within the ideal length",
        )
    }
}

pub(super) fn check_keywords(keywords: &Option<String>) -> Finding {
    match keywords {
        None => Finding::warning(
            "keywords",
            "Missing meta keywords tag",
            "Add a <meta name=\"keywords\"> tag; a minor signal, but cheap to provide",
        ),
        Some(value) if value.trim().is_empty() => Finding::warning(
            "keywords",
            "Meta keywords tag is present but empty",
            "List a few comma-separated keywords relevant to the page",
        ),
        Some(_) => Finding::good("keywords", "Meta keywords are present"),
    }
}

pub(super) fn check_canonical(canonical: &Option<String>) -> Finding {
    match canonical {
        None => Finding::critical(
            "canonical",
            "Missing canonical link",
            "Add a <link rel=\"canonical\"> pointing at the preferred URL for this page",
        ),
        Some(value) if !is_valid_absolute_url(value) => Finding::warning(
            "canonical",
            format!("Canonical URL is not a valid absolute URL: '{}'", value),
            "Use a fully-qualified http(s) URL in the canonical link",
        ),
        Some(_) => Finding::good("canonical", "Canonical URL is present and well-formed"),
    }
}

pub(super) fn check_robots(robots: &Option<String>) -> Finding {
    match robots {
        None => Finding::warning(
            "robots",
            "No robots meta tag",
            "Add a <meta name=\"robots\"> tag to state indexing intent explicitly",
        ),
        Some(value) if value.to_ascii_lowercase().contains("noindex") => Finding::warning(
            "robots",
            format!("Robots directive excludes this page from indexing: '{}'", value),
            "Remove 'noindex' if this page should appear in search results",
        ),
        Some(_) => Finding::good("robots", "Robots directive is present"),
    }
}

pub(super) fn check_viewport(viewport: &Option<String>) -> Finding {
    match viewport {
        None => Finding::critical(
            "viewport",
            "Missing viewport meta tag",
            "Add <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"> for mobile usability",
        ),
        Some(value) if value.trim().is_empty() => Finding::warning(
            "viewport",
            "Viewport meta tag is present but empty",
            "Set content=\"width=device-width, initial-scale=1\"",
        ),
        Some(_) => Finding::good("viewport", "Viewport meta tag is present"),
    }
}

pub(super) fn check_open_graph(og: &OpenGraphTags) -> Finding {
    if og.is_absent() {
        return Finding::warning(
            "open_graph",
            "No Open Graph tags found",
            "Add og:title, og:description, and og:image for rich social link previews",
        );
    }

    // Completeness: title, description, and image all present, in one finding
    let mut missing = Vec::new();
    if og.title.is_none() {
        missing.push("og:title");
    }
    if og.description.is_none() {
        missing.push("og:description");
    }
    if og.image.is_none() {
        missing.push("og:image");
    }
    if !missing.is_empty() {
        return Finding::warning(
            "open_graph",
            format!("Open Graph set is incomplete; missing: {}", missing.join(", ")),
            "Provide the missing og:* tags so previews render with title, text, and image",
        );
    }

    if let Some(image) = &og.image {
        if !is_valid_absolute_url(image) {
            return Finding::warning(
                "open_graph",
                format!("og:image is not a valid absolute URL: '{}'", image),
                "Use a fully-qualified http(s) URL for og:image",
            );
        }
    }

    Finding::good("open_graph", "Open Graph tags are complete")
}

pub(super) fn check_twitter(twitter: &TwitterCardTags) -> Finding {
    if twitter.is_absent() {
        return Finding::warning(
            "twitter_card",
            "No Twitter Card tags found",
            "Add twitter:card and twitter:title for Twitter/X link previews",
        );
    }

    let mut missing = Vec::new();
    if twitter.card.is_none() {
        missing.push("twitter:card");
    }
    if twitter.title.is_none() {
        missing.push("twitter:title");
    }
    if !missing.is_empty() {
        return Finding::warning(
            "twitter_card",
            format!(
                "Twitter Card set is incomplete; missing: {}",
                missing.join(", ")
            ),
            "Provide the missing twitter:* tags; card type and title are the minimum",
        );
    }

    if let Some(image) = &twitter.image {
        if !is_valid_absolute_url(image) {
            return Finding::warning(
                "twitter_card",
                format!("twitter:image is not a valid absolute URL: '{}'", image),
                "Use a fully-qualified http(s) URL for twitter:image",
            );
        }
    }

    Finding::good("twitter_card", "Twitter Card tags are present")
}

pub(super) fn check_favicon(favicon: &Option<String>) -> Finding {
    match favicon {
        None => Finding::warning(
            "favicon",
            "No favicon link found",
            "Add a <link rel=\"icon\"> so browsers and result pages can show your icon",
        ),
        Some(value) if !is_valid_absolute_url(value) => Finding::warning(
            "favicon",
            format!("Favicon URL is not a valid absolute URL: '{}'", value),
            "Point the icon link at a resolvable http(s) URL",
        ),
        Some(_) => Finding::good("favicon", "Favicon is present and well-formed"),
    }
}

/// True if `value` parses as an absolute http(s) URL with a host.
fn is_valid_absolute_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.host_str().is_some(),
        Err(_) => false,
    }
}
