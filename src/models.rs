//! Data structures shared between extraction and analysis.
//!
//! `SignalRecord` is the fixed schema of SEO signals pulled out of a page.
//! Every field is optional: `None` means the tag was absent, while
//! `Some(String::new())` means the tag was present with empty content. Rules
//! rely on that distinction, so extraction must never collapse the two.

use serde::Serialize;

/// On-page SEO signals extracted from a single document.
///
/// Any URL-valued field that is present has already been resolved against the
/// page's base URL; analysis never performs URL resolution itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignalRecord {
    /// Text content of the first `<title>` element, trimmed.
    pub title: Option<String>,
    /// `<meta name="description">` content, verbatim.
    pub description: Option<String>,
    /// `<meta name="keywords">` content, verbatim (comma-separated, unparsed).
    pub keywords: Option<String>,
    /// `<link rel="canonical">` href, resolved to an absolute URL.
    pub canonical: Option<String>,
    /// `<meta name="robots">` directive string, e.g. `"index,follow"`.
    pub robots: Option<String>,
    /// `<meta name="viewport">` content, verbatim.
    pub viewport: Option<String>,
    /// Open Graph (`og:*`) properties.
    pub og: OpenGraphTags,
    /// Twitter Card (`twitter:*`) properties.
    pub twitter: TwitterCardTags,
    /// Favicon URL from `<link rel="icon">` / `<link rel="shortcut icon">`,
    /// resolved to an absolute URL.
    pub favicon: Option<String>,
}

/// Open Graph metadata used by social link previews.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OpenGraphTags {
    /// `og:title` content.
    pub title: Option<String>,
    /// `og:description` content.
    pub description: Option<String>,
    /// `og:image` content, resolved to an absolute URL.
    pub image: Option<String>,
    /// `og:url` content, verbatim.
    pub url: Option<String>,
    /// `og:type` content (e.g. `website`, `article`).
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl OpenGraphTags {
    /// True if no `og:*` tag was found at all.
    pub fn is_absent(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.image.is_none()
            && self.url.is_none()
            && self.kind.is_none()
    }
}

/// Twitter Card metadata used by Twitter/X link previews.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TwitterCardTags {
    /// `twitter:card` content (e.g. `summary`, `summary_large_image`).
    pub card: Option<String>,
    /// `twitter:title` content.
    pub title: Option<String>,
    /// `twitter:description` content.
    pub description: Option<String>,
    /// `twitter:image` content, resolved to an absolute URL.
    pub image: Option<String>,
}

impl TwitterCardTags {
    /// True if no `twitter:*` tag was found at all.
    pub fn is_absent(&self) -> bool {
        self.card.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.image.is_none()
    }
}

/// How strongly a finding affects the page's SEO health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Signal is present and well-formed.
    Good,
    /// Signal is missing, malformed, or outside its ideal range; secondary impact.
    Warning,
    /// Signal with direct ranking or mobile-usability impact is missing.
    Critical,
}

/// One rule-engine verdict about a single signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Name of the signal the finding is about (e.g. `"title"`, `"open_graph"`).
    pub signal: &'static str,
    /// Severity of the verdict.
    pub severity: Severity,
    /// Human-readable description of what was found.
    pub message: String,
    /// Remediation hint, when one applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Finding {
    /// A `good` finding with no suggestion.
    pub fn good(signal: &'static str, message: impl Into<String>) -> Self {
        Finding {
            signal,
            severity: Severity::Good,
            message: message.into(),
            suggestion: None,
        }
    }

    /// A `warning` finding with a remediation hint.
    pub fn warning(
        signal: &'static str,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Finding {
            signal,
            severity: Severity::Warning,
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }

    /// A `critical` finding with a remediation hint.
    pub fn critical(
        signal: &'static str,
        message: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Finding {
            signal,
            severity: Severity::Critical,
            message: message.into(),
            suggestion: Some(suggestion.into()),
        }
    }
}

/// Output of the rule engine: ordered findings plus a summary score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// One finding per evaluated signal, in fixed rule order.
    pub findings: Vec<Finding>,
    /// Summary score in `[0, 100]`; see `config` for the penalty weights.
    pub score: u32,
}

/// Full report for one analyzed page, as serialized to JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoReport {
    /// The URL that was fetched (after normalization).
    pub url: String,
    /// Extracted signals (`null` for absent fields).
    pub meta_tags: SignalRecord,
    /// Rule-engine findings and score.
    pub analysis: Analysis,
}
