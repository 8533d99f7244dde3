//! CSS selector parsing utilities.

use scraper::Selector;

/// Parses a CSS selector that must succeed (compile-time constants only).
///
/// # Panics
///
/// Panics if the selector cannot be parsed, which indicates a programming
/// error in one of the static selector strings.
pub fn parse_selector_unsafe(selector_str: &str, context: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}' in {}: {}. This is a programming error.",
            selector_str, context, e
        )
    })
}
