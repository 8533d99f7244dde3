//! Tag extraction: raw HTML + base URL -> `SignalRecord`.
//!
//! Extraction is best-effort and total: malformed markup, unclosed tags, and
//! missing attributes degrade to `None` fields, never to an error. All
//! parsing is done using CSS selectors via the `scraper` crate.
//!
//! Extraction policy choices (deliberate, covered by tests):
//! - When the same logical signal appears more than once (e.g. two
//!   description meta tags), the first occurrence in document order wins.
//! - Meta `content` values are taken verbatim beyond normal entity decoding;
//!   only the title text is trimmed.
//! - Relative hrefs (canonical, favicon, og:image, twitter:image) are
//!   resolved against the base URL here, so analysis never sees a relative
//!   reference.

mod signals;

pub use signals::extract;

#[cfg(test)]
mod tests;
