//! Configuration constants.
//!
//! Thresholds and scoring weights are deliberate policy choices. They are
//! tunable, but they must stay stable within a build so the same page always
//! scores identically.

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// A browser-like User-Agent avoids trivial bot blocks that would otherwise
/// prevent fetching the page at all. Users can override this via the
/// `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Maximum response body size in bytes (2MB).
/// Reading stops at this cap; all the signals we care about live in `<head>`,
/// so a truncated tail does not affect extraction.
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

// Length thresholds (in characters, not bytes)
/// Titles shorter than this are flagged as possibly too short or generic.
/// Set above the common 10-character floor so very short titles get flagged.
pub const TITLE_MIN_CHARS: usize = 15;
/// Titles longer than this risk truncation in search result pages.
pub const TITLE_MAX_CHARS: usize = 60;
/// Descriptions shorter than this are flagged as thin.
pub const DESCRIPTION_MIN_CHARS: usize = 50;
/// Descriptions longer than this risk truncation in search result pages.
pub const DESCRIPTION_MAX_CHARS: usize = 160;

// Scoring weights
/// Perfect baseline score before penalties.
pub const SCORE_BASELINE: u32 = 100;
/// Points subtracted per critical finding.
pub const CRITICAL_PENALTY: u32 = 15;
/// Points subtracted per warning finding.
pub const WARNING_PENALTY: u32 = 5;
