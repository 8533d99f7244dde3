//! seo_inspector library: single-page SEO signal extraction and analysis.
//!
//! Fetches one web page and evaluates its on-page SEO signals (title, meta
//! description, keywords, canonical link, robots, viewport, Open Graph,
//! Twitter Card, favicon). The core is two pure functions consumed in
//! sequence: [`extract::extract`] turns raw markup plus a base URL into a
//! [`SignalRecord`], and [`analyze::analyze`] turns that record into ordered
//! findings plus a summary score. Fetching is a thin transport layer in
//! front of the core; its failures never reach extraction or analysis.
//!
//! # Example
//!
//! ```no_run
//! use seo_inspector::{run_analysis, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     url: "example.com".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_analysis(&config).await?;
//! println!("{} scored {}", report.url, report.analysis.score);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod analyze;
pub mod config;
mod error_handling;
pub mod extract;
mod fetch;
pub mod initialization;
mod models;
mod utils;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{FetchError, InitializationError};
pub use fetch::{fetch_page, normalize_target_url, FetchedPage};
pub use models::{
    Analysis, Finding, OpenGraphTags, SeoReport, Severity, SignalRecord, TwitterCardTags,
};
pub use run::run_analysis;

// Internal run module (fetch -> extract -> analyze pipeline)
mod run {
    use anyhow::{Context, Result};
    use log::info;

    use crate::analyze::analyze;
    use crate::config::Config;
    use crate::extract::extract;
    use crate::fetch::{fetch_page, normalize_target_url};
    use crate::initialization::init_client;
    use crate::models::SeoReport;

    /// Fetches a page and runs the full SEO analysis pipeline.
    ///
    /// This is the main entry point for the library. The input URL is
    /// normalized (https:// assumed when no scheme is given), the page is
    /// fetched, and the extracted signals are analyzed.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the fetch fails; the
    /// underlying [`crate::FetchError`] stays in the chain so callers can
    /// distinguish unreachable targets from error statuses from timeouts.
    /// Extraction and analysis themselves never fail.
    pub async fn run_analysis(config: &Config) -> Result<SeoReport> {
        let url = normalize_target_url(&config.url)?;
        info!("Analyzing {}", url);

        let client = init_client(config).context("Failed to initialize HTTP client")?;
        let page = fetch_page(&client, &url, config.timeout_seconds).await?;

        // Extraction consumes the whole document before analysis starts
        let meta_tags = extract(&page.html, &page.base_url);
        let analysis = analyze(&meta_tags);

        info!(
            "{}: {} findings, score {}",
            page.final_url,
            analysis.findings.len(),
            analysis.score
        );

        Ok(SeoReport {
            url,
            meta_tags,
            analysis,
        })
    }
}
