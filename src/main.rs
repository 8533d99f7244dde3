//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_inspector` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - JSON output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use seo_inspector::initialization::init_logger_with;
use seo_inspector::{run_analysis, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_analysis(&config).await {
        Ok(report) => {
            let json = if config.compact {
                serde_json::to_string(&report)
            } else {
                serde_json::to_string_pretty(&report)
            }
            .context("Failed to serialize report")?;
            println!("{json}");
            Ok(())
        }
        Err(e) => {
            eprintln!("seo_inspector error: {:#}", e);
            process::exit(1);
        }
    }
}
