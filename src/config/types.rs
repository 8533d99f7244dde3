//! Configuration types and CLI options.

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Configuration for a single page analysis.
///
/// Doubles as the CLI surface: `Config::parse()` in the binary, or construct
/// it programmatically (e.g. `Config { url: ..., ..Default::default() }`) when
/// using the library.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "seo_inspector",
    about = "Fetch a web page and analyze its on-page SEO signals"
)]
pub struct Config {
    /// URL of the page to analyze (https:// is assumed if no scheme is given)
    pub url: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Emit the report as a single line instead of pretty-printed JSON
    #[arg(long)]
    pub compact: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: String::new(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            compact: false,
        }
    }
}
