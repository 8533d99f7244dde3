//! Error type definitions.
//!
//! The extraction and analysis core is total: malformed markup degrades to
//! missing fields, and every `SignalRecord` produces an analysis. All failure
//! modes live at the fetch boundary, and each class gets a distinct
//! user-facing message so "could not reach the target" is never conflated
//! with "target responded with an error status".

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failure classes for fetching the target page.
///
/// None of these ever reach the extraction/analysis core; the caller reports
/// them upstream before the core is invoked.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The input string could not be turned into a valid http(s) URL.
    #[error("'{0}' is not a valid URL")]
    InvalidUrl(String),

    /// Could not reach the target (DNS failure, refused connection, etc.).
    #[error("could not reach {url}: {source}")]
    Unreachable {
        /// The URL that was being fetched.
        url: String,
        /// Underlying transport error.
        source: ReqwestError,
    },

    /// The target responded, but with a non-success status.
    #[error("{url} responded with an error status: {status}")]
    ErrorStatus {
        /// The URL that was being fetched.
        url: String,
        /// The HTTP status the target returned.
        status: reqwest::StatusCode,
    },

    /// The request timed out.
    #[error("timed out fetching {url} after {timeout_secs}s")]
    Timeout {
        /// The URL that was being fetched.
        url: String,
        /// The configured timeout.
        timeout_secs: u64,
    },

    /// An unexpected internal error occurred while fetching or reading the body.
    #[error("an unexpected error occurred while fetching {url}: {source}")]
    Internal {
        /// The URL that was being fetched.
        url: String,
        /// Underlying error.
        source: ReqwestError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_messages_are_distinct() {
        let invalid = FetchError::InvalidUrl("not a url".to_string());
        let status = FetchError::ErrorStatus {
            url: "https://example.com".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };
        let timeout = FetchError::Timeout {
            url: "https://example.com".to_string(),
            timeout_secs: 10,
        };

        let messages = [invalid.to_string(), status.to_string(), timeout.to_string()];
        for (i, a) in messages.iter().enumerate() {
            for b in messages.iter().skip(i + 1) {
                assert_ne!(a, b, "each failure class needs its own message");
            }
        }
    }

    #[test]
    fn test_error_status_message_names_the_status() {
        let err = FetchError::ErrorStatus {
            url: "https://example.com".to_string(),
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("error status"));
    }

    #[test]
    fn test_timeout_message_names_the_budget() {
        let err = FetchError::Timeout {
            url: "https://example.com".to_string(),
            timeout_secs: 7,
        };
        assert!(err.to_string().contains("7s"));
    }
}
