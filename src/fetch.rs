//! Page fetching.
//!
//! This is the transport boundary in front of the pure extraction/analysis
//! core. Every failure mode (unreachable host, error status, timeout) is
//! mapped to a distinct `FetchError` here and never reaches the core.

use futures::StreamExt;
use url::Url;

use crate::config::MAX_RESPONSE_BODY_SIZE;
use crate::error_handling::FetchError;

/// A fetched page ready for extraction.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Decoded response body (lossy UTF-8, capped at `MAX_RESPONSE_BODY_SIZE`).
    pub html: String,
    /// Base URL for resolving relative references: scheme + host (+ port) of
    /// the final URL after redirects, not the URL that was requested.
    pub base_url: Url,
    /// The final URL after redirects.
    pub final_url: String,
}

/// Validates and normalizes the user-supplied target URL.
///
/// A missing scheme defaults to `https://`, matching what users type into a
/// browser. Anything that still fails to parse as an http(s) URL is rejected.
pub fn normalize_target_url(input: &str) -> Result<String, FetchError> {
    let normalized = if !input.starts_with("http://") && !input.starts_with("https://") {
        format!("https://{input}")
    } else {
        input.to_string()
    };

    match Url::parse(&normalized) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_some() => {
            Ok(normalized)
        }
        _ => Err(FetchError::InvalidUrl(input.to_string())),
    }
}

/// Fetches the page at `url` and prepares it for extraction.
///
/// Follows redirects (client policy), enforces the client's timeout, streams
/// the body up to `MAX_RESPONSE_BODY_SIZE`, and derives the base URL from the
/// final response URL.
///
/// # Errors
///
/// Returns a `FetchError` variant matching the failure class: `Unreachable`,
/// `ErrorStatus`, `Timeout`, or `Internal`.
pub async fn fetch_page(
    client: &reqwest::Client,
    url: &str,
    timeout_secs: u64,
) -> Result<FetchedPage, FetchError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| categorize_send_error(url, timeout_secs, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::ErrorStatus {
            url: url.to_string(),
            status,
        });
    }

    let final_url = response.url().clone();
    let base_url = origin_of(&final_url).ok_or_else(|| FetchError::InvalidUrl(url.to_string()))?;

    let body = read_body_capped(url, timeout_secs, response).await?;
    log::debug!(
        "Fetched {} ({} bytes, final URL {})",
        url,
        body.len(),
        final_url
    );

    Ok(FetchedPage {
        html: String::from_utf8_lossy(&body).into_owned(),
        base_url,
        final_url: final_url.to_string(),
    })
}

/// Streams the response body with a size cap.
///
/// Stops reading at `MAX_RESPONSE_BODY_SIZE` and keeps what was read so far;
/// the signals we extract live in `<head>`, which is always near the front.
async fn read_body_capped(
    url: &str,
    timeout_secs: u64,
    response: reqwest::Response,
) -> Result<Vec<u8>, FetchError> {
    let mut stream = response.bytes_stream();
    let mut buf = Vec::with_capacity(64 * 1024);

    while let Some(chunk_result) = stream.next().await {
        let chunk = chunk_result.map_err(|e| categorize_send_error(url, timeout_secs, e))?;
        if buf.len() + chunk.len() > MAX_RESPONSE_BODY_SIZE {
            let remaining = MAX_RESPONSE_BODY_SIZE - buf.len();
            buf.extend_from_slice(&chunk[..remaining]);
            log::warn!(
                "Response body for {} exceeds {} bytes; truncating",
                url,
                MAX_RESPONSE_BODY_SIZE
            );
            break;
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(buf)
}

/// Maps a transport-level `reqwest::Error` to the matching `FetchError` class.
fn categorize_send_error(url: &str, timeout_secs: u64, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
            timeout_secs,
        }
    } else if error.is_connect() || error.is_request() {
        FetchError::Unreachable {
            url: url.to_string(),
            source: error,
        }
    } else {
        FetchError::Internal {
            url: url.to_string(),
            source: error,
        }
    }
}

/// Reduces a URL to its origin (scheme + host + optional port).
fn origin_of(url: &Url) -> Option<Url> {
    let host = url.host_str()?;
    let origin = match url.port() {
        Some(port) => format!("{}://{}:{}", url.scheme(), host, port),
        None => format!("{}://{}", url.scheme(), host),
    };
    Url::parse(&origin).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_adds_https() {
        assert_eq!(
            normalize_target_url("example.com").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_normalize_preserves_explicit_scheme() {
        assert_eq!(
            normalize_target_url("http://example.com").unwrap(),
            "http://example.com"
        );
        assert_eq!(
            normalize_target_url("https://example.com/path?q=1").unwrap(),
            "https://example.com/path?q=1"
        );
    }

    #[test]
    fn test_normalize_rejects_garbage() {
        assert!(matches!(
            normalize_target_url("not a valid url!!!"),
            Err(FetchError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_origin_of_strips_path_and_query() {
        let url = Url::parse("https://example.com/some/page?q=1#frag").unwrap();
        assert_eq!(origin_of(&url).unwrap().as_str(), "https://example.com/");
    }

    #[test]
    fn test_origin_of_keeps_port() {
        let url = Url::parse("https://example.com:8443/page").unwrap();
        assert_eq!(
            origin_of(&url).unwrap().as_str(),
            "https://example.com:8443/"
        );
    }
}
