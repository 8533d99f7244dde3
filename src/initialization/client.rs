//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used to fetch the target page.
///
/// The client follows redirects (reqwest's default, up to 10 hops) so the
/// base URL handed to extraction reflects the final destination, applies the
/// configured timeout, and sends a browser-like User-Agent.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_defaults() {
        let config = Config::default();
        assert!(init_client(&config).is_ok());
    }

    #[test]
    fn test_init_client_with_custom_timeout() {
        let config = Config {
            timeout_seconds: 1,
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }
}
