//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the crawler, including:
//! - Building one HTTP client with browser-like headers and a bounded timeout
//! - GET requests to fetch result pages
//! - Error classification (blocked vs. any other transport failure)
//!
//! There are no retries; a failed page ends the crawl.

use crate::config::FetcherConfig;
use crate::{HarvestError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Single-page HTTP retriever
///
/// Holds one `reqwest::Client` configured from [`FetcherConfig`]; cloning the
/// fetcher shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Builds a fetcher from the request configuration
    ///
    /// # Example
    ///
    /// ```no_run
    /// use listing_harvest::config::FetcherConfig;
    /// use listing_harvest::crawler::Fetcher;
    ///
    /// let fetcher = Fetcher::new(&FetcherConfig::default()).unwrap();
    /// ```
    pub fn new(config: &FetcherConfig) -> Result<Self> {
        Ok(Self {
            client: build_http_client(config)?,
        })
    }

    /// Fetches the HTML body of `url`
    ///
    /// # Errors
    ///
    /// | Condition | Error |
    /// |-----------|-------|
    /// | HTTP 403 | `Blocked` |
    /// | Any other non-2xx status | `Transport` |
    /// | Timeout, DNS or connection failure | `Transport` |
    /// | Body could not be read | `Transport` |
    pub async fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(url, &e))?;

        let status = response.status();

        if status == StatusCode::FORBIDDEN {
            tracing::warn!("Request to {} was blocked (HTTP 403)", url);
            return Err(HarvestError::Blocked {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(HarvestError::Transport {
                url: url.to_string(),
                reason: format!("HTTP {}", status.as_u16()),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| transport_error(url, &e))?;

        tracing::debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

/// Builds an HTTP client with the configured User-Agent, extra headers and timeout
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(HarvestError)` - A configured header was invalid or the client failed to build
pub fn build_http_client(config: &FetcherConfig) -> Result<Client> {
    let mut headers = HeaderMap::new();
    for (name, value) in &config.headers {
        let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
            crate::ConfigError::Validation(format!("Invalid header name '{}': {}", name, e))
        })?;
        let value = HeaderValue::from_str(value).map_err(|e| {
            crate::ConfigError::Validation(format!("Invalid header value '{}': {}", value, e))
        })?;
        headers.insert(name, value);
    }

    let client = Client::builder()
        .user_agent(config.user_agent.as_str())
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()?;

    Ok(client)
}

/// Classifies a reqwest failure into a transport error
fn transport_error(url: &str, error: &reqwest::Error) -> HarvestError {
    let reason = if error.is_timeout() {
        "Request timeout".to_string()
    } else if error.is_connect() {
        "Connection refused".to_string()
    } else {
        error.to_string()
    };

    HarvestError::Transport {
        url: url.to_string(),
        reason,
    }
}
