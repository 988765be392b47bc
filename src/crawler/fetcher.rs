//! HTTP fetcher implementation
//!
//! This module handles the single GET request made per site:
//! - Building the HTTP client with a browser identity and a fixed timeout
//! - Inferring the scheme of raw input
//! - Classifying failures (timeout, transport error, non-success status)
//!
//! There are no retries. A failed fetch is final for that URL.

use crate::config::ScraperConfig;
use crate::url::normalize_url;
use crate::FetchError;
use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The scraper configuration (user agent and timeout)
///
/// # Example
///
/// ```no_run
/// use biz_scraper::config::ScraperConfig;
/// use biz_scraper::crawler::build_http_client;
///
/// let client = build_http_client(&ScraperConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &ScraperConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body
///
/// The raw URL is normalized first (`https://` is added when no scheme is
/// present). Redirects are followed by the client. Any status outside
/// 200-299 is a failure.
///
/// # Returns
///
/// * `Ok(String)` - The decoded response body
/// * `Err(FetchError)` - Timeout, transport error, non-success status, or unreadable body
pub async fn fetch_page(client: &Client, raw_url: &str) -> Result<String, FetchError> {
    let url = normalize_url(raw_url);

    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| classify_error(&url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url,
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| {
        if source.is_timeout() {
            FetchError::Timeout { url: url.clone() }
        } else {
            FetchError::Body {
                url: url.clone(),
                source,
            }
        }
    })
}

/// Maps a transport error to the matching fetch error
fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else {
        FetchError::Http {
            url: url.to_string(),
            source: error,
        }
    }
}
