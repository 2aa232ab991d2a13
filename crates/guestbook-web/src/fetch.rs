//! Outbound content fetching.
//!
//! Submissions carry a URL rather than literal text; the stored greeting
//! content is the start of whatever that URL serves. The fetcher is a
//! trait so handlers can be exercised without network access.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use guestbook_state::MAX_CONTENT_CHARS;

/// Errors from outbound content fetches. Never retried.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    #[error("fetch of {url} returned status {status}")]
    Status { url: String, status: u16 },
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Fetches the body served at a submitted URL.
#[async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> FetchResult<Vec<u8>>;
}

/// reqwest-backed fetcher used in production.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the given per-request timeout.
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self { client }
    }
}

#[async_trait]
impl ContentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<Vec<u8>> {
        let response = self.client.get(url).send().await.map_err(|e| {
            FetchError::Request {
                url: url.to_string(),
                reason: e.to_string(),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Request {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(body.to_vec())
    }
}

/// First [`MAX_CONTENT_CHARS`] characters of a fetched payload, lossily
/// decoded as UTF-8.
pub fn truncate_content(payload: &[u8]) -> String {
    String::from_utf8_lossy(payload)
        .chars()
        .take(MAX_CONTENT_CHARS)
        .collect()
}
