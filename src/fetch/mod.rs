//! Content fetcher - one bounded GET per call against the content API

use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;

use crate::error::FetchError;

/// Timeout covering connect, request and body read
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the content API
#[derive(Debug, Clone)]
pub struct ContentFetcher {
    client: Client,
    timeout: Duration,
}

impl ContentFetcher {
    /// Create a fetcher with the default 10 second timeout
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a fetcher with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self { client, timeout })
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET `url` and read the whole body into memory.
    ///
    /// The status code is not inspected: a non-2xx response is returned like
    /// any other and left for the decoder to accept or reject.
    pub async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        tracing::debug!(url, "fetching upstream content");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::Connection {
                    url: url.to_string(),
                    source: e,
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, %status, "upstream returned non-success status");
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: url.to_string(),
                }
            } else {
                FetchError::BodyRead {
                    url: url.to_string(),
                    source: e,
                }
            }
        })?;

        tracing::debug!(url, %status, bytes = body.len(), "fetched upstream content");
        Ok(body)
    }
}
