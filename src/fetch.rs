//! Blocking-style HTTP GETs with a per-request timeout.
//!
//! [`Fetcher`] owns one `reqwest::Client` for the whole run. Each call
//! either yields the raw response bytes or a [`FetchError`]; there are no
//! retries. Callers decide what a failure means for them, and decode the
//! body themselves since feeds often declare their charset only inside
//! the document.

use crate::error::FetchError;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};

/// Shared HTTP client for feed and article fetches.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build a fetcher that identifies itself with `user_agent`.
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// GET `url` and return the undecoded body.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Request`] on connection failure or timeout
    /// - [`FetchError::Status`] when the status is outside 200-299
    #[instrument(level = "debug", skip(self))]
    pub async fn fetch(&self, url: &str, timeout: Duration) -> Result<Vec<u8>, FetchError> {
        let t0 = Instant::now();
        let request_error = |source| FetchError::Request {
            url: url.to_string(),
            source,
        };

        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await.map_err(request_error)?;
        debug!(
            bytes = body.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched"
        );
        Ok(body.to_vec())
    }
}
