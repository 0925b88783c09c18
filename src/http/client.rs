//! Low-level HTTP client — `GenelParaHttp`.
//!
//! One paced GET per call, returning wire types (conversion to domain types
//! happens at the sub-client boundary). Internal to the SDK — the high-level
//! client wraps this.

use crate::error::FetchError;
use crate::http::pacing::Pacer;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the GenelPara rates endpoint.
pub struct GenelParaHttp {
    base_url: String,
    client: Client,
    pacer: Pacer,
}

impl GenelParaHttp {
    pub fn new(base_url: &str, timeout: Duration, min_request_interval: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            pacer: Pacer::new(min_request_interval),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One paced GET. Waits out the pacing interval, stamps the pacing
    /// clock, then issues exactly one request — the stamp stands even when
    /// the request fails.
    ///
    /// Transport failures (connection, timeout, non-2xx status) map to
    /// [`FetchError::Transport`]; a body that is not valid JSON maps to
    /// [`FetchError::Parse`].
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        self.pacer.acquire().await;

        tracing::debug!("GET {}", url);
        let resp = self.client.get(url).send().await?.error_for_status()?;

        let body = resp.text().await?;
        let parsed = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}
