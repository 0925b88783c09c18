//! High-level client — `GenelParaClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and accessor methods.

use crate::domain::rates::client::Rates;
use crate::error::SdkError;
use crate::http::GenelParaHttp;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::rates::client::Rates as RatesClient;

/// The primary entry point for the GenelPara SDK.
///
/// Provides nested sub-client accessors: `client.rates()`.
///
/// The pacing clock lives inside the client, guarded by an async mutex, so
/// one instance may be shared across tasks — concurrent callers queue on
/// the pacing gate rather than being rejected.
pub struct GenelParaClient {
    pub(crate) http: GenelParaHttp,
}

impl GenelParaClient {
    pub fn builder() -> GenelParaClientBuilder {
        GenelParaClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn rates(&self) -> Rates<'_> {
        Rates { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct GenelParaClientBuilder {
    base_url: String,
    timeout: Duration,
    min_request_interval: Duration,
}

impl Default for GenelParaClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(10),
            min_request_interval: Duration::from_secs(1),
        }
    }
}

impl GenelParaClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Transport timeout for each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Minimum gap enforced between consecutive requests.
    pub fn min_request_interval(mut self, interval: Duration) -> Self {
        self.min_request_interval = interval;
        self
    }

    pub fn build(self) -> Result<GenelParaClient, SdkError> {
        Ok(GenelParaClient {
            http: GenelParaHttp::new(&self.base_url, self.timeout, self.min_request_interval),
        })
    }
}
