//! # GenelPara SDK
//!
//! A Rust client for the GenelPara rates API: currency, crypto and gold
//! quotes behind one paced JSON endpoint.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Domain types, wire types, conversions, error taxonomy
//! 2. **HTTP** — `GenelParaHttp`: one paced, timeout-bounded GET per call
//! 3. **High-Level Client** — `GenelParaClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use genelpara::prelude::*;
//!
//! let client = GenelParaClient::builder().build()?;
//!
//! let snapshot = client.rates().fetch_all(CATEGORY_CURRENCY).await?;
//! let usd = client.rates().fetch_one(CATEGORY_CURRENCY, "USD").await;
//! ```
//!
//! Every call issues exactly one network request — nothing is retried,
//! nothing is cached. Consecutive calls on one client are spaced at least
//! the configured minimum interval apart, even when a call fails.

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Domain modules (vertical slices): types, wire types, conversions.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP client with request pacing.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `GenelParaClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Domain types — rates
    pub use crate::domain::rates::query::{
        ListParam, RateQuery, ALL_SYMBOLS, CATEGORY_CRYPTO, CATEGORY_CURRENCY, CATEGORY_GOLD,
    };
    pub use crate::domain::rates::{Direction, RateLimitStatus, RateRecord, RatesSnapshot};

    // Errors
    pub use crate::error::{FetchError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    pub use crate::client::{GenelParaClient, GenelParaClientBuilder, RatesClient};
}
