//! Wire types for the rates endpoint.
//!
//! Field names mirror the backend exactly (`alis`/`satis` are buy/sell,
//! `yon` is the movement sentinel). Optional backend fields default
//! independently so a sparse or failing envelope still deserializes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RatesEnvelope {
    /// Absent counts as failure.
    #[serde(default)]
    pub success: bool,
    /// Server error text; present when `success` is false.
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub data: BTreeMap<String, RateEntry>,
    #[serde(default)]
    pub rate_limit: Option<RateLimitInfo>,
}

/// One quoted instrument as the backend sends it. Prices arrive as decimal
/// strings; movement as the `moneyUp`/`moneyDown` sentinels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateEntry {
    pub alis: String,
    pub satis: String,
    #[serde(default)]
    pub degisim: String,
    #[serde(default)]
    pub oran: String,
    #[serde(default)]
    pub yon: Option<String>,
    /// Display unit, e.g. `"₺"` — not the symbol name (that is the map key).
    #[serde(default)]
    pub sembol: String,
    /// Source category tag added on multi-category queries.
    #[serde(rename = "_source", default)]
    pub source: Option<String>,
}

/// Rate-limit sub-object. Every field is optional on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimitInfo {
    #[serde(default)]
    pub remaining: Option<u64>,
    #[serde(default)]
    pub limit: Option<u64>,
    #[serde(default)]
    pub reset_at: Option<String>,
}
