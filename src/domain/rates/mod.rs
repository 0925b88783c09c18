//! Rates domain — normalized buy/sell quotes for currencies, crypto and gold.

pub mod client;
mod convert;
pub mod query;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Movement of a quote relative to the previous close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Flat,
}

/// A normalized quote for one instrument.
///
/// Constructed fresh per response; immutable; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RateRecord {
    /// Symbol name, e.g. `"USD"` or `"BTC"`. The key of the response map.
    pub symbol: String,
    /// Buy price.
    pub buy: Decimal,
    /// Sell price.
    pub sell: Decimal,
    /// Absolute change as the server formatted it (may include a sign).
    pub change: String,
    /// Percent change as the server formatted it.
    pub change_percent: String,
    pub direction: Direction,
    /// Display unit the quote is denominated in, e.g. `"₺"`.
    pub unit: String,
    /// Category the backend tagged this record with on multi-category
    /// queries; absent on single-category responses.
    pub source_category: Option<String>,
}

/// Rate-limit accounting reported alongside a successful response.
///
/// Fields the backend omits stay `None` rather than failing the call;
/// `Display` renders them as `"unknown"`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RateLimitStatus {
    pub remaining: Option<u64>,
    pub limit: Option<u64>,
    pub reset_at: Option<String>,
}

impl fmt::Display for RateLimitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn field<T: fmt::Display>(v: &Option<T>) -> String {
            v.as_ref()
                .map(|x| x.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        }
        write!(
            f,
            "{}/{} remaining, resets at {}",
            field(&self.remaining),
            field(&self.limit),
            field(&self.reset_at)
        )
    }
}

/// A successful fetch: normalized records keyed by symbol, plus the
/// server's rate-limit accounting.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RatesSnapshot {
    pub records: BTreeMap<String, RateRecord>,
    pub rate_limit: RateLimitStatus,
}

impl RatesSnapshot {
    pub fn get(&self, symbol: &str) -> Option<&RateRecord> {
        self.records.get(symbol)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Group records by the category the backend tagged them with.
    ///
    /// Useful for multi-category queries; records without a tag group
    /// under `"unknown"`.
    pub fn by_category(&self) -> BTreeMap<&str, Vec<&RateRecord>> {
        let mut groups: BTreeMap<&str, Vec<&RateRecord>> = BTreeMap::new();
        for record in self.records.values() {
            let category = record.source_category.as_deref().unwrap_or("unknown");
            groups.entry(category).or_default().push(record);
        }
        groups
    }
}
