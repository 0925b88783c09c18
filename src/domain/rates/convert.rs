//! Conversions from wire envelopes to domain rate types.

use super::wire::{RateEntry, RateLimitInfo, RatesEnvelope};
use super::{Direction, RateLimitStatus, RateRecord, RatesSnapshot};
use crate::error::FetchError;
use rust_decimal::Decimal;
use std::str::FromStr;

impl Direction {
    pub(crate) fn from_wire(yon: Option<&str>) -> Self {
        match yon {
            Some("moneyUp") => Direction::Up,
            Some("moneyDown") => Direction::Down,
            _ => Direction::Flat,
        }
    }
}

impl RateRecord {
    /// The map key carries the symbol name; the entry's `sembol` field is
    /// the display unit.
    pub(crate) fn from_wire(symbol: &str, entry: RateEntry) -> Self {
        Self {
            symbol: symbol.to_string(),
            buy: Decimal::from_str(&entry.alis).unwrap_or_default(),
            sell: Decimal::from_str(&entry.satis).unwrap_or_default(),
            change: entry.degisim,
            change_percent: entry.oran,
            direction: Direction::from_wire(entry.yon.as_deref()),
            unit: entry.sembol,
            source_category: entry.source,
        }
    }
}

impl From<RateLimitInfo> for RateLimitStatus {
    fn from(info: RateLimitInfo) -> Self {
        Self {
            remaining: info.remaining,
            limit: info.limit,
            reset_at: info.reset_at,
        }
    }
}

impl TryFrom<RatesEnvelope> for RatesSnapshot {
    type Error = FetchError;

    /// Fails only on an envelope that reports application-level failure.
    /// Whatever symbols the server returned pass through unfiltered.
    fn try_from(envelope: RatesEnvelope) -> Result<Self, FetchError> {
        if !envelope.success {
            let message = envelope.error.unwrap_or_else(|| "unknown".to_string());
            return Err(FetchError::Api(message));
        }

        let records = envelope
            .data
            .into_iter()
            .map(|(symbol, entry)| {
                let record = RateRecord::from_wire(&symbol, entry);
                (symbol, record)
            })
            .collect();

        let rate_limit = envelope
            .rate_limit
            .map(RateLimitStatus::from)
            .unwrap_or_default();

        Ok(Self {
            records,
            rate_limit,
        })
    }
}
