//! Rates sub-client — paced quote fetches.

use crate::client::GenelParaClient;
use crate::domain::rates::query::RateQuery;
use crate::domain::rates::wire::RatesEnvelope;
use crate::domain::rates::{RateRecord, RatesSnapshot};
use crate::error::SdkError;

pub struct Rates<'a> {
    pub(crate) client: &'a GenelParaClient,
}

impl<'a> Rates<'a> {
    /// One paced request. Issues exactly one network call; nothing is
    /// retried or cached. Callers decide whether to retry on failure.
    pub async fn fetch(&self, query: &RateQuery) -> Result<RatesSnapshot, SdkError> {
        query.validate()?;

        let url = format!(
            "{}?{}",
            self.client.http.base_url(),
            query.to_query_string()
        );
        let envelope: RatesEnvelope = self.client.http.get_json(&url).await?;
        let snapshot = RatesSnapshot::try_from(envelope)?;
        Ok(snapshot)
    }

    /// Single-symbol convenience. Returns `None` when the symbol is absent
    /// from the response or the fetch failed — no error escapes.
    pub async fn fetch_one(&self, category: &str, symbol: &str) -> Option<RateRecord> {
        match self.fetch(&RateQuery::new(category, symbol)).await {
            Ok(mut snapshot) => snapshot.records.remove(symbol),
            Err(err) => {
                tracing::debug!("fetch_one({}, {}) failed: {}", category, symbol, err);
                None
            }
        }
    }

    /// Every symbol in one category.
    pub async fn fetch_all(&self, category: &str) -> Result<RatesSnapshot, SdkError> {
        self.fetch(&RateQuery::all(category)).await
    }
}
