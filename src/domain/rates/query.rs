//! Query parameters for the rates endpoint.

use crate::error::SdkError;

/// Well-known category names accepted by the `list` parameter.
pub const CATEGORY_CURRENCY: &str = "doviz";
pub const CATEGORY_CRYPTO: &str = "kripto";
pub const CATEGORY_GOLD: &str = "altin";

/// Sentinel `sembol` value meaning "every symbol in the requested
/// categories".
pub const ALL_SYMBOLS: &str = "all";

/// A query parameter given either as a single value or as an ordered list,
/// normalized to one comma-separated string at the wire boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListParam {
    Scalar(String),
    Collection(Vec<String>),
}

impl ListParam {
    /// Wire form of the parameter.
    ///
    /// Collections are deduplicated keeping the first occurrence,
    /// percent-encoded per element and joined with commas — order is
    /// preserved, never re-sorted. Scalars pass through verbatim.
    pub fn to_query_value(&self) -> String {
        match self {
            ListParam::Scalar(value) => value.clone(),
            ListParam::Collection(values) => {
                let mut seen: Vec<&str> = Vec::with_capacity(values.len());
                for value in values {
                    if !seen.contains(&value.as_str()) {
                        seen.push(value);
                    }
                }
                seen.iter()
                    .map(|v| urlencoding::encode(v).into_owned())
                    .collect::<Vec<_>>()
                    .join(",")
            }
        }
    }

    fn is_blank(&self) -> bool {
        match self {
            ListParam::Scalar(value) => value.is_empty(),
            ListParam::Collection(values) => values.iter().all(|v| v.is_empty()),
        }
    }
}

impl From<&str> for ListParam {
    fn from(value: &str) -> Self {
        ListParam::Scalar(value.to_string())
    }
}

impl From<String> for ListParam {
    fn from(value: String) -> Self {
        ListParam::Scalar(value)
    }
}

impl From<Vec<String>> for ListParam {
    fn from(values: Vec<String>) -> Self {
        ListParam::Collection(values)
    }
}

impl From<Vec<&str>> for ListParam {
    fn from(values: Vec<&str>) -> Self {
        ListParam::Collection(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ListParam {
    fn from(values: [&str; N]) -> Self {
        ListParam::Collection(values.iter().map(|v| v.to_string()).collect())
    }
}

/// Parameters for one rates request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateQuery {
    pub categories: ListParam,
    pub symbols: ListParam,
}

impl RateQuery {
    pub fn new(categories: impl Into<ListParam>, symbols: impl Into<ListParam>) -> Self {
        Self {
            categories: categories.into(),
            symbols: symbols.into(),
        }
    }

    /// Every symbol in one category.
    pub fn all(category: impl Into<ListParam>) -> Self {
        Self::new(category, ALL_SYMBOLS)
    }

    /// Categories must be non-empty; checked before any network call.
    pub(crate) fn validate(&self) -> Result<(), SdkError> {
        if self.categories.is_blank() {
            return Err(SdkError::Validation(
                "query requires at least one category".to_string(),
            ));
        }
        Ok(())
    }

    /// The `list=..&sembol=..` query string.
    pub(crate) fn to_query_string(&self) -> String {
        format!(
            "list={}&sembol={}",
            self.categories.to_query_value(),
            self.symbols.to_query_value()
        )
    }
}
