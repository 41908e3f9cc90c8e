use serde::{Deserialize, Serialize};

/// One USD-BRL quote as received from upstream and stored in `exchange_rates`.
///
/// Prices stay as text so the upstream formatting survives storage untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct ExchangeRateRecord {
    #[serde(skip)]
    pub id: Option<i64>,
    pub code: String,
    pub codein: String,
    pub name: String,
    pub high: String,
    pub low: String,
    #[serde(rename = "varBid")]
    pub var_bid: String,
    #[serde(rename = "pctChange")]
    pub pct_change: String,
    pub bid: String,
    pub ask: String,
    pub timestamp: String,
    pub create_date: String,
}

impl ExchangeRateRecord {
    pub fn with_id(&self, id: i64) -> Self {
        Self {
            id: Some(id),
            ..self.clone()
        }
    }
}
