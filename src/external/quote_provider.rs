use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single real-time quote as echoed by the provider. The price stays
/// textual here; callers that persist it parse it into a decimal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalQuote {
    pub symbol: String,
    pub price: String,
}

#[derive(Debug, Error)]
pub enum QuoteProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("symbol not found")]
    NotFound,

    #[error("rate limited")]
    RateLimited,
}

#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn fetch_global_quote(&self, symbol: &str)
        -> Result<GlobalQuote, QuoteProviderError>;
}
