use std::sync::Arc;
use sqlx::PgPool;
use crate::external::quote_provider::QuoteProvider;

/// State for the quote gateway. It proxies the external provider and
/// persists nothing, so there is no pool here.
#[derive(Clone)]
pub struct QuoteState {
    pub quote_provider: Arc<dyn QuoteProvider>,
}

/// State for the transaction service.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub quote_provider: Arc<dyn QuoteProvider>,
}
