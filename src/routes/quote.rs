use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::external::quote_provider::GlobalQuote;
use crate::state::QuoteState;

pub fn router() -> Router<QuoteState> {
    Router::new().route("/quote", get(get_quote))
}

#[derive(Debug, Deserialize)]
pub struct QuoteParams {
    symbol: Option<String>,
}

pub async fn get_quote(
    State(state): State<QuoteState>,
    Query(params): Query<QuoteParams>,
) -> Result<Json<GlobalQuote>, AppError> {
    let symbol = params
        .symbol
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(AppError::MissingSymbol)?;

    info!("GET /quote?symbol={} - Fetching quote", symbol);

    // Every provider failure collapses to 404 here; the gateway does not
    // distinguish a dead network from an unknown symbol.
    let quote = state
        .quote_provider
        .fetch_global_quote(symbol)
        .await
        .map_err(|e| {
            error!("Failed to fetch quote for {}: {}", symbol, e);
            AppError::StockNotFound
        })?;

    Ok(Json(quote))
}
