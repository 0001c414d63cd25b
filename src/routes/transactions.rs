use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::db;
use crate::errors::AppError;
use crate::models::{NewTransaction, TradeSide};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/buy", post(buy_stock))
        .route("/sell", post(sell_stock))
}

async fn home() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Transaction Service is running!" }))
}

#[derive(Debug, Deserialize)]
pub struct TradeRequest {
    #[serde(default)]
    user_id: Option<i32>,
    #[serde(default)]
    symbol: Option<String>,
    #[serde(default)]
    shares: Option<i32>,
}

struct ValidTrade {
    user_id: i32,
    symbol: String,
    shares: i32,
}

impl TradeRequest {
    // All three fields must be present and non-empty/non-zero before any
    // business logic runs.
    fn validate(self) -> Result<ValidTrade, AppError> {
        let user_id = self.user_id.filter(|id| *id != 0);
        let symbol = self.symbol.filter(|s| !s.is_empty());
        let shares = self.shares.filter(|n| *n != 0);

        match (user_id, symbol, shares) {
            (Some(user_id), Some(symbol), Some(shares)) => Ok(ValidTrade {
                user_id,
                symbol,
                shares,
            }),
            _ => Err(AppError::MissingFields),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TradeResponse {
    message: String,
    transaction_id: i32,
}

#[axum::debug_handler]
pub async fn buy_stock(
    State(state): State<AppState>,
    Json(req): Json<TradeRequest>,
) -> Result<(StatusCode, Json<TradeResponse>), AppError> {
    info!("POST /buy - Recording stock purchase");
    execute_trade(state, req, TradeSide::Buy).await
}

pub async fn sell_stock(
    State(state): State<AppState>,
    Json(req): Json<TradeRequest>,
) -> Result<(StatusCode, Json<TradeResponse>), AppError> {
    info!("POST /sell - Recording stock sale");
    execute_trade(state, req, TradeSide::Sell).await
}

// Shared by both endpoints; only the recorded side differs. The price is
// fetched before anything touches the database, so a failed lookup
// persists nothing.
async fn execute_trade(
    state: AppState,
    req: TradeRequest,
    side: TradeSide,
) -> Result<(StatusCode, Json<TradeResponse>), AppError> {
    let trade = req.validate()?;

    let quote = state
        .quote_provider
        .fetch_global_quote(&trade.symbol)
        .await
        .map_err(|e| {
            error!("Failed to fetch price for {}: {}", trade.symbol, e);
            AppError::PriceFetchFailed
        })?;

    let price: BigDecimal = quote.price.parse().map_err(|e| {
        error!("Provider returned unparseable price {:?}: {}", quote.price, e);
        AppError::PriceFetchFailed
    })?;

    let tx = NewTransaction::new(trade.user_id, &trade.symbol, trade.shares, price, side);

    let transaction_id = db::transaction_queries::insert(&state.pool, &tx)
        .await
        .map_err(|e| {
            error!("Failed to insert {} transaction: {}", side.as_str(), e);
            AppError::Db(e)
        })?;

    info!(
        "Recorded {} of {} x {} for user {} (transaction {})",
        side.as_str(),
        tx.shares,
        tx.stock_symbol,
        tx.user_id,
        transaction_id
    );

    Ok((
        StatusCode::CREATED,
        Json(TradeResponse {
            message: side.success_message().to_string(),
            transaction_id,
        }),
    ))
}
