use axum::Router;

use crate::routes::{quote, transactions};
use crate::state::{AppState, QuoteState};

pub fn quote_app(state: QuoteState) -> Router {
    quote::router().with_state(state)
}

pub fn transaction_app(state: AppState) -> Router {
    transactions::router().with_state(state)
}
