use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    /// Lowercase form stored in the `type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "buy",
            TradeSide::Sell => "sell",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            TradeSide::Buy => "Stock purchase successful",
            TradeSide::Sell => "Stock sale successful",
        }
    }
}

// A buy or sell event at the price fetched when the request was handled.
// Rows are write-once: the id comes back from the insert and nothing
// updates or deletes them afterwards.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub user_id: i32,
    pub stock_symbol: String,
    pub shares: i32,
    pub price: BigDecimal,
    pub side: TradeSide,
}

impl NewTransaction {
    pub fn new(
        user_id: i32,
        symbol: &str,
        shares: i32,
        price: BigDecimal,
        side: TradeSide,
    ) -> Self {
        Self {
            user_id,
            stock_symbol: symbol.to_uppercase(),
            shares,
            price,
            side,
        }
    }
}
