use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Stock symbol is required")]
    MissingSymbol,
    #[error("user_id, symbol, and shares are required")]
    MissingFields,
    #[error("Stock not found")]
    StockNotFound,
    #[error("Failed to fetch stock price")]
    PriceFetchFailed,
    #[error("Database error: {0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::MissingSymbol | AppError::MissingFields => StatusCode::BAD_REQUEST,
            AppError::StockNotFound => StatusCode::NOT_FOUND,
            AppError::PriceFetchFailed | AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn client_message(&self) -> String {
        match self {
            // Never leak database details to the client
            AppError::Db(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = Json(serde_json::json!({ "error": self.client_message() }));
        (self.status(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_contract() {
        assert_eq!(AppError::MissingSymbol.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::MissingFields.status(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::StockNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::PriceFetchFailed.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Db(sqlx::Error::PoolClosed).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn db_errors_are_not_leaked() {
        let err = AppError::Db(sqlx::Error::PoolClosed);
        assert_eq!(err.client_message(), "Internal server error");
    }

    #[test]
    fn messages_match_contract() {
        assert_eq!(
            AppError::MissingSymbol.client_message(),
            "Stock symbol is required"
        );
        assert_eq!(
            AppError::MissingFields.client_message(),
            "user_id, symbol, and shares are required"
        );
        assert_eq!(AppError::StockNotFound.client_message(), "Stock not found");
        assert_eq!(
            AppError::PriceFetchFailed.client_message(),
            "Failed to fetch stock price"
        );
    }
}
