use crate::external::quote_provider::{GlobalQuote, QuoteProvider, QuoteProviderError};
use async_trait::async_trait;
use serde::Deserialize;

pub struct AlphaVantageClient {
    client: reqwest::Client,
    api_key: String,
}

impl AlphaVantageClient {
    /// Reads the API key at construction so a misconfigured service fails
    /// at startup instead of on the first request.
    pub fn from_env() -> Result<Self, QuoteProviderError> {
        let api_key = std::env::var("ALPHA_VANTAGE_API_KEY")
            .or_else(|_| std::env::var("API_KEY"))
            .map_err(|_| {
                QuoteProviderError::BadResponse("ALPHA_VANTAGE_API_KEY not set".into())
            })?;

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
        })
    }
}

#[derive(Debug, Deserialize)]
struct AvQuoteResponse {
    // For unknown symbols Alpha Vantage returns an empty object here
    // rather than omitting the key entirely; both cases mean "not found".
    #[serde(rename = "Global Quote")]
    global_quote: Option<AvQuoteBlock>,

    // When rate-limited Alpha Vantage returns:
    // { "Note": "Thank you for using Alpha Vantage! ... 5 calls per minute ..." }
    #[serde(rename = "Note")]
    note: Option<String>,

    // When invalid:
    // { "Error Message": "Invalid API call. ..." }
    #[serde(rename = "Error Message")]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AvQuoteBlock {
    #[serde(rename = "01. symbol")]
    symbol: Option<String>,

    #[serde(rename = "05. price")]
    price: Option<String>,
}

fn quote_from_response(body: AvQuoteResponse) -> Result<GlobalQuote, QuoteProviderError> {
    if body.note.is_some() {
        // This is the throttle response
        return Err(QuoteProviderError::RateLimited);
    }

    if let Some(msg) = body.error_message {
        return Err(QuoteProviderError::BadResponse(msg));
    }

    let block = body.global_quote.ok_or(QuoteProviderError::NotFound)?;

    match (block.symbol, block.price) {
        (Some(symbol), Some(price)) => Ok(GlobalQuote { symbol, price }),
        _ => Err(QuoteProviderError::NotFound),
    }
}

#[async_trait]
impl QuoteProvider for AlphaVantageClient {
    async fn fetch_global_quote(
        &self,
        symbol: &str,
    ) -> Result<GlobalQuote, QuoteProviderError> {
        let url = "https://www.alphavantage.co/query";

        let resp = self
            .client
            .get(url)
            .query(&[
                ("function", "GLOBAL_QUOTE"),
                ("symbol", symbol),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| QuoteProviderError::Network(e.to_string()))?;

        let body = resp
            .json::<AvQuoteResponse>()
            .await
            .map_err(|e| QuoteProviderError::Parse(e.to_string()))?;

        quote_from_response(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<GlobalQuote, QuoteProviderError> {
        let body: AvQuoteResponse = serde_json::from_str(raw).unwrap();
        quote_from_response(body)
    }

    #[test]
    fn extracts_symbol_and_price_from_quote_block() {
        let quote = parse(
            r#"{
                "Global Quote": {
                    "01. symbol": "AAPL",
                    "02. open": "149.0000",
                    "05. price": "150.2500",
                    "07. latest trading day": "2025-03-14"
                }
            }"#,
        )
        .unwrap();

        assert_eq!(quote.symbol, "AAPL");
        assert_eq!(quote.price, "150.2500");
    }

    #[test]
    fn empty_quote_block_is_not_found() {
        let err = parse(r#"{"Global Quote": {}}"#).unwrap_err();
        assert!(matches!(err, QuoteProviderError::NotFound));
    }

    #[test]
    fn missing_quote_block_is_not_found() {
        let err = parse(r#"{}"#).unwrap_err();
        assert!(matches!(err, QuoteProviderError::NotFound));
    }

    #[test]
    fn throttle_note_is_rate_limited() {
        let err = parse(
            r#"{"Note": "Thank you for using Alpha Vantage! Our standard API call frequency is 5 calls per minute."}"#,
        )
        .unwrap_err();
        assert!(matches!(err, QuoteProviderError::RateLimited));
    }

    #[test]
    fn provider_error_message_is_bad_response() {
        let err = parse(r#"{"Error Message": "Invalid API call."}"#).unwrap_err();
        assert!(matches!(err, QuoteProviderError::BadResponse(msg) if msg == "Invalid API call."));
    }
}
