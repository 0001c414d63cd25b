use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use stock_services::app;
use stock_services::external::alphavantage::AlphaVantageClient;
use stock_services::logging::{self, LoggingConfig};
use stock_services::state::QuoteState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    logging::init_logging(&LoggingConfig::from_env("quote-gateway"));

    let provider = AlphaVantageClient::from_env()?;

    let state = QuoteState {
        quote_provider: Arc::new(provider),
    };
    let app = app::quote_app(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(5001);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Quote gateway running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
