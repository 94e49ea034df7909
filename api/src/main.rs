mod auth;
mod config;
mod error_response;
mod query_payload;
mod routes;

use auth::TokenVerifier;
use config::Config;
use grounded_search::{EnvSecretProvider, GeminiService, QueryHandler};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;
    log::info!(
        "Using model {} at {}",
        config.gemini.model,
        config.gemini.endpoint
    );

    let gemini_service = GeminiService::new(config.gemini.clone(), Arc::new(EnvSecretProvider));
    let handler = Arc::new(QueryHandler::new(gemini_service));
    let verifier = Arc::new(TokenVerifier::new(config.api_tokens.clone()));

    let app = routes::router(handler, verifier);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    log::info!("Listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
