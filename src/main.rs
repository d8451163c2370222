mod config;
mod error;
mod handlers;
mod routes;
mod state;
mod translate;

use anyhow::Result;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::RelayConfig;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("translator_relay=info,tower_http=debug")),
        )
        .init();

    let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "relay".to_string());
    let config = RelayConfig::load(&config_path)?;
    info!("Loaded configuration from: {}", config_path);

    // Credentials are checked per request, so a missing key only warns here.
    if crate::config::TranslatorCredentials::from_env().is_none() {
        tracing::warn!("TRANSLATOR_KEY or TRANSLATOR_ENDPOINT is not set; /translate will answer 500");
    }

    let app_state = AppState::from_config(&config)?;

    let app = Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let listener = config.bind().await?;
    info!("Starting server on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
