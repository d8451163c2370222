use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::{info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::error::RelayError;
use crate::handlers::handle_translate;
use crate::state::AppState;
use crate::translate::interface::TranslateResponse;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/api/health", get(health_check))

        .route("/translate", post(translate))
        // Size is the host's concern; oversized bodies must not become a plain-text 413.
        .layer(DefaultBodyLimit::disable())
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

// Takes raw bytes so bad JSON gets our error body instead of axum's rejection.
async fn translate(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<TranslateResponse>, RelayError> {
    let span = info_span!("translate", request_id = %Uuid::new_v4());
    async move {
        let body = body.map_err(|e| {
            warn!("Could not read request body: {}", e);
            RelayError::InvalidBody
        })?;
        info!("Translation request received ({} bytes)", body.len());
        handle_translate(&state, &body).await.map(Json)
    }
    .instrument(span)
    .await
}
