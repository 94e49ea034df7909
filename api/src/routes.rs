use crate::auth::{identity_middleware, TokenVerifier};
use crate::error_response::ApiError;
use crate::query_payload::QueryPayload;
use axum::{
    extract::{rejection::JsonRejection, State},
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use grounded_search::{CallerIdentity, QueryHandler, SearchSummary};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

pub fn router(handler: Arc<QueryHandler>, verifier: Arc<TokenVerifier>) -> Router {
    Router::new()
        .route("/query", post(handle_query))
        .route_layer(middleware::from_fn_with_state(verifier, identity_middleware))
        .with_state(handler)
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn handle_query(
    State(handler): State<Arc<QueryHandler>>,
    identity: Option<Extension<CallerIdentity>>,
    payload: Result<Json<QueryPayload>, JsonRejection>,
) -> Result<Json<SearchSummary>, ApiError> {
    let request_id = Uuid::new_v4();
    log::info!("Processing query [{}]", request_id);

    // An unreadable body is treated as a missing query.
    let query = match payload {
        Ok(Json(payload)) => payload.query,
        Err(rejection) => {
            log::debug!("[{}] Unreadable query payload: {}", request_id, rejection);
            None
        }
    };
    let identity = identity.map(|Extension(identity)| identity);

    match handler.handle(identity.as_ref(), query.as_deref()).await {
        Ok(summary) => Ok(Json(summary)),
        Err(err) => {
            log::warn!("[{}] Query failed: {}", request_id, err.code());
            Err(err.into())
        }
    }
}
