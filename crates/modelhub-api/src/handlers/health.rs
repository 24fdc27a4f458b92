//! Health check handler.

use axum::Json;
use axum::extract::State;
use tracing::warn;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
///
/// Always answers 200; `store` reports whether the document store is
/// reachable. The first probe opens the store like any other request.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let reachable = match state.stores.acquire().await {
        Ok(store) => store.health_check().await.unwrap_or(false),
        Err(e) => {
            warn!(error = %e, "Document store unavailable");
            false
        }
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: if reachable { "connected" } else { "unavailable" }.to_string(),
    })
}
