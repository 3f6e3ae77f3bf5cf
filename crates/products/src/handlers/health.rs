//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/readyz` - Readiness probe (the product store answers)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness probe.
///
/// Returns 200 when the store can be reached, 503 otherwise. A collection
/// that does not exist yet still counts as ready: it is created on demand.
#[axum::debug_handler]
pub async fn readyz(State(state): State<AppState>) -> Response {
    match state.products.ready().await {
        Ok(collection_exists) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "ready": true,
                "collection_exists": collection_exists,
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "ready": false,
                    "error": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}
