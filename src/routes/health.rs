use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
/// Ready once a non-empty recipe catalog is loaded
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    if state.catalog.is_empty() {
        tracing::error!("Readiness check failed: recipe catalog is empty");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "reason": "catalog_empty"
            })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({"status": "ready", "recipeCount": state.catalog.len()})),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let response = health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
