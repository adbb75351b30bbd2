use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::routes::AppState;

/// GET /health - Liveness probe
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

/// GET /ready - Readiness probe
///
/// Checks that the SMTP transport accepts connections; the site has no other
/// external collaborator.
pub async fn ready(State(app): State<AppState>) -> impl IntoResponse {
    if app.email.is_ready() {
        (StatusCode::OK, Json(json!({"status": "ready"})))
    } else {
        tracing::error!("Readiness check failed: SMTP transport unavailable");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "status": "not_ready",
                "reason": "smtp_unavailable"
            })),
        )
    }
}
