use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use saema_contact::{MailPayload, Mailer};
use serde_json::json;

use crate::routes::AppState;

/// POST /api/send-email - the mail-sending endpoint the contact form talks to.
///
/// Accepts the shaped payload as-is; any 2xx means the message went out, a
/// 5xx means it did not. The body carries nothing the client consumes beyond
/// that branch.
pub async fn action(
    State(app): State<AppState>,
    Json(payload): Json<MailPayload>,
) -> impl IntoResponse {
    match app.email.send(&payload).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({"message": "Email sent successfully"})),
        ),
        Err(err) => {
            tracing::error!("{err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "Failed to send email"})),
            )
        }
    }
}
