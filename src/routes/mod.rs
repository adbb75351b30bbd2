use axum::{response::IntoResponse, routing::get, routing::post, Router};

use crate::template::{self, NotFoundTemplate};

mod contact;
mod health;
mod index;
mod send_email;

use axum::http::StatusCode;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub email: crate::email::EmailService,
}

pub async fn fallback() -> impl IntoResponse {
    template::render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(index::page))
        .route("/contact", get(contact::page).post(contact::action))
        .route("/api/send-email", post(send_email::action))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
