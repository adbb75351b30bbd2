use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Render an Askama template into an HTML response, falling back to a bare
/// 500 when rendering itself fails.
pub fn render<T: askama::Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!("Failed to render template: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(include_str!("../templates/500.html")),
            )
                .into_response()
        }
    }
}

/// Same as [`render`], with an explicit status code.
pub fn render_with_status<T: askama::Template>(status: StatusCode, template: T) -> Response {
    let mut response = render(template);
    if response.status() == StatusCode::OK {
        *response.status_mut() = status;
    }
    response
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate;
