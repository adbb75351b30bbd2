use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use saema_contact::{ContactSubmission, Submitter};
use validator::Validate;

use crate::routes::AppState;
use crate::template;

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub current_path: &'static str,
    pub form: ContactSubmission,
    pub status: Option<String>,
}

impl ContactTemplate {
    fn empty() -> Self {
        Self {
            current_path: "/contact",
            form: ContactSubmission::default(),
            status: None,
        }
    }
}

pub async fn page() -> impl IntoResponse {
    template::render(ContactTemplate::empty())
}

/// POST /contact - no-JS fallback for the contact form.
///
/// Runs the same submit contract as the fetch-based client: on success the
/// page comes back with the confirmation status and a cleared form, on any
/// failure the entered values are retained next to the failure status.
pub async fn action(
    State(app): State<AppState>,
    Form(input): Form<ContactSubmission>,
) -> impl IntoResponse {
    if let Err(err) = input.validate() {
        tracing::debug!("contact form validation failed: {err}");
        return template::render(ContactTemplate {
            form: input,
            status: Some("Please fill in your name and a message.".to_owned()),
            ..ContactTemplate::empty()
        });
    }

    let mut submitter = Submitter::new(input);
    submitter.submit(&app.email).await;

    let status = submitter.status().map(str::to_owned);
    template::render(ContactTemplate {
        form: submitter.into_form(),
        status,
        ..ContactTemplate::empty()
    })
}
