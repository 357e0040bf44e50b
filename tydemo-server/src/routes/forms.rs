//! Contact form validation endpoint

use axum::{
    Form, Router,
    extract::rejection::FormRejection,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::post,
};
use tracing::debug;

use tydemo_core::form::ContactForm;

use crate::render;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/form/validate", post(validate))
}

/// POST /api/form/validate
///
/// Validation errors are 200 for HTMX requests, so HTMX swaps the error list
/// in, and 400 for plain form posts.
async fn validate(headers: HeaderMap, form: Result<Form<ContactForm>, FormRejection>) -> Response {
    let form = form.map(|Form(f)| f).unwrap_or_default();
    let errors = form.validate();

    if errors.is_empty() {
        debug!(name = %form.name.trim(), "contact form accepted");
        return Html(render::form_success(&form.name)).into_response();
    }

    debug!(?errors, "contact form rejected");
    let status = if headers.contains_key("hx-request") {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };
    (status, Html(render::form_errors(&errors))).into_response()
}
