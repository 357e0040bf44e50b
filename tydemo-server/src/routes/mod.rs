pub mod calendar;
pub mod forms;
pub mod tasks;
pub mod users;
pub mod widgets;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tydemo_core::DemoError;

use crate::render;

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Convert anyhow errors to JSON responses
///
/// Domain errors keep their meaning: validation and parse failures are 400,
/// unknown entities 404. Anything else is 500.
pub struct AppError(anyhow::Error);

impl AppError {
    fn status(&self) -> StatusCode {
        match self.0.downcast_ref::<DemoError>() {
            Some(DemoError::Validation(_) | DemoError::Parse(_)) => StatusCode::BAD_REQUEST,
            Some(DemoError::NotFound(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn log(&self, status: StatusCode) {
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self.0, "request rejected");
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        self.log(status);
        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Same status mapping as `AppError`, rendered as an HTML fragment for HTMX targets
pub struct FragmentError(AppError);

impl IntoResponse for FragmentError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        self.0.log(status);
        let body = Html(render::error_fragment(&self.0.0.to_string()));
        (status, body).into_response()
    }
}

impl<E> From<E> for FragmentError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(AppError(err.into()))
    }
}
