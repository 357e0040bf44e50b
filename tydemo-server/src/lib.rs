//! HTTP server for the Ty + HTMX demo.
//!
//! Routes answer with HTML fragments for HTMX swap targets or with JSON,
//! over the in-memory state in [`state::AppState`].

pub mod config;
pub mod render;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::calendar::router())
        .merge(routes::users::router())
        .merge(routes::tasks::router())
        .merge(routes::forms::router())
        .merge(routes::widgets::router())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
