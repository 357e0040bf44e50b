//! Health check, modal content and notification endpoints

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, Method},
    response::Html,
    routing::get,
};
use chrono::Local;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use tydemo_core::DemoError;
use tydemo_core::sample::{find_user, notifications};

use crate::render;
use crate::routes::FragmentError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/modal/content/{kind}", get(modal_content))
        .route("/api/notifications/demo", get(demo_notification))
        .route("/api/test-debug", get(debug_check))
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Deserialize)]
pub struct ModalQuery {
    pub user_id: Option<String>,
    pub task_id: Option<String>,
}

/// GET /api/modal/content/:kind - `user-profile` or `task-details`
async fn modal_content(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(query): Query<ModalQuery>,
) -> Result<Html<String>, FragmentError> {
    match kind.as_str() {
        "user-profile" => {
            let raw = query.user_id.unwrap_or_default();
            let user = raw
                .parse::<u32>()
                .ok()
                .and_then(find_user)
                .ok_or_else(|| DemoError::NotFound(format!("User {raw}")))?;
            Ok(Html(render::user_profile_modal(&user)))
        }
        "task-details" => {
            let raw = query.task_id.unwrap_or_default();
            let tasks = state.tasks.lock().await;
            let task = raw
                .parse::<u32>()
                .ok()
                .and_then(|id| tasks.iter().find(|t| t.id == id))
                .ok_or_else(|| DemoError::NotFound(format!("Task {raw}")))?;
            Ok(Html(render::task_details_modal(task)))
        }
        other => Err(DemoError::NotFound(format!("Modal content '{other}'")).into()),
    }
}

/// GET /api/notifications/demo - A random sample notification
async fn demo_notification() -> Html<String> {
    let all = notifications();
    let html = all
        .choose(&mut rand::thread_rng())
        .map(render::notification)
        .unwrap_or_default();
    Html(html)
}

/// GET /api/test-debug - Logs the request and confirms the HTMX round trip
async fn debug_check(method: Method, headers: HeaderMap) -> Html<String> {
    debug!(%method, ?headers, "htmx debug check");
    Html(render::debug_check(&Local::now().format("%H:%M:%S").to_string()))
}
