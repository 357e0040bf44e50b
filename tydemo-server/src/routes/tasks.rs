//! Task filter and toggle endpoints

use axum::{
    Router,
    extract::{Path, Query, State},
    response::Html,
    routing::{get, post},
};
use serde::Deserialize;
use tracing::info;

use tydemo_core::DemoError;
use tydemo_core::sample::filter_tasks;

use crate::render;
use crate::routes::FragmentError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tasks/filter", get(filter))
        .route("/api/tasks/{id}/toggle", post(toggle))
}

#[derive(Deserialize)]
pub struct TaskFilter {
    pub status: Option<String>,
    pub priority: Option<String>,
}

/// GET /api/tasks/filter?status&priority
async fn filter(State(state): State<AppState>, Query(query): Query<TaskFilter>) -> Html<String> {
    let tasks = state.tasks.lock().await;
    let matching = filter_tasks(&tasks, query.status.as_deref(), query.priority.as_deref());
    Html(render::task_list(&matching))
}

/// POST /api/tasks/:id/toggle - Flip completion and return the updated row
async fn toggle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, FragmentError> {
    let mut tasks = state.tasks.lock().await;
    let task = match id.parse::<u32>() {
        Ok(n) => tasks.iter_mut().find(|t| t.id == n),
        Err(_) => None,
    }
    .ok_or_else(|| DemoError::NotFound(format!("Task {id}")))?;

    task.toggle();
    info!(id = task.id, status = %task.status, "toggled task");

    Ok(Html(render::task_item(task)))
}
