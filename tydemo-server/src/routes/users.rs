//! User search and profile endpoints

use axum::{
    Router,
    extract::{Path, Query},
    response::Html,
    routing::get,
};
use serde::Deserialize;

use tydemo_core::DemoError;
use tydemo_core::sample::{find_user, search_users};

use crate::render;
use crate::routes::FragmentError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/users/search", get(search))
        .route("/api/users/{id}", get(user_card))
}

#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// GET /api/users/search?q - Results for dropdown and multiselect components
async fn search(Query(query): Query<SearchQuery>) -> Html<String> {
    Html(render::user_results(&search_users(&query.q)))
}

/// GET /api/users/:id - Card for one user
async fn user_card(Path(id): Path<String>) -> Result<Html<String>, FragmentError> {
    let user = id
        .parse::<u32>()
        .ok()
        .and_then(find_user)
        .ok_or_else(|| DemoError::NotFound(format!("User {id}")))?;

    Ok(Html(render::user_card(&user)))
}
