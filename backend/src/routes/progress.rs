//! Progress routes
//!
//! Read-only views over a user's recorded history: the aggregate
//! progress summary and the most recent entries.

use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use health_companion_shared::types::{EntriesResponse, ProgressResponse};
use serde::Deserialize;
use uuid::Uuid;

/// Default window for the recent-entries listing
const DEFAULT_ENTRY_WINDOW: usize = 7;

/// Create progress routes
pub fn progress_routes() -> Router<AppState> {
    Router::new()
        .route("/:user_id/progress", get(get_progress))
        .route("/:user_id/entries", get(get_entries))
}

/// Query parameters for the entries listing
#[derive(Debug, Deserialize)]
pub struct EntriesQuery {
    pub days: Option<usize>,
}

/// Get a user's progress summary
///
/// GET /api/v1/users/:user_id/progress
async fn get_progress(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<ProgressResponse>> {
    let progress = UserService::progress_summary(&state.store, user_id).await?;
    Ok(Json(progress))
}

/// Get a user's most recent entries, newest first
///
/// GET /api/v1/users/:user_id/entries?days=7
async fn get_entries(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Query(query): Query<EntriesQuery>,
) -> ApiResult<Json<EntriesResponse>> {
    let days = query.days.unwrap_or(DEFAULT_ENTRY_WINDOW);
    let entries = UserService::recent_entries(&state.store, user_id, days).await?;
    Ok(Json(EntriesResponse { entries }))
}
