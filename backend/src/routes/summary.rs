//! Daily summary route
//!
//! Accepts the day's activity, produces the full summary (analyzers,
//! alignment, enhancement with deterministic fallback), records the entry
//! with the summary cached on it, and returns the summary.

use crate::error::ApiResult;
use crate::services::{SummaryService, UserService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use health_companion_shared::models::DailyActivityInput;
use health_companion_shared::summary::DailySummary;
use health_companion_shared::types::DailyLogRequest;
use uuid::Uuid;

/// Create summary routes
pub fn summary_routes() -> Router<AppState> {
    Router::new().route("/:user_id/daily-summary", post(daily_summary))
}

/// Produce and record a daily summary
///
/// POST /api/v1/users/:user_id/daily-summary
async fn daily_summary(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(req): Json<DailyLogRequest>,
) -> ApiResult<Json<DailySummary>> {
    let user = UserService::get_user(&state.store, user_id).await?;

    let input = DailyActivityInput {
        meals: req.meals.clone(),
        exercises: req.exercises.clone(),
        lifestyle: req.lifestyle.clone(),
    };
    let summary =
        SummaryService::daily_summary(state.enhancer.as_ref(), Some(&user.goal), &input).await;

    UserService::add_daily_entry(&state.store, user_id, &req, Some(summary.clone())).await?;
    Ok(Json(summary))
}
