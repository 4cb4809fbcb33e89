//! Profile routes
//!
//! Reading and patching the user profile. A successful patch regenerates
//! the user's goal, so the response carries the refreshed goal.

use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use health_companion_shared::models::UserProfile;
use health_companion_shared::types::{ProfilePatch, UserResponse};
use uuid::Uuid;

/// Create profile routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/:user_id/profile", get(get_profile).patch(patch_profile))
}

/// Get a user's profile
///
/// GET /api/v1/users/:user_id/profile
async fn get_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<UserProfile>> {
    let user = UserService::get_user(&state.store, user_id).await?;
    Ok(Json(user.profile))
}

/// Patch a user's profile and regenerate their goal
///
/// PATCH /api/v1/users/:user_id/profile
async fn patch_profile(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
    Json(patch): Json<ProfilePatch>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::update_profile(&state.store, user_id, patch).await?;
    Ok(Json(UserResponse {
        id: user.id,
        email: user.credentials.email,
        name: user.profile.name,
        goal: user.goal,
    }))
}
