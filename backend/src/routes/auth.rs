//! Authentication routes
//!
//! Signup and login. There is no session or token layer; login returns
//! the public user view and clients carry the user id themselves.

use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, routing::post, Json, Router};
use health_companion_shared::types::{LoginRequest, SignupRequest, UserResponse};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

/// Register a new user
///
/// POST /api/v1/auth/signup
async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::signup(&state.store, req.email, req.password, req.profile).await?;
    Ok(Json(UserResponse {
        id: user.id,
        email: user.credentials.email,
        name: user.profile.name,
        goal: user.goal,
    }))
}

/// Login with email and password
///
/// POST /api/v1/auth/login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::authenticate(&state.store, &req.email, &req.password).await?;
    Ok(Json(UserResponse {
        id: user.id,
        email: user.credentials.email,
        name: user.profile.name,
        goal: user.goal,
    }))
}
