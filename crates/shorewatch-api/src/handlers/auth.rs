//! Auth handlers — register, login, profile.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use shorewatch_service::user::auth::RegisterRequest as SvcRegister;

use crate::dto::request::{LoginRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, AuthResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<AuthResponse>>), ApiError> {
    let outcome = state
        .auth_service
        .register(SvcRegister {
            name: req.name,
            email: req.email,
            username: req.username,
            password: req.password,
            team: req.team,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(AuthResponse {
            token: outcome.token.token,
            expires_at: outcome.token.expires_at,
            user: outcome.user.into(),
        })),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    let outcome = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(AuthResponse {
        token: outcome.token.token,
        expires_at: outcome.token.expires_at,
        user: outcome.user.into(),
    })))
}

/// GET /api/auth/profile
pub async fn profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let user = state.auth_service.profile(&auth).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}
