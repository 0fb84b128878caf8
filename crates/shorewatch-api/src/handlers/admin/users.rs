//! Admin user management handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;

use shorewatch_core::types::pagination::PageResponse;
use shorewatch_entity::user::UpdateUser;
use shorewatch_service::user::admin::AdminCreateUser;

use crate::dto::response::{ApiResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/admin/users
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<UserResponse>>>, ApiError> {
    require_admin(&auth)?;
    let page = state
        .admin_user_service
        .list(params.into_page_request())
        .await?;

    let users = PageResponse::new(
        page.items.into_iter().map(UserResponse::from).collect(),
        page.page,
        page.page_size,
        page.total_items,
    );

    Ok(Json(ApiResponse::ok(users)))
}

/// POST /api/admin/users
pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<AdminCreateUser>,
) -> Result<(StatusCode, Json<ApiResponse<UserResponse>>), ApiError> {
    require_admin(&auth)?;
    let user = state.admin_user_service.create(&auth, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(user.into()))))
}

/// GET /api/admin/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    require_admin(&auth)?;
    let user = state.admin_user_service.get(id).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// PUT /api/admin/users/:id
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateUser>,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    require_admin(&auth)?;
    let user = state.admin_user_service.update(&auth, id, req).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// DELETE /api/admin/users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    require_admin(&auth)?;
    state.admin_user_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "User deleted".to_string(),
    })))
}
