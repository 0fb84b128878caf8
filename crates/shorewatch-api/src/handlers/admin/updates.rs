//! Admin update management handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use shorewatch_entity::update::{CreateUpdate, Update, UpdateChanges};

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/admin/updates
///
/// Full list: drafts and expired records stay visible here.
pub async fn list_updates(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Update>>>, ApiError> {
    require_admin(&auth)?;
    let updates = state.update_service.list_all().await?;
    Ok(Json(ApiResponse::ok(updates)))
}

/// POST /api/admin/updates
pub async fn create_update(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateUpdate>,
) -> Result<(StatusCode, Json<ApiResponse<Update>>), ApiError> {
    require_admin(&auth)?;
    let update = state.update_service.create(&auth, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(update))))
}

/// GET /api/admin/updates/:id
pub async fn get_update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Update>>, ApiError> {
    require_admin(&auth)?;
    let update = state.update_service.get(id).await?;
    Ok(Json(ApiResponse::ok(update)))
}

/// PUT /api/admin/updates/:id
pub async fn update_update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateChanges>,
) -> Result<Json<ApiResponse<Update>>, ApiError> {
    require_admin(&auth)?;
    let update = state.update_service.update(&auth, id, req).await?;
    Ok(Json(ApiResponse::ok(update)))
}

/// DELETE /api/admin/updates/:id
pub async fn delete_update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    require_admin(&auth)?;
    state.update_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Update deleted".to_string(),
    })))
}
