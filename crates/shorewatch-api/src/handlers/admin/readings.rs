//! Admin reading oversight handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use shorewatch_core::types::pagination::PageResponse;
use shorewatch_entity::reading::Reading;

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::middleware::rbac::{require_admin, require_moderator};
use crate::state::AppState;

/// GET /api/admin/readings
///
/// Moderators review submissions; deletion stays admin-only.
pub async fn list_readings(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Reading>>>, ApiError> {
    require_moderator(&auth)?;
    let readings = state
        .reading_service
        .list_all(params.into_page_request())
        .await?;
    Ok(Json(ApiResponse::ok(readings)))
}

/// GET /api/admin/readings/:id
pub async fn get_reading(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Reading>>, ApiError> {
    require_moderator(&auth)?;
    let reading = state.reading_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok(reading)))
}

/// DELETE /api/admin/readings/:id
pub async fn delete_reading(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    require_admin(&auth)?;
    state.reading_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Reading deleted".to_string(),
    })))
}
