//! Admin FAQ management handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use shorewatch_entity::faq::{CreateFaq, Faq, UpdateFaq};

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/admin/faqs
///
/// Full list, archived entries included. Never bumps view counters.
pub async fn list_faqs(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Faq>>>, ApiError> {
    require_admin(&auth)?;
    let faqs = state.faq_service.list_all().await?;
    Ok(Json(ApiResponse::ok(faqs)))
}

/// POST /api/admin/faqs
pub async fn create_faq(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateFaq>,
) -> Result<(StatusCode, Json<ApiResponse<Faq>>), ApiError> {
    require_admin(&auth)?;
    let faq = state.faq_service.create(&auth, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(faq))))
}

/// GET /api/admin/faqs/:id
pub async fn get_faq(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Faq>>, ApiError> {
    require_admin(&auth)?;
    let faq = state.faq_service.get(id).await?;
    Ok(Json(ApiResponse::ok(faq)))
}

/// PUT /api/admin/faqs/:id
pub async fn update_faq(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateFaq>,
) -> Result<Json<ApiResponse<Faq>>, ApiError> {
    require_admin(&auth)?;
    let faq = state.faq_service.update(&auth, id, req).await?;
    Ok(Json(ApiResponse::ok(faq)))
}

/// DELETE /api/admin/faqs/:id
pub async fn delete_faq(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    require_admin(&auth)?;
    state.faq_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "FAQ deleted".to_string(),
    })))
}
