//! Reading submission and retrieval handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use shorewatch_entity::reading::{CreateReading, Reading};

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/readings
pub async fn submit_reading(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateReading>,
) -> Result<(StatusCode, Json<ApiResponse<Reading>>), ApiError> {
    let reading = state.reading_service.submit(&auth, req).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(reading))))
}

/// GET /api/readings
pub async fn list_readings(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Reading>>>, ApiError> {
    let readings = state.reading_service.list_own(&auth).await?;
    Ok(Json(ApiResponse::ok(readings)))
}

/// GET /api/readings/:id
pub async fn get_reading(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Reading>>, ApiError> {
    let reading = state.reading_service.get(&auth, id).await?;
    Ok(Json(ApiResponse::ok(reading)))
}

/// DELETE /api/readings/:id
pub async fn delete_reading(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.reading_service.delete(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Reading deleted".to_string(),
    })))
}
