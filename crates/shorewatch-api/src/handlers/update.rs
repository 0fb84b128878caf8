//! Public update handlers.

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use crate::dto::response::{ApiResponse, EnrichedUpdate};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/user/updates
///
/// Visible updates only: drafts, future-scheduled, and auto-expired
/// records are excluded even when still stored as published.
pub async fn list_updates(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<EnrichedUpdate>>>, ApiError> {
    let now = Utc::now();
    let updates = state
        .update_service
        .list_visible()
        .await?
        .into_iter()
        .map(|update| EnrichedUpdate::new(update, now))
        .collect();

    Ok(Json(ApiResponse::ok(updates)))
}
