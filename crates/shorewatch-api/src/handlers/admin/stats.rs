//! Admin system stats handler.

use axum::Json;
use axum::extract::State;

use shorewatch_service::stats::SystemStats;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::middleware::rbac::require_admin;
use crate::state::AppState;

/// GET /api/admin/stats
pub async fn system_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<SystemStats>>, ApiError> {
    require_admin(&auth)?;
    let stats = state.stats_service.gather().await?;
    Ok(Json(ApiResponse::ok(stats)))
}
