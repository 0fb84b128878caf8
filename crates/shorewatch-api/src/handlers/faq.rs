//! Public FAQ handlers.

use axum::Json;
use axum::extract::{Path, State};
use chrono::Utc;
use uuid::Uuid;

use crate::dto::response::{ApiResponse, EnrichedFaq};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/user/faqs
///
/// Active entries only, enriched for dashboard display. Does not touch
/// view counters.
pub async fn list_faqs(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<EnrichedFaq>>>, ApiError> {
    let now = Utc::now();
    let faqs = state
        .faq_service
        .list_active()
        .await?
        .into_iter()
        .map(|faq| EnrichedFaq::new(faq, now))
        .collect();

    Ok(Json(ApiResponse::ok(faqs)))
}

/// GET /api/user/faqs/:id
///
/// Detail view; each call bumps the entry's view counter.
pub async fn view_faq(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<EnrichedFaq>>, ApiError> {
    let faq = state.faq_service.view(id).await?;
    Ok(Json(ApiResponse::ok(EnrichedFaq::new(faq, Utc::now()))))
}
