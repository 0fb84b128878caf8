//! `AuthUser` extractor: validates the bearer token and exposes the
//! request context to handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use shorewatch_core::error::AppError;
use shorewatch_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// The authenticated caller, available to any handler that lists it.
///
/// Derefs to [`RequestContext`], so handlers read `auth.user_id` and
/// `auth.role` directly.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = state.jwt_decoder.decode_token(token)?;

        Ok(AuthUser(RequestContext::new(
            claims.user_id(),
            claims.role,
            claims.username,
        )))
    }
}

/// Pulls the token out of `Authorization: Bearer <token>`.
fn bearer_token(parts: &Parts) -> Result<&str, AppError> {
    parts
        .headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::unauthorized("Missing or malformed bearer token"))
}
