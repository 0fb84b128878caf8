//! Role guards for route handlers.

use shorewatch_core::error::AppError;
use shorewatch_entity::user::UserRole;

use crate::extractors::AuthUser;

/// Checks that the authenticated user has the Admin role.
pub fn require_admin(auth: &AuthUser) -> Result<(), AppError> {
    if auth.role != UserRole::Admin {
        return Err(AppError::forbidden("Admin access required"));
    }
    Ok(())
}

/// Checks that the authenticated user has at least Moderator role.
pub fn require_moderator(auth: &AuthUser) -> Result<(), AppError> {
    match auth.role {
        UserRole::Admin | UserRole::Moderator => Ok(()),
        _ => Err(AppError::forbidden("Moderator or Admin access required")),
    }
}
