//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use uuid::Uuid;

use super::profile::{UserProfile, UserStats};
use super::role::UserRole;
use super::status::UserStatus;

/// A registered user in the Shorewatch system.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Full display name.
    pub name: String,
    /// Email address (globally unique, case-insensitive).
    pub email: String,
    /// Login name (globally unique, case-insensitive).
    pub username: String,
    /// Argon2id password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// User role.
    pub role: UserRole,
    /// Monitoring team the user belongs to.
    pub team: Option<String>,
    /// Account status.
    pub status: UserStatus,
    /// Last successful login or activity.
    pub last_active: Option<DateTime<Utc>>,
    /// Free-form profile data.
    pub profile: Json<UserProfile>,
    /// Contribution statistics.
    pub stats: Json<UserStats>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if the user can log in right now.
    pub fn can_login(&self) -> bool {
        self.status.can_login()
    }

    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Full display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Desired username.
    pub username: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: UserRole,
    /// Monitoring team (optional).
    pub team: Option<String>,
    /// Initial profile data.
    pub profile: UserProfile,
}

/// Partial update for an existing user. `None` fields are left untouched.
///
/// Stats are deliberately absent: they change only through reading
/// submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New role.
    pub role: Option<UserRole>,
    /// New team.
    pub team: Option<String>,
    /// New account status.
    pub status: Option<UserStatus>,
    /// New profile data (replaced wholesale when present).
    pub profile: Option<UserProfile>,
    /// When set, the update only applies if the stored `updated_at`
    /// still matches; otherwise the write is rejected as a conflict.
    pub expected_updated_at: Option<DateTime<Utc>>,
}
