//! Wire models for API payloads that differ from the storage entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shorewatch_entity::user::UserStats;

/// A user as the API serves it — public fields only, enums as strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncUser {
    /// User ID.
    pub id: Uuid,
    /// Full display name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Username.
    pub username: String,
    /// Role name.
    pub role: String,
    /// Monitoring team.
    #[serde(default)]
    pub team: Option<String>,
    /// Account status name.
    pub status: String,
    /// Last login or activity.
    #[serde(default)]
    pub last_active: Option<DateTime<Utc>>,
    /// Contribution stats.
    #[serde(default)]
    pub stats: UserStats,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl SyncUser {
    /// Whether the account is currently active.
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}
