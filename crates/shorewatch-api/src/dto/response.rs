//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shorewatch_entity::faq::Faq;
use shorewatch_entity::update::Update;
use shorewatch_entity::user::{User, UserProfile, UserStats};

/// Window within which freshly created content is flagged `is_new`.
const NEW_CONTENT_DAYS: i64 = 7;

/// Standard success response wrapper: `{ "success": true, "data": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Public user fields (no password hash).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Full display name.
    pub name: String,
    /// Email.
    pub email: String,
    /// Username.
    pub username: String,
    /// Role.
    pub role: String,
    /// Monitoring team.
    pub team: Option<String>,
    /// Account status.
    pub status: String,
    /// Last login or activity.
    pub last_active: Option<DateTime<Utc>>,
    /// Profile data.
    pub profile: UserProfile,
    /// Contribution stats.
    pub stats: UserStats,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            username: user.username,
            role: user.role.to_string(),
            team: user.team,
            status: user.status.to_string(),
            last_active: user.last_active,
            profile: user.profile.0,
            stats: user.stats.0,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Successful registration or login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed bearer token.
    pub token: String,
    /// When the token expires.
    pub expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: UserResponse,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Count response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    /// Count value.
    pub count: i64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Database connectivity: "connected" or "error".
    pub database: String,
    /// Seconds since process start.
    pub uptime_seconds: u64,
    /// Crate version.
    pub version: String,
}

/// A FAQ enriched for user-facing lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedFaq {
    /// The FAQ record.
    #[serde(flatten)]
    pub faq: Faq,
    /// Whether the entry was created recently.
    pub is_new: bool,
    /// Alias of the record's update timestamp, for dashboard display.
    pub last_updated: DateTime<Utc>,
}

impl EnrichedFaq {
    /// Enriches a FAQ relative to `now`.
    pub fn new(faq: Faq, now: DateTime<Utc>) -> Self {
        let is_new = (now - faq.created_at) < chrono::Duration::days(NEW_CONTENT_DAYS);
        let last_updated = faq.updated_at;
        Self {
            faq,
            is_new,
            last_updated,
        }
    }
}

/// An update enriched for user-facing lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichedUpdate {
    /// The update record.
    #[serde(flatten)]
    pub update: Update,
    /// Whether the entry was created recently.
    pub is_new: bool,
    /// Alias of the record's update timestamp, for dashboard display.
    pub last_updated: DateTime<Utc>,
}

impl EnrichedUpdate {
    /// Enriches an update relative to `now`.
    pub fn new(update: Update, now: DateTime<Utc>) -> Self {
        let is_new = (now - update.created_at) < chrono::Duration::days(NEW_CONTENT_DAYS);
        let last_updated = update.updated_at;
        Self {
            update,
            is_new,
            last_updated,
        }
    }
}
