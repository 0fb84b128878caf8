//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::kind::NotificationKind;

/// A notification delivered to one user, or broadcast to all.
///
/// Notifications are emitted as side effects of content and account
/// mutations; end users never create them directly.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: Uuid,
    /// The recipient. `None` means broadcast to every user.
    pub user_id: Option<Uuid>,
    /// What triggered this notification.
    pub kind: NotificationKind,
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
    /// Whether the recipient has read it. Only meaningful for targeted
    /// notifications.
    pub read: bool,
    /// When the notification was read.
    pub read_at: Option<DateTime<Utc>>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
    /// When the notification row was last touched.
    pub updated_at: DateTime<Utc>,
}

impl Notification {
    /// Whether this is a broadcast to all users.
    pub fn is_broadcast(&self) -> bool {
        self.user_id.is_none()
    }
}

/// Data required to emit a notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNotification {
    /// The recipient; `None` broadcasts to everyone.
    pub user_id: Option<Uuid>,
    /// What triggered the notification.
    pub kind: NotificationKind,
    /// Short title.
    pub title: String,
    /// Body text.
    pub message: String,
}
