//! Notification kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What triggered a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_kind", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// A FAQ or update was created.
    ContentCreated,
    /// A FAQ or update was edited.
    ContentUpdated,
    /// A FAQ or update was removed.
    ContentDeleted,
    /// A user account was changed by an admin.
    AccountChanged,
    /// Miscellaneous system message.
    System,
}

impl NotificationKind {
    /// Return the kind as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContentCreated => "content_created",
            Self::ContentUpdated => "content_updated",
            Self::ContentDeleted => "content_deleted",
            Self::AccountChanged => "account_changed",
            Self::System => "system",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = shorewatch_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "content_created" => Ok(Self::ContentCreated),
            "content_updated" => Ok(Self::ContentUpdated),
            "content_deleted" => Ok(Self::ContentDeleted),
            "account_changed" => Ok(Self::AccountChanged),
            "system" => Ok(Self::System),
            _ => Err(shorewatch_core::AppError::validation(format!(
                "Invalid notification kind: '{s}'"
            ))),
        }
    }
}
