//! Update kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of announcement an update carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "update_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UpdateKind {
    /// General announcement.
    Announcement,
    /// News item.
    News,
    /// Urgent alert (e.g., contamination warning).
    Alert,
    /// Scheduled community event.
    Event,
    /// Monitoring protocol change.
    Protocol,
}

impl UpdateKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Announcement => "announcement",
            Self::News => "news",
            Self::Alert => "alert",
            Self::Event => "event",
            Self::Protocol => "protocol",
        }
    }
}

impl Default for UpdateKind {
    fn default() -> Self {
        Self::Announcement
    }
}

impl fmt::Display for UpdateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UpdateKind {
    type Err = shorewatch_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "announcement" => Ok(Self::Announcement),
            "news" => Ok(Self::News),
            "alert" => Ok(Self::Alert),
            "event" => Ok(Self::Event),
            "protocol" => Ok(Self::Protocol),
            _ => Err(shorewatch_core::AppError::validation(format!(
                "Invalid update kind: '{s}'. Expected one of: announcement, news, alert, event, protocol"
            ))),
        }
    }
}
