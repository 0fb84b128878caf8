//! Update status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Publication status of an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "update_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UpdateStatus {
    /// Not yet visible to users.
    Draft,
    /// Will become visible at its scheduled date.
    Scheduled,
    /// Visible to users (subject to expiration).
    Published,
}

impl UpdateStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Scheduled => "scheduled",
            Self::Published => "published",
        }
    }
}

impl Default for UpdateStatus {
    fn default() -> Self {
        Self::Published
    }
}

impl fmt::Display for UpdateStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UpdateStatus {
    type Err = shorewatch_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(Self::Draft),
            "scheduled" => Ok(Self::Scheduled),
            "published" => Ok(Self::Published),
            _ => Err(shorewatch_core::AppError::validation(format!(
                "Invalid update status: '{s}'. Expected one of: draft, scheduled, published"
            ))),
        }
    }
}
