//! FAQ status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a FAQ entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "faq_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FaqStatus {
    /// Visible to users.
    Active,
    /// Hidden from user-facing lists but retained.
    Archived,
}

impl FaqStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Archived => "archived",
        }
    }
}

impl Default for FaqStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl fmt::Display for FaqStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FaqStatus {
    type Err = shorewatch_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "archived" => Ok(Self::Archived),
            _ => Err(shorewatch_core::AppError::validation(format!(
                "Invalid FAQ status: '{s}'. Expected one of: active, archived"
            ))),
        }
    }
}
