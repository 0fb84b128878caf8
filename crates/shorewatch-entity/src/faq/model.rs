//! FAQ entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::level::{Importance, Priority};

use super::status::FaqStatus;

/// A frequently-asked question maintained by admins, readable by everyone.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Faq {
    /// Unique FAQ identifier.
    pub id: Uuid,
    /// Top-level category.
    pub category: String,
    /// Optional subcategory.
    pub subcategory: Option<String>,
    /// The question text.
    pub question: String,
    /// The answer text.
    pub answer: String,
    /// Priority level.
    pub priority: Priority,
    /// Importance level.
    pub importance: Importance,
    /// Search tags.
    pub tags: Vec<String>,
    /// How many times the detail view has been served. Monotonic.
    pub view_count: i64,
    /// Display order within a category (lower first).
    pub display_order: i32,
    /// Lifecycle status.
    pub status: FaqStatus,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
    /// When the entry was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a FAQ entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFaq {
    /// Top-level category.
    pub category: String,
    /// Optional subcategory.
    #[serde(default)]
    pub subcategory: Option<String>,
    /// The question text.
    pub question: String,
    /// The answer text.
    pub answer: String,
    /// Priority level (defaults to medium).
    #[serde(default)]
    pub priority: Priority,
    /// Importance level (defaults to normal).
    #[serde(default)]
    pub importance: Importance,
    /// Search tags (defaults to empty).
    #[serde(default)]
    pub tags: Vec<String>,
    /// Display order within a category.
    #[serde(default)]
    pub display_order: i32,
}

/// Partial update for a FAQ entry. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFaq {
    /// New category.
    pub category: Option<String>,
    /// New subcategory.
    pub subcategory: Option<String>,
    /// New question text.
    pub question: Option<String>,
    /// New answer text.
    pub answer: Option<String>,
    /// New priority.
    pub priority: Option<Priority>,
    /// New importance.
    pub importance: Option<Importance>,
    /// New tags (replaced wholesale when present).
    pub tags: Option<Vec<String>>,
    /// New display order.
    pub display_order: Option<i32>,
    /// New lifecycle status.
    pub status: Option<FaqStatus>,
    /// When set, the update only applies if the stored `updated_at`
    /// still matches; otherwise the write is rejected as a conflict.
    pub expected_updated_at: Option<DateTime<Utc>>,
}
