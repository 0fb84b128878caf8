//! Update (announcement) entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::level::Priority;

use super::kind::UpdateKind;
use super::status::UpdateStatus;

/// A site-wide announcement, news item, alert, event, or protocol change.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Update {
    /// Unique update identifier.
    pub id: Uuid,
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// What kind of update this is.
    pub kind: UpdateKind,
    /// Priority level.
    pub priority: Priority,
    /// Search tags.
    pub tags: Vec<String>,
    /// When the update should start being shown.
    pub scheduled_date: Option<DateTime<Utc>>,
    /// When the update stops being relevant.
    pub expiration_date: Option<DateTime<Utc>>,
    /// Whether the update disappears from user-facing reads after
    /// `expiration_date` without an explicit status change.
    pub auto_expire: bool,
    /// Publication status.
    pub status: UpdateStatus,
    /// When the update was created.
    pub created_at: DateTime<Utc>,
    /// When the update was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Update {
    /// Whether this update should be shown to end users at `now`.
    ///
    /// Drafts are never visible. Scheduled updates become visible once
    /// their scheduled date has passed. Auto-expiring updates stop being
    /// visible after their expiration date even while the stored status
    /// still reads published.
    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        match self.status {
            UpdateStatus::Draft => return false,
            UpdateStatus::Scheduled => {
                if self.scheduled_date.is_none_or(|d| d > now) {
                    return false;
                }
            }
            UpdateStatus::Published => {}
        }

        if self.auto_expire {
            if let Some(expiry) = self.expiration_date {
                if expiry < now {
                    return false;
                }
            }
        }

        true
    }
}

/// Data required to create an update.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUpdate {
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Kind of update (defaults to announcement).
    #[serde(default)]
    pub kind: UpdateKind,
    /// Priority (defaults to medium).
    #[serde(default)]
    pub priority: Priority,
    /// Search tags (defaults to empty).
    #[serde(default)]
    pub tags: Vec<String>,
    /// When to start showing the update.
    #[serde(default)]
    pub scheduled_date: Option<DateTime<Utc>>,
    /// When the update expires.
    #[serde(default)]
    pub expiration_date: Option<DateTime<Utc>>,
    /// Whether to hide the update automatically after expiry.
    #[serde(default)]
    pub auto_expire: bool,
    /// Publication status (defaults to published).
    #[serde(default)]
    pub status: UpdateStatus,
}

/// Partial update for an existing update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateChanges {
    /// New headline.
    pub title: Option<String>,
    /// New body text.
    pub content: Option<String>,
    /// New kind.
    pub kind: Option<UpdateKind>,
    /// New priority.
    pub priority: Option<Priority>,
    /// New tags (replaced wholesale when present).
    pub tags: Option<Vec<String>>,
    /// New scheduled date.
    pub scheduled_date: Option<DateTime<Utc>>,
    /// New expiration date.
    pub expiration_date: Option<DateTime<Utc>>,
    /// New auto-expire flag.
    pub auto_expire: Option<bool>,
    /// New publication status.
    pub status: Option<UpdateStatus>,
    /// When set, the update only applies if the stored `updated_at`
    /// still matches; otherwise the write is rejected as a conflict.
    pub expected_updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Update {
        let now = Utc::now();
        Update {
            id: Uuid::new_v4(),
            title: "Sampling window".into(),
            content: "Spring tide sampling starts Monday".into(),
            kind: UpdateKind::Announcement,
            priority: Priority::Medium,
            tags: vec![],
            scheduled_date: None,
            expiration_date: None,
            auto_expire: false,
            status: UpdateStatus::Published,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_published_is_visible() {
        let now = Utc::now();
        assert!(base().is_visible_at(now));
    }

    #[test]
    fn test_draft_is_hidden() {
        let mut update = base();
        update.status = UpdateStatus::Draft;
        assert!(!update.is_visible_at(Utc::now()));
    }

    #[test]
    fn test_auto_expired_is_hidden_even_when_published() {
        let now = Utc::now();
        let mut update = base();
        update.auto_expire = true;
        update.expiration_date = Some(now - chrono::Duration::days(1));
        assert_eq!(update.status, UpdateStatus::Published);
        assert!(!update.is_visible_at(now));
    }

    #[test]
    fn test_expired_without_auto_expire_stays_visible() {
        let now = Utc::now();
        let mut update = base();
        update.expiration_date = Some(now - chrono::Duration::days(1));
        assert!(update.is_visible_at(now));
    }

    #[test]
    fn test_scheduled_becomes_visible_after_date() {
        let now = Utc::now();
        let mut update = base();
        update.status = UpdateStatus::Scheduled;
        update.scheduled_date = Some(now + chrono::Duration::hours(1));
        assert!(!update.is_visible_at(now));

        update.scheduled_date = Some(now - chrono::Duration::hours(1));
        assert!(update.is_visible_at(now));
    }
}
