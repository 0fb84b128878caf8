//! Notification emission rules for content mutations.
//!
//! Content entities (FAQs and updates) broadcast to all users on every
//! mutation kind: create, update, and delete. Account changes notify the
//! affected user only. These rules are the single source of truth so the
//! REST surface and the CLI cannot drift apart.

use shorewatch_entity::notification::{CreateNotification, NotificationKind};

/// The mutation that triggered a content notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentAction {
    /// The entity was created.
    Created,
    /// The entity was edited.
    Updated,
    /// The entity was removed.
    Deleted,
}

impl ContentAction {
    fn kind(self) -> NotificationKind {
        match self {
            Self::Created => NotificationKind::ContentCreated,
            Self::Updated => NotificationKind::ContentUpdated,
            Self::Deleted => NotificationKind::ContentDeleted,
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Self::Created => "added",
            Self::Updated => "updated",
            Self::Deleted => "removed",
        }
    }
}

/// Builds the broadcast notification for a content mutation.
///
/// `entity` is the human-readable entity name ("FAQ", "Update") and
/// `summary` identifies the record (question text, title).
pub fn content_notification(
    entity: &str,
    action: ContentAction,
    summary: &str,
) -> CreateNotification {
    CreateNotification {
        user_id: None,
        kind: action.kind(),
        title: format!("{entity} {}", action.verb()),
        message: format!("{entity} '{summary}' was {}", action.verb()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_notification_is_broadcast() {
        let n = content_notification("FAQ", ContentAction::Created, "How do I calibrate?");
        assert!(n.user_id.is_none());
        assert_eq!(n.kind, NotificationKind::ContentCreated);
        assert!(n.message.contains("How do I calibrate?"));
    }

    #[test]
    fn test_delete_emits_too() {
        let n = content_notification("Update", ContentAction::Deleted, "Old alert");
        assert_eq!(n.kind, NotificationKind::ContentDeleted);
        assert!(n.title.contains("removed"));
    }
}
