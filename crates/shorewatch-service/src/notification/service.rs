//! Notification delivery and read-state management.

use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use shorewatch_core::error::AppError;
use shorewatch_database::repositories::notification::NotificationRepository;
use shorewatch_entity::notification::{CreateNotification, Notification, NotificationKind};

use crate::context::RequestContext;

/// Manages notifications: side-effect emission and user read state.
#[derive(Debug, Clone)]
pub struct NotificationService {
    /// Notification repository.
    notif_repo: Arc<NotificationRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(notif_repo: Arc<NotificationRepository>) -> Self {
        Self { notif_repo }
    }

    /// Lists notifications visible to the current user (own + broadcast).
    pub async fn list_for(&self, ctx: &RequestContext) -> Result<Vec<Notification>, AppError> {
        self.notif_repo.find_for_user(ctx.user_id).await
    }

    /// Gets the unread notification count for the current user.
    pub async fn unread_count(&self, ctx: &RequestContext) -> Result<i64, AppError> {
        self.notif_repo.count_unread(ctx.user_id).await
    }

    /// Marks a notification as read.
    pub async fn mark_read(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let marked = self.notif_repo.mark_read(id, ctx.user_id).await?;
        if !marked {
            return Err(AppError::not_found(format!("Notification {id} not found")));
        }
        Ok(())
    }

    /// Marks all of the current user's notifications as read.
    pub async fn mark_all_read(&self, ctx: &RequestContext) -> Result<u64, AppError> {
        self.notif_repo.mark_all_read(ctx.user_id).await
    }

    /// Emits a notification. `user_id = None` broadcasts to everyone.
    pub async fn emit(
        &self,
        user_id: Option<Uuid>,
        kind: NotificationKind,
        title: &str,
        message: &str,
    ) -> Result<Notification, AppError> {
        debug!(?user_id, %kind, title, "Emitting notification");
        self.notif_repo
            .create(&CreateNotification {
                user_id,
                kind,
                title: title.to_string(),
                message: message.to_string(),
            })
            .await
    }

    /// Emits a pre-built notification.
    pub async fn emit_prepared(&self, data: CreateNotification) -> Result<Notification, AppError> {
        debug!(user_id = ?data.user_id, kind = %data.kind, title = %data.title, "Emitting notification");
        self.notif_repo.create(&data).await
    }
}
