//! Update CRUD with visibility filtering and notification side effects.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use shorewatch_core::error::AppError;
use shorewatch_database::repositories::update::UpdateRepository;
use shorewatch_entity::update::{CreateUpdate, Update, UpdateChanges};

use crate::context::RequestContext;
use crate::notification::NotificationService;
use crate::notification::rules::{ContentAction, content_notification};

/// Handles update management and user-facing reads.
#[derive(Debug, Clone)]
pub struct UpdateService {
    /// Update repository.
    update_repo: Arc<UpdateRepository>,
    /// Notification emission.
    notifications: Arc<NotificationService>,
}

impl UpdateService {
    /// Creates a new update service.
    pub fn new(
        update_repo: Arc<UpdateRepository>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            update_repo,
            notifications,
        }
    }

    /// Lists every update for the admin surface, expired and draft
    /// records included.
    pub async fn list_all(&self) -> Result<Vec<Update>, AppError> {
        self.update_repo.find_all().await
    }

    /// Lists updates visible to end users: no drafts, no future-scheduled
    /// records, no auto-expired records.
    pub async fn list_visible(&self) -> Result<Vec<Update>, AppError> {
        self.update_repo.find_visible().await
    }

    /// Gets a single update (admin path).
    pub async fn get(&self, id: Uuid) -> Result<Update, AppError> {
        self.update_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Update {id} not found")))
    }

    /// Creates an update and broadcasts a notification.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        data: CreateUpdate,
    ) -> Result<Update, AppError> {
        if data.title.trim().is_empty() {
            return Err(AppError::validation("Title is required"));
        }
        if data.content.trim().is_empty() {
            return Err(AppError::validation("Content is required"));
        }
        if data.auto_expire && data.expiration_date.is_none() {
            return Err(AppError::validation(
                "auto_expire requires an expiration_date",
            ));
        }

        let update = self.update_repo.create(&data).await?;

        info!(admin = %ctx.user_id, update_id = %update.id, "Update created");

        self.notifications
            .emit_prepared(content_notification(
                "Update",
                ContentAction::Created,
                &update.title,
            ))
            .await?;

        Ok(update)
    }

    /// Merges a partial update into an announcement and broadcasts a
    /// notification.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        changes: UpdateChanges,
    ) -> Result<Update, AppError> {
        if changes.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(AppError::validation("Title cannot be empty"));
        }
        if changes
            .content
            .as_deref()
            .is_some_and(|c| c.trim().is_empty())
        {
            return Err(AppError::validation("Content cannot be empty"));
        }

        let update = self.update_repo.update(id, &changes).await?;

        info!(admin = %ctx.user_id, update_id = %update.id, "Update edited");

        self.notifications
            .emit_prepared(content_notification(
                "Update",
                ContentAction::Updated,
                &update.title,
            ))
            .await?;

        Ok(update)
    }

    /// Hard-deletes an update and broadcasts a notification.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let update = self.get(id).await?;

        let deleted = self.update_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("Update {id} not found")));
        }

        info!(admin = %ctx.user_id, update_id = %id, "Update deleted");

        self.notifications
            .emit_prepared(content_notification(
                "Update",
                ContentAction::Deleted,
                &update.title,
            ))
            .await?;

        Ok(())
    }
}
