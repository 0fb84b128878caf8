//! FAQ CRUD with view counting and notification side effects.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use shorewatch_core::error::AppError;
use shorewatch_database::repositories::faq::FaqRepository;
use shorewatch_entity::faq::{CreateFaq, Faq, UpdateFaq};

use crate::context::RequestContext;
use crate::notification::NotificationService;
use crate::notification::rules::{ContentAction, content_notification};

/// Handles FAQ management and user-facing reads.
#[derive(Debug, Clone)]
pub struct FaqService {
    /// FAQ repository.
    faq_repo: Arc<FaqRepository>,
    /// Notification emission.
    notifications: Arc<NotificationService>,
}

impl FaqService {
    /// Creates a new FAQ service.
    pub fn new(faq_repo: Arc<FaqRepository>, notifications: Arc<NotificationService>) -> Self {
        Self {
            faq_repo,
            notifications,
        }
    }

    /// Lists every FAQ for the admin surface, archived entries included.
    pub async fn list_all(&self) -> Result<Vec<Faq>, AppError> {
        self.faq_repo.find_all().await
    }

    /// Lists active FAQs for end users. Does not touch view counters.
    pub async fn list_active(&self) -> Result<Vec<Faq>, AppError> {
        self.faq_repo.find_active().await
    }

    /// Gets a FAQ without counting the read (admin path).
    pub async fn get(&self, id: Uuid) -> Result<Faq, AppError> {
        self.faq_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("FAQ {id} not found")))
    }

    /// Gets a FAQ for a user-facing detail view, bumping its view count.
    pub async fn view(&self, id: Uuid) -> Result<Faq, AppError> {
        self.faq_repo
            .increment_view_count(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("FAQ {id} not found")))
    }

    /// Creates a FAQ and broadcasts a notification.
    pub async fn create(&self, ctx: &RequestContext, data: CreateFaq) -> Result<Faq, AppError> {
        if data.question.trim().is_empty() {
            return Err(AppError::validation("Question is required"));
        }
        if data.answer.trim().is_empty() {
            return Err(AppError::validation("Answer is required"));
        }
        if data.category.trim().is_empty() {
            return Err(AppError::validation("Category is required"));
        }

        let faq = self.faq_repo.create(&data).await?;

        info!(admin = %ctx.user_id, faq_id = %faq.id, "FAQ created");

        self.notifications
            .emit_prepared(content_notification(
                "FAQ",
                ContentAction::Created,
                &faq.question,
            ))
            .await?;

        Ok(faq)
    }

    /// Merges a partial update into a FAQ and broadcasts a notification.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        changes: UpdateFaq,
    ) -> Result<Faq, AppError> {
        if changes.question.as_deref().is_some_and(|q| q.trim().is_empty()) {
            return Err(AppError::validation("Question cannot be empty"));
        }
        if changes.answer.as_deref().is_some_and(|a| a.trim().is_empty()) {
            return Err(AppError::validation("Answer cannot be empty"));
        }

        let faq = self.faq_repo.update(id, &changes).await?;

        info!(admin = %ctx.user_id, faq_id = %faq.id, "FAQ updated");

        self.notifications
            .emit_prepared(content_notification(
                "FAQ",
                ContentAction::Updated,
                &faq.question,
            ))
            .await?;

        Ok(faq)
    }

    /// Hard-deletes a FAQ and broadcasts a notification.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let faq = self.get(id).await?;

        let deleted = self.faq_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("FAQ {id} not found")));
        }

        info!(admin = %ctx.user_id, faq_id = %id, "FAQ deleted");

        self.notifications
            .emit_prepared(content_notification(
                "FAQ",
                ContentAction::Deleted,
                &faq.question,
            ))
            .await?;

        Ok(())
    }
}
