//! Reading submission with streak tracking, plus listing and deletion.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use shorewatch_core::error::AppError;
use shorewatch_core::types::pagination::{PageRequest, PageResponse};
use shorewatch_database::repositories::reading::{InsertReading, ReadingRepository};
use shorewatch_database::repositories::user::UserRepository;
use shorewatch_entity::reading::{CreateReading, Reading};

use crate::context::RequestContext;

/// Handles reading submission and retrieval.
#[derive(Debug, Clone)]
pub struct ReadingService {
    /// Reading repository.
    reading_repo: Arc<ReadingRepository>,
    /// User repository, for stats updates.
    user_repo: Arc<UserRepository>,
}

impl ReadingService {
    /// Creates a new reading service.
    pub fn new(reading_repo: Arc<ReadingRepository>, user_repo: Arc<UserRepository>) -> Self {
        Self {
            reading_repo,
            user_repo,
        }
    }

    /// Submits a reading for the current user and folds it into the
    /// owner's contribution stats (total, streak, accuracy mean).
    ///
    /// Stats use a read-modify-write on the user row; two simultaneous
    /// submissions from the same account are last-write-wins, matching
    /// the per-row atomicity the store provides.
    pub async fn submit(
        &self,
        ctx: &RequestContext,
        data: CreateReading,
    ) -> Result<Reading, AppError> {
        if !(0..=100).contains(&data.accuracy) {
            return Err(AppError::validation("Accuracy must be between 0 and 100"));
        }
        if !data.location.is_valid() {
            return Err(AppError::validation("Location coordinates are out of range"));
        }
        if !data.value.is_finite() {
            return Err(AppError::validation("Value must be a finite number"));
        }

        let user = self
            .user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Submitting user not found"))?;

        let timestamp = data.timestamp.unwrap_or_else(Utc::now);
        let unit = data
            .unit
            .clone()
            .unwrap_or_else(|| data.parameter.default_unit().to_string());

        let reading = self
            .reading_repo
            .create(&InsertReading {
                user_id: ctx.user_id,
                parameter: data.parameter,
                value: data.value,
                unit,
                location: data.location,
                timestamp,
                accuracy: data.accuracy,
                notes: data.notes,
            })
            .await?;

        let mut stats = user.stats.0.clone();
        stats.record_reading(timestamp, data.accuracy);
        self.user_repo.update_stats(ctx.user_id, &stats).await?;

        info!(
            user_id = %ctx.user_id,
            reading_id = %reading.id,
            parameter = %reading.parameter,
            streak = stats.streak,
            "Reading submitted"
        );

        Ok(reading)
    }

    /// Lists the current user's readings, newest first.
    pub async fn list_own(&self, ctx: &RequestContext) -> Result<Vec<Reading>, AppError> {
        self.reading_repo.find_by_user(ctx.user_id).await
    }

    /// Lists all readings for the admin surface.
    pub async fn list_all(&self, page: PageRequest) -> Result<PageResponse<Reading>, AppError> {
        self.reading_repo.find_all(&page).await
    }

    /// Gets a single reading. Owners can always see their own;
    /// moderators and admins can see anyone's.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<Reading, AppError> {
        let reading = self
            .reading_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Reading {id} not found")))?;

        if reading.user_id != ctx.user_id && !ctx.is_moderator_or_above() {
            return Err(AppError::forbidden("Not your reading"));
        }

        Ok(reading)
    }

    /// Deletes a reading. Owners and admins only.
    ///
    /// Readings act as an audit log of submissions: the owner's
    /// cumulative stats are NOT recomputed on delete.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        let reading = self
            .reading_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Reading {id} not found")))?;

        if reading.user_id != ctx.user_id && !ctx.is_admin() {
            return Err(AppError::forbidden("Not your reading"));
        }

        let deleted = self.reading_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("Reading {id} not found")));
        }

        info!(user_id = %ctx.user_id, reading_id = %id, "Reading deleted");
        Ok(())
    }
}
