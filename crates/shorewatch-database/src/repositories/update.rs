//! Update (announcement) repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use shorewatch_core::error::{AppError, ErrorKind};
use shorewatch_core::result::AppResult;
use shorewatch_entity::update::{CreateUpdate, Update, UpdateChanges};

/// Repository for update CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UpdateRepository {
    pool: PgPool,
}

impl UpdateRepository {
    /// Create a new update repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an update by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Update>> {
        sqlx::query_as::<_, Update>("SELECT * FROM updates WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find update by id", e)
            })
    }

    /// List every update, newest first. Admin view: includes drafts and
    /// expired records.
    pub async fn find_all(&self) -> AppResult<Vec<Update>> {
        sqlx::query_as::<_, Update>("SELECT * FROM updates ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list updates", e))
    }

    /// List updates visible to end users, newest first.
    ///
    /// Drafts are excluded; scheduled records appear once their date has
    /// passed; auto-expiring records disappear after their expiration
    /// date even while still stored as published.
    pub async fn find_visible(&self) -> AppResult<Vec<Update>> {
        sqlx::query_as::<_, Update>(
            "SELECT * FROM updates \
             WHERE (status = 'published' \
                    OR (status = 'scheduled' AND scheduled_date IS NOT NULL \
                        AND scheduled_date <= NOW())) \
               AND (NOT auto_expire OR expiration_date IS NULL OR expiration_date >= NOW()) \
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list visible updates", e)
        })
    }

    /// Create a new update.
    pub async fn create(&self, data: &CreateUpdate) -> AppResult<Update> {
        sqlx::query_as::<_, Update>(
            "INSERT INTO updates (title, content, kind, priority, tags, scheduled_date, \
                                  expiration_date, auto_expire, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.kind)
        .bind(data.priority)
        .bind(&data.tags)
        .bind(data.scheduled_date)
        .bind(data.expiration_date)
        .bind(data.auto_expire)
        .bind(data.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create update", e))
    }

    /// Merge a partial update into an announcement.
    ///
    /// `None` fields keep their stored values; a stale
    /// `expected_updated_at` yields a conflict.
    pub async fn update(&self, id: Uuid, data: &UpdateChanges) -> AppResult<Update> {
        let updated = sqlx::query_as::<_, Update>(
            "UPDATE updates SET title = COALESCE($2, title), \
                                content = COALESCE($3, content), \
                                kind = COALESCE($4, kind), \
                                priority = COALESCE($5, priority), \
                                tags = COALESCE($6, tags), \
                                scheduled_date = COALESCE($7, scheduled_date), \
                                expiration_date = COALESCE($8, expiration_date), \
                                auto_expire = COALESCE($9, auto_expire), \
                                status = COALESCE($10, status), \
                                updated_at = NOW() \
             WHERE id = $1 AND ($11::timestamptz IS NULL OR updated_at = $11) \
             RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.kind)
        .bind(data.priority)
        .bind(&data.tags)
        .bind(data.scheduled_date)
        .bind(data.expiration_date)
        .bind(data.auto_expire)
        .bind(data.status)
        .bind(data.expected_updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update announcement", e))?;

        match updated {
            Some(update) => Ok(update),
            None => {
                if self.find_by_id(id).await?.is_some() {
                    Err(AppError::conflict(
                        "Update was modified concurrently; reload and retry",
                    ))
                } else {
                    Err(AppError::not_found(format!("Update {id} not found")))
                }
            }
        }
    }

    /// Delete an update by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM updates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete update", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Count total updates.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM updates")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count updates", e))?;
        Ok(count as u64)
    }
}
