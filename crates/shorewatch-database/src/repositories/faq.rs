//! FAQ repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use shorewatch_core::error::{AppError, ErrorKind};
use shorewatch_core::result::AppResult;
use shorewatch_entity::faq::{CreateFaq, Faq, FaqStatus, UpdateFaq};

/// Repository for FAQ CRUD and query operations.
#[derive(Debug, Clone)]
pub struct FaqRepository {
    pool: PgPool,
}

impl FaqRepository {
    /// Create a new FAQ repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a FAQ by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Faq>> {
        sqlx::query_as::<_, Faq>("SELECT * FROM faqs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find FAQ by id", e))
    }

    /// List every FAQ ordered by category and explicit display order.
    pub async fn find_all(&self) -> AppResult<Vec<Faq>> {
        sqlx::query_as::<_, Faq>("SELECT * FROM faqs ORDER BY category ASC, display_order ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list FAQs", e))
    }

    /// List active FAQs for user-facing reads, same ordering.
    pub async fn find_active(&self) -> AppResult<Vec<Faq>> {
        sqlx::query_as::<_, Faq>(
            "SELECT * FROM faqs WHERE status = 'active' \
             ORDER BY category ASC, display_order ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list active FAQs", e))
    }

    /// Create a new FAQ entry.
    pub async fn create(&self, data: &CreateFaq) -> AppResult<Faq> {
        sqlx::query_as::<_, Faq>(
            "INSERT INTO faqs (category, subcategory, question, answer, priority, importance, \
                               tags, display_order) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(&data.category)
        .bind(&data.subcategory)
        .bind(&data.question)
        .bind(&data.answer)
        .bind(data.priority)
        .bind(data.importance)
        .bind(&data.tags)
        .bind(data.display_order)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create FAQ", e))
    }

    /// Merge a partial update into a FAQ.
    ///
    /// `None` fields keep their stored values; a stale
    /// `expected_updated_at` yields a conflict.
    pub async fn update(&self, id: Uuid, data: &UpdateFaq) -> AppResult<Faq> {
        let updated = sqlx::query_as::<_, Faq>(
            "UPDATE faqs SET category = COALESCE($2, category), \
                             subcategory = COALESCE($3, subcategory), \
                             question = COALESCE($4, question), \
                             answer = COALESCE($5, answer), \
                             priority = COALESCE($6, priority), \
                             importance = COALESCE($7, importance), \
                             tags = COALESCE($8, tags), \
                             display_order = COALESCE($9, display_order), \
                             status = COALESCE($10, status), \
                             updated_at = NOW() \
             WHERE id = $1 AND ($11::timestamptz IS NULL OR updated_at = $11) \
             RETURNING *",
        )
        .bind(id)
        .bind(&data.category)
        .bind(&data.subcategory)
        .bind(&data.question)
        .bind(&data.answer)
        .bind(data.priority)
        .bind(data.importance)
        .bind(&data.tags)
        .bind(data.display_order)
        .bind(data.status)
        .bind(data.expected_updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update FAQ", e))?;

        match updated {
            Some(faq) => Ok(faq),
            None => {
                if self.find_by_id(id).await?.is_some() {
                    Err(AppError::conflict(
                        "FAQ was modified concurrently; reload and retry",
                    ))
                } else {
                    Err(AppError::not_found(format!("FAQ {id} not found")))
                }
            }
        }
    }

    /// Atomically increment the view counter and return the fresh row.
    pub async fn increment_view_count(&self, id: Uuid) -> AppResult<Option<Faq>> {
        sqlx::query_as::<_, Faq>(
            "UPDATE faqs SET view_count = view_count + 1 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to increment view count", e))
    }

    /// Delete a FAQ by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM faqs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete FAQ", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Count total FAQs.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM faqs")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count FAQs", e))?;
        Ok(count as u64)
    }

    /// Count FAQs with a given status.
    pub async fn count_by_status(&self, status: FaqStatus) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM faqs WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count FAQs by status", e)
            })?;
        Ok(count as u64)
    }
}
