//! Reading repository implementation.

use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use chrono::{DateTime, Utc};

use shorewatch_core::error::{AppError, ErrorKind};
use shorewatch_core::result::AppResult;
use shorewatch_core::types::pagination::{PageRequest, PageResponse};
use shorewatch_entity::reading::{GeoPoint, Parameter, Reading};

/// Repository for water-quality reading operations.
#[derive(Debug, Clone)]
pub struct ReadingRepository {
    pool: PgPool,
}

/// Fully-resolved insert payload for a reading. The service layer fills
/// in defaults (unit, timestamp) before this reaches the database.
#[derive(Debug, Clone)]
pub struct InsertReading {
    /// The submitting user.
    pub user_id: Uuid,
    /// What was measured.
    pub parameter: Parameter,
    /// The measured value.
    pub value: f64,
    /// Unit the value is reported in.
    pub unit: String,
    /// Where the sample was taken.
    pub location: GeoPoint,
    /// When the sample was taken.
    pub timestamp: DateTime<Utc>,
    /// Self-reported measurement confidence (0-100).
    pub accuracy: i32,
    /// Free-form observations.
    pub notes: Option<String>,
}

impl ReadingRepository {
    /// Create a new reading repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a reading by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Reading>> {
        sqlx::query_as::<_, Reading>("SELECT * FROM readings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find reading by id", e)
            })
    }

    /// List a user's readings, newest first.
    pub async fn find_by_user(&self, user_id: Uuid) -> AppResult<Vec<Reading>> {
        sqlx::query_as::<_, Reading>(
            "SELECT * FROM readings WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list readings", e))
    }

    /// List all readings, newest first, with pagination.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Reading>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM readings")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count readings", e)
            })?;

        let readings = sqlx::query_as::<_, Reading>(
            "SELECT * FROM readings ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list readings", e))?;

        Ok(PageResponse::new(
            readings,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Insert a new reading.
    pub async fn create(&self, data: &InsertReading) -> AppResult<Reading> {
        sqlx::query_as::<_, Reading>(
            "INSERT INTO readings (user_id, parameter, value, unit, location, timestamp, \
                                   accuracy, notes) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.parameter)
        .bind(data.value)
        .bind(&data.unit)
        .bind(Json(&data.location))
        .bind(data.timestamp)
        .bind(data.accuracy)
        .bind(&data.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create reading", e))
    }

    /// Delete a reading by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM readings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete reading", e)
            })?;

        Ok(result.rows_affected() > 0)
    }

    /// Count total readings.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM readings")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count readings", e)
            })?;
        Ok(count as u64)
    }
}
