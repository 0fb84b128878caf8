//! User repository implementation.

use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use shorewatch_core::error::{AppError, ErrorKind};
use shorewatch_core::result::AppResult;
use shorewatch_core::types::pagination::{PageRequest, PageResponse};
use shorewatch_entity::user::{CreateUser, UpdateUser, User, UserStats, UserStatus};

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Find a user by username (case-insensitive).
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(username) = LOWER($1)")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
            })
    }

    /// List all users, newest first, with pagination.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<User>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))?;

        let users = sqlx::query_as::<_, User>(
            "SELECT * FROM users ORDER BY created_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))?;

        Ok(PageResponse::new(
            users,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new user.
    pub async fn create(&self, data: &CreateUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (name, email, username, password_hash, role, team, profile, stats) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.username)
        .bind(&data.password_hash)
        .bind(data.role)
        .bind(&data.team)
        .bind(Json(&data.profile))
        .bind(Json(UserStats::default()))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("Email already in use")
            }
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("users_username_key") =>
            {
                AppError::conflict(format!("Username '{}' already exists", data.username))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create user", e),
        })
    }

    /// Merge a partial update into a user.
    ///
    /// `None` fields keep their stored values. When `expected_updated_at`
    /// is present the write is conditional; a stale timestamp yields a
    /// conflict instead of silently overwriting someone else's edit.
    pub async fn update(&self, id: Uuid, data: &UpdateUser) -> AppResult<User> {
        let updated = sqlx::query_as::<_, User>(
            "UPDATE users SET name = COALESCE($2, name), \
                              email = COALESCE($3, email), \
                              role = COALESCE($4, role), \
                              team = COALESCE($5, team), \
                              status = COALESCE($6, status), \
                              profile = COALESCE($7, profile), \
                              updated_at = NOW() \
             WHERE id = $1 AND ($8::timestamptz IS NULL OR updated_at = $8) \
             RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(data.role)
        .bind(&data.team)
        .bind(data.status)
        .bind(data.profile.as_ref().map(Json))
        .bind(data.expected_updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("users_email_key") => {
                AppError::conflict("Email already in use")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update user", e),
        })?;

        match updated {
            Some(user) => Ok(user),
            None => {
                if self.find_by_id(id).await?.is_some() {
                    Err(AppError::conflict(
                        "User was modified concurrently; reload and retry",
                    ))
                } else {
                    Err(AppError::not_found(format!("User {id} not found")))
                }
            }
        }
    }

    /// Replace a user's contribution stats.
    pub async fn update_stats(&self, id: Uuid, stats: &UserStats) -> AppResult<()> {
        let result = sqlx::query("UPDATE users SET stats = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(Json(stats))
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update user stats", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("User {id} not found")));
        }
        Ok(())
    }

    /// Update the last-active timestamp.
    pub async fn touch_last_active(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("UPDATE users SET last_active = NOW() WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update last active", e)
            })?;
        Ok(())
    }

    /// Delete a user by ID.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Count total users.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))?;
        Ok(count as u64)
    }

    /// Count users with a given status.
    pub async fn count_by_status(&self, status: UserStatus) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count users by status", e)
            })?;
        Ok(count as u64)
    }
}
