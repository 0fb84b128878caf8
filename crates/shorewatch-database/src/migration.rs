//! sqlx migration runner.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use shorewatch_core::error::{AppError, ErrorKind};
use shorewatch_core::result::AppResult;

/// Migrations embedded from the workspace `migrations/` directory.
static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Apply every pending migration.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, format!("Migration failed: {e}"), e)
    })?;

    info!(known = MIGRATOR.migrations.len(), "Migrations up to date");
    Ok(())
}
