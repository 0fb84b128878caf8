//! CLI command definitions and dispatch.

pub mod migrate;
pub mod serve;
pub mod sync;
pub mod user;

use clap::{Parser, Subcommand};
use sqlx::PgPool;

use crate::output::OutputFormat;
use shorewatch_core::config::AppConfig;
use shorewatch_core::error::AppError;

/// Shorewatch — Citizen-Science Coastal Monitoring Platform
#[derive(Debug, Parser)]
#[command(name = "shorewatch", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (reads config/<env>.toml overlays)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the Shorewatch server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// User management
    User(user::UserArgs),
    /// Client sync store operations against a running server
    Sync(sync::SyncArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.env).await,
            Commands::Migrate(args) => migrate::execute(args, &self.env).await,
            Commands::User(args) => user::execute(args, &self.env, self.format).await,
            Commands::Sync(args) => sync::execute(args, &self.env, self.format).await,
        }
    }
}

/// Helper: load configuration for the given environment.
pub(crate) fn load_config(env: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(env)
}

/// Helper: connect a database pool from configuration.
pub(crate) async fn create_db_pool(config: &AppConfig) -> Result<PgPool, AppError> {
    let db = shorewatch_database::DatabasePool::connect(&config.database).await?;
    Ok(db.into_pool())
}
