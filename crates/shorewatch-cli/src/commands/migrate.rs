//! Database migration commands.

use clap::{Args, Subcommand};

use crate::output;
use shorewatch_core::error::AppError;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Apply pending migrations
    Run,
    /// Drop the public schema and rebuild it from scratch
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, env: &str) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::create_db_pool(&config).await?;

    match &args.command {
        MigrateCommand::Run => {
            shorewatch_database::migration::run_migrations(&pool).await?;
            output::print_success("Migrations applied.");
        }
        MigrateCommand::Reset { force } => {
            if !force && !confirm_reset()? {
                println!("Cancelled.");
                return Ok(());
            }

            sqlx::raw_sql("DROP SCHEMA public CASCADE; CREATE SCHEMA public;")
                .execute(&pool)
                .await
                .map_err(|e| AppError::database(format!("Schema reset failed: {e}")))?;
            shorewatch_database::migration::run_migrations(&pool).await?;
            output::print_success("Database reset and rebuilt.");
        }
    }

    Ok(())
}

fn confirm_reset() -> Result<bool, AppError> {
    dialoguer::Confirm::new()
        .with_prompt("Drop every table and rebuild the schema?")
        .default(false)
        .interact()
        .map_err(|e| AppError::internal(format!("Prompt failed: {e}")))
}
