//! Client sync store operations against a running server.

use std::sync::Arc;

use clap::{Args, Subcommand};

use shorewatch_client::{FixtureSource, RemoteSource, SyncStore};
use shorewatch_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for the sync command
#[derive(Debug, Args)]
pub struct SyncArgs {
    /// Override the API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Bearer token for authenticated collections (users, notifications)
    #[arg(long)]
    pub token: Option<String>,

    /// Sync subcommand
    #[command(subcommand)]
    pub command: SyncCommand,
}

/// Sync subcommands
#[derive(Debug, Subcommand)]
pub enum SyncCommand {
    /// Load all collections and print the derived stats
    Status,
    /// Load all collections and write the cache snapshot to a file
    Export {
        /// Output file path
        #[arg(short, long, default_value = "shorewatch-export.json")]
        output: String,
    },
}

/// Execute sync commands
pub async fn execute(args: &SyncArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let mut config = super::load_config(env)?;
    if let Some(ref base_url) = args.base_url {
        config.sync.base_url = base_url.clone();
    }

    let mut remote = RemoteSource::new(&config.sync)?;
    if let Some(ref token) = args.token {
        remote = remote.with_token(token.clone());
    }

    let store = if config.sync.fallback_to_fixtures {
        SyncStore::with_fallback(Arc::new(remote), Arc::new(FixtureSource::new()))
    } else {
        SyncStore::new(Arc::new(remote))
    };

    match &args.command {
        SyncCommand::Status => {
            let stats = store.force_sync().await?;
            if store.is_degraded().await {
                println!("(degraded mode — showing built-in demo data)");
            }
            match format {
                OutputFormat::Table => {
                    println!("Users:         {} ({} active)", stats.total_users, stats.active_users);
                    println!("FAQs:          {}", stats.total_faqs);
                    println!("Updates:       {}", stats.total_updates);
                    println!("Notifications: {}", stats.total_notifications);
                    if let Some(last_sync) = store.last_sync().await {
                        println!("Last sync:     {last_sync}");
                    }
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&stats)?);
                }
            }
        }
        SyncCommand::Export { output } => {
            store.force_sync().await?;
            let snapshot = store.export_all().await?;
            std::fs::write(output, snapshot)
                .map_err(|e| AppError::internal(format!("Failed to write {output}: {e}")))?;
            output::print_success(&format!("Cache exported to {output}"));
        }
    }

    Ok(())
}
