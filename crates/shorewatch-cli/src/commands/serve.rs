//! Start the Shorewatch server.

use clap::Args;

use shorewatch_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the configured bind port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the configured bind host
    #[arg(long)]
    pub host: Option<String>,

    /// Skip running migrations before accepting traffic
    #[arg(long)]
    pub skip_migrations: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, env: &str) -> Result<(), AppError> {
    let mut config = super::load_config(env)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    let pool = super::create_db_pool(&config).await?;

    if !args.skip_migrations {
        shorewatch_database::migration::run_migrations(&pool).await?;
    }

    println!(
        "Shorewatch listening on {}:{}",
        config.server.host, config.server.port
    );

    shorewatch_api::run_server(config, pool).await
}
