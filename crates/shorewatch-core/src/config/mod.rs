//! Typed application configuration.
//!
//! Loaded from TOML via the `config` crate: `config/default.toml`, an
//! optional per-environment overlay, then `SHOREWATCH__` environment
//! variables, later sources winning. One sub-module per section.

pub mod auth;
pub mod database;
pub mod logging;
pub mod server;
pub mod sync;

use serde::{Deserialize, Serialize};

pub use self::auth::AuthConfig;
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::server::{CorsConfig, ServerConfig};
pub use self::sync::SyncConfig;

use crate::error::AppError;

/// The full configuration tree.
///
/// Every section except `database` falls back to built-in defaults, so a
/// minimal deployment only has to name its database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Authentication settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Client sync store settings.
    #[serde(default)]
    pub sync: SyncConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load the configuration for the named environment.
    ///
    /// Merge order: `config/default.toml`, then `config/<env>.toml`,
    /// then `SHOREWATCH__`-prefixed environment variables.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let sources = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("SHOREWATCH")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Could not read configuration: {e}")))?;

        sources
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Configuration is invalid: {e}")))
    }
}
