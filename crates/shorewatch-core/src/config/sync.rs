//! Client sync store configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the client-side sync store and CLI sync commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Base URL of the Shorewatch API the store syncs against.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds for sync calls.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
    /// Whether to fall back to the built-in demo dataset when the
    /// backend is unreachable.
    #[serde(default = "default_true")]
    pub fallback_to_fixtures: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_seconds: default_request_timeout(),
            fallback_to_fixtures: default_true(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_true() -> bool {
    true
}
