//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Controls the tracing subscriber the binaries install at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level filter when `RUST_LOG` is unset: `"trace"`,
    /// `"debug"`, `"info"`, `"warn"`, or `"error"`.
    #[serde(default = "default_level")]
    pub level: String,
    /// Output format: `"pretty"` for terminals, `"json"` for log
    /// collectors.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}
