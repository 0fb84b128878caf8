//! Request DTOs.
//!
//! Entity create/update payloads deserialize directly into the typed
//! models from `shorewatch-entity`; only auth carries separate shapes.

use serde::{Deserialize, Serialize};

/// POST /api/auth/register body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Full display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Desired username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
    /// Monitoring team (optional).
    #[serde(default)]
    pub team: Option<String>,
}

/// POST /api/auth/login body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Email address.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}
