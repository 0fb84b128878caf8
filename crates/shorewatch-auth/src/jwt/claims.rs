//! Claims carried inside every Shorewatch bearer token.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shorewatch_entity::user::UserRole;

/// Payload signed into each token.
///
/// The token is the only session state there is, so everything a request
/// needs to establish identity travels here: the user id, the role for
/// authorization checks, and the username for log lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user id.
    pub sub: Uuid,
    /// Role captured at issuance. Role changes take effect at the next
    /// login.
    pub role: UserRole,
    /// Username, for logging and display.
    pub username: String,
    /// Issued-at, seconds since epoch.
    pub iat: i64,
    /// Expiry, seconds since epoch.
    pub exp: i64,
}

impl Claims {
    /// The user id this token authenticates.
    pub fn user_id(&self) -> Uuid {
        self.sub
    }

    /// Whether the expiry has passed.
    pub fn is_expired(&self) -> bool {
        self.exp <= Utc::now().timestamp()
    }
}
