//! Password policy enforcement for new passwords.

use shorewatch_core::config::AuthConfig;
use shorewatch_core::error::AppError;

/// Validates password strength against the configured policy.
///
/// The policy is deliberately modest — a length floor — because the
/// audience is citizen volunteers, not enterprise operators.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password against the policy.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        if password.trim().is_empty() {
            return Err(AppError::validation("Password cannot be blank"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> PasswordValidator {
        PasswordValidator::new(&AuthConfig {
            jwt_secret: "s".into(),
            token_ttl_hours: 24,
            password_min_length: 8,
        })
    }

    #[test]
    fn test_minimum_length() {
        let v = validator();
        assert!(v.validate("pw123456").is_ok());
        assert!(v.validate("short").is_err());
    }

    #[test]
    fn test_blank_rejected() {
        let v = validator();
        assert!(v.validate("        ").is_err());
    }
}
