//! Registration, login, and profile retrieval.

use std::sync::Arc;

use tracing::info;

use shorewatch_auth::jwt::encoder::{IssuedToken, JwtEncoder};
use shorewatch_auth::password::{PasswordHasher, PasswordValidator};
use shorewatch_core::error::AppError;
use shorewatch_database::repositories::user::UserRepository;
use shorewatch_entity::user::{CreateUser, User, UserProfile, UserRole};

use crate::context::RequestContext;

/// Error message shared by every failed login path. Unknown email, wrong
/// password, and disabled accounts all look identical to the caller so
/// account existence cannot be probed.
const LOGIN_FAILED: &str = "Invalid email or password";

/// Handles registration, login, and the current user's profile.
#[derive(Debug, Clone)]
pub struct AuthService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    validator: Arc<PasswordValidator>,
    /// Token encoder.
    jwt_encoder: Arc<JwtEncoder>,
}

/// Data for self-registration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RegisterRequest {
    /// Full display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Desired username.
    pub username: String,
    /// Plaintext password (hashed before storage).
    pub password: String,
    /// Monitoring team (optional).
    #[serde(default)]
    pub team: Option<String>,
}

/// A successful registration or login.
#[derive(Debug, Clone)]
pub struct AuthOutcome {
    /// The authenticated user.
    pub user: User,
    /// The issued bearer token.
    pub token: IssuedToken,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        jwt_encoder: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            jwt_encoder,
        }
    }

    /// Registers a new citizen account and returns a signed token.
    ///
    /// Self-registration always produces a citizen; elevated roles are
    /// granted only through the admin surface.
    pub async fn register(&self, req: RegisterRequest) -> Result<AuthOutcome, AppError> {
        let name = req.name.trim();
        let email = req.email.trim();
        let username = req.username.trim();

        if name.is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        if !email.contains('@') || !email.contains('.') {
            return Err(AppError::validation("Invalid email format"));
        }
        if username.is_empty() {
            return Err(AppError::validation("Username is required"));
        }
        self.validator.validate(&req.password)?;

        if self.user_repo.find_by_email(email).await?.is_some() {
            return Err(AppError::conflict("Email already in use"));
        }
        if self.user_repo.find_by_username(username).await?.is_some() {
            return Err(AppError::conflict(format!(
                "Username '{username}' already exists"
            )));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                name: name.to_string(),
                email: email.to_string(),
                username: username.to_string(),
                password_hash,
                role: UserRole::Citizen,
                team: req.team,
                profile: UserProfile::default(),
            })
            .await?;

        let token = self
            .jwt_encoder
            .generate_token(user.id, user.role, &user.username)?;

        info!(user_id = %user.id, username = %user.username, "User registered");

        Ok(AuthOutcome { user, token })
    }

    /// Authenticates by email and password, returning a signed token.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthOutcome, AppError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized(LOGIN_FAILED))?;

        let matches = self.hasher.verify_password(password, &user.password_hash)?;
        if !matches {
            return Err(AppError::unauthorized(LOGIN_FAILED));
        }

        if !user.can_login() {
            return Err(AppError::unauthorized(LOGIN_FAILED));
        }

        self.user_repo.touch_last_active(user.id).await?;

        let token = self
            .jwt_encoder
            .generate_token(user.id, user.role, &user.username)?;

        info!(user_id = %user.id, "User logged in");

        Ok(AuthOutcome { user, token })
    }

    /// Gets the current user's full profile.
    pub async fn profile(&self, ctx: &RequestContext) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(ctx.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}
