//! Admin user management — CRUD over accounts.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use shorewatch_auth::password::{PasswordHasher, PasswordValidator};
use shorewatch_core::error::AppError;
use shorewatch_core::types::pagination::{PageRequest, PageResponse};
use shorewatch_database::repositories::user::UserRepository;
use shorewatch_entity::notification::NotificationKind;
use shorewatch_entity::user::{CreateUser, UpdateUser, User, UserProfile, UserRole};

use crate::context::RequestContext;
use crate::notification::NotificationService;

/// Handles admin-side user management.
#[derive(Debug, Clone)]
pub struct AdminUserService {
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Password policy validator.
    validator: Arc<PasswordValidator>,
    /// Notification emission.
    notifications: Arc<NotificationService>,
}

/// Data for an admin creating a user directly.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AdminCreateUser {
    /// Full display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Desired username.
    pub username: String,
    /// Plaintext password (hashed before storage).
    pub password: String,
    /// Assigned role (defaults to citizen).
    #[serde(default)]
    pub role: UserRole,
    /// Monitoring team (optional).
    #[serde(default)]
    pub team: Option<String>,
}

impl AdminUserService {
    /// Creates a new admin user service.
    pub fn new(
        user_repo: Arc<UserRepository>,
        hasher: Arc<PasswordHasher>,
        validator: Arc<PasswordValidator>,
        notifications: Arc<NotificationService>,
    ) -> Self {
        Self {
            user_repo,
            hasher,
            validator,
            notifications,
        }
    }

    /// Lists users, newest first.
    pub async fn list(&self, page: PageRequest) -> Result<PageResponse<User>, AppError> {
        self.user_repo.find_all(&page).await
    }

    /// Gets a single user.
    pub async fn get(&self, id: Uuid) -> Result<User, AppError> {
        self.user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    /// Creates a user with an explicit role.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: AdminCreateUser,
    ) -> Result<User, AppError> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Name is required"));
        }
        if !req.email.contains('@') || !req.email.contains('.') {
            return Err(AppError::validation("Invalid email format"));
        }
        if req.username.trim().is_empty() {
            return Err(AppError::validation("Username is required"));
        }
        self.validator.validate(&req.password)?;

        if self.user_repo.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::conflict("Email already in use"));
        }
        if self
            .user_repo
            .find_by_username(&req.username)
            .await?
            .is_some()
        {
            return Err(AppError::conflict(format!(
                "Username '{}' already exists",
                req.username
            )));
        }

        let password_hash = self.hasher.hash_password(&req.password)?;

        let user = self
            .user_repo
            .create(&CreateUser {
                name: req.name.trim().to_string(),
                email: req.email.trim().to_string(),
                username: req.username.trim().to_string(),
                password_hash,
                role: req.role,
                team: req.team,
                profile: UserProfile::default(),
            })
            .await?;

        info!(admin = %ctx.user_id, user_id = %user.id, "Admin created user");

        self.notifications
            .emit(
                Some(user.id),
                NotificationKind::AccountChanged,
                "Welcome to Shorewatch",
                &format!("Your account '{}' was created", user.username),
            )
            .await?;

        Ok(user)
    }

    /// Merges a partial update into a user account.
    ///
    /// Contribution stats are not part of the payload; they only change
    /// through reading submission.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: Uuid,
        changes: UpdateUser,
    ) -> Result<User, AppError> {
        if let Some(ref email) = changes.email {
            if !email.contains('@') || !email.contains('.') {
                return Err(AppError::validation("Invalid email format"));
            }
        }
        if let Some(ref name) = changes.name {
            if name.trim().is_empty() {
                return Err(AppError::validation("Name cannot be empty"));
            }
        }

        let user = self.user_repo.update(id, &changes).await?;

        info!(admin = %ctx.user_id, user_id = %user.id, "Admin updated user");

        self.notifications
            .emit(
                Some(user.id),
                NotificationKind::AccountChanged,
                "Account updated",
                "An administrator updated your account details",
            )
            .await?;

        Ok(user)
    }

    /// Hard-deletes a user.
    ///
    /// No notification is emitted: the recipient row (and its targeted
    /// notifications) disappear with the account.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        if ctx.user_id == id {
            return Err(AppError::validation("Admins cannot delete themselves"));
        }

        let deleted = self.user_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("User {id} not found")));
        }

        info!(admin = %ctx.user_id, user_id = %id, "Admin deleted user");
        Ok(())
    }
}
