//! User management commands — operate directly on the datastore.

use clap::{Args, Subcommand};
use tabled::{Table, Tabled};
use uuid::Uuid;

use shorewatch_auth::password::{PasswordHasher, PasswordValidator};
use shorewatch_core::error::AppError;
use shorewatch_core::types::pagination::PageRequest;
use shorewatch_database::repositories::user::UserRepository;
use shorewatch_entity::user::{CreateUser, UpdateUser, User, UserProfile, UserRole, UserStatus};

use crate::output::{self, OutputFormat};

/// Arguments for the user command
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List registered users
    List {
        /// Page number
        #[arg(long, default_value = "1")]
        page: u64,
    },
    /// Create a user
    Create {
        /// Full display name
        #[arg(long)]
        name: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Username
        #[arg(long)]
        username: String,
        /// Password (prompted interactively when omitted)
        #[arg(long)]
        password: Option<String>,
        /// Role: citizen, moderator, admin
        #[arg(long, default_value = "citizen")]
        role: String,
    },
    /// Change a user's role
    Role {
        /// User ID
        id: Uuid,
        /// New role: citizen, moderator, admin
        role: String,
    },
    /// Change a user's status
    Status {
        /// User ID
        id: Uuid,
        /// New status: active, inactive, suspended
        status: String,
    },
    /// Delete a user
    Delete {
        /// User ID
        id: Uuid,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Table row for user listings.
#[derive(Tabled)]
struct UserRow {
    /// User ID
    id: Uuid,
    /// Username
    username: String,
    /// Email
    email: String,
    /// Role
    role: String,
    /// Status
    status: String,
    /// Total readings
    readings: i64,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role.to_string(),
            status: user.status.to_string(),
            readings: user.stats.0.total_readings,
        }
    }
}

/// Execute user commands
pub async fn execute(args: &UserArgs, env: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(env)?;
    let pool = super::create_db_pool(&config).await?;
    let repo = UserRepository::new(pool);

    match &args.command {
        UserCommand::List { page } => {
            let result = repo.find_all(&PageRequest::new(*page, 50)).await?;
            match format {
                OutputFormat::Table => {
                    let rows: Vec<UserRow> = result.items.iter().map(UserRow::from).collect();
                    println!("{}", Table::new(rows));
                    println!(
                        "Page {}/{} ({} users total)",
                        result.page, result.total_pages, result.total_items
                    );
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&result.items)?);
                }
            }
        }
        UserCommand::Create {
            name,
            email,
            username,
            password,
            role,
        } => {
            let role: UserRole = role.parse()?;
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            PasswordValidator::new(&config.auth).validate(&password)?;
            let password_hash = PasswordHasher::new().hash_password(&password)?;

            let user = repo
                .create(&CreateUser {
                    name: name.clone(),
                    email: email.clone(),
                    username: username.clone(),
                    password_hash,
                    role,
                    team: None,
                    profile: UserProfile::default(),
                })
                .await?;

            output::print_success(&format!("Created user {} ({})", user.username, user.id));
        }
        UserCommand::Role { id, role } => {
            let role: UserRole = role.parse()?;
            let user = repo
                .update(
                    *id,
                    &UpdateUser {
                        role: Some(role),
                        ..Default::default()
                    },
                )
                .await?;
            output::print_success(&format!("{} is now {}", user.username, user.role));
        }
        UserCommand::Status { id, status } => {
            let status: UserStatus = status.parse()?;
            let user = repo
                .update(
                    *id,
                    &UpdateUser {
                        status: Some(status),
                        ..Default::default()
                    },
                )
                .await?;
            output::print_success(&format!("{} is now {}", user.username, user.status));
        }
        UserCommand::Delete { id, force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!("Delete user {id}? This cannot be undone."))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            let deleted = repo.delete(*id).await?;
            if !deleted {
                return Err(AppError::not_found(format!("User {id} not found")));
            }
            output::print_success("User deleted.");
        }
    }

    Ok(())
}
