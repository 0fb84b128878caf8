//! User-facing authentication and admin user management services.

pub mod admin;
pub mod auth;

pub use admin::AdminUserService;
pub use auth::AuthService;
