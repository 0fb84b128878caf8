//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use sqlx::PgPool;

use shorewatch_auth::jwt::decoder::JwtDecoder;
use shorewatch_auth::jwt::encoder::JwtEncoder;
use shorewatch_core::config::AppConfig;

use shorewatch_database::repositories::faq::FaqRepository;
use shorewatch_database::repositories::notification::NotificationRepository;
use shorewatch_database::repositories::reading::ReadingRepository;
use shorewatch_database::repositories::update::UpdateRepository;
use shorewatch_database::repositories::user::UserRepository;

use shorewatch_service::faq::FaqService;
use shorewatch_service::notification::NotificationService;
use shorewatch_service::reading::ReadingService;
use shorewatch_service::stats::StatsService;
use shorewatch_service::update::UpdateService;
use shorewatch_service::user::{AdminUserService, AuthService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Process start time, for the health endpoint's uptime
    pub started_at: Instant,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// FAQ repository
    pub faq_repo: Arc<FaqRepository>,
    /// Update repository
    pub update_repo: Arc<UpdateRepository>,
    /// Reading repository
    pub reading_repo: Arc<ReadingRepository>,
    /// Notification repository
    pub notification_repo: Arc<NotificationRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Registration/login service
    pub auth_service: Arc<AuthService>,
    /// Admin user management service
    pub admin_user_service: Arc<AdminUserService>,
    /// FAQ service
    pub faq_service: Arc<FaqService>,
    /// Update service
    pub update_service: Arc<UpdateService>,
    /// Reading service
    pub reading_service: Arc<ReadingService>,
    /// Notification service
    pub notification_service: Arc<NotificationService>,
    /// System stats service
    pub stats_service: Arc<StatsService>,
}
