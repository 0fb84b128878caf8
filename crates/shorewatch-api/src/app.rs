//! Application builder — wires repositories, services, and state into a
//! running Axum server.

use std::sync::Arc;
use std::time::Instant;

use sqlx::PgPool;

use shorewatch_core::config::AppConfig;
use shorewatch_core::error::AppError;

use shorewatch_auth::jwt::decoder::JwtDecoder;
use shorewatch_auth::jwt::encoder::JwtEncoder;
use shorewatch_auth::password::{PasswordHasher, PasswordValidator};

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

use crate::router::build_router;
use crate::state::AppState;

/// Construct the full application state from a config and a pool.
///
/// Shared by the server binary and the integration test harness so both
/// wire dependencies identically.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    // ── Repositories ─────────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let faq_repo = Arc::new(FaqRepository::new(db_pool.clone()));
    let update_repo = Arc::new(UpdateRepository::new(db_pool.clone()));
    let reading_repo = Arc::new(ReadingRepository::new(db_pool.clone()));
    let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));

    // ── Auth primitives ──────────────────────────────────────
    let password_hasher = Arc::new(PasswordHasher::new());
    let password_validator = Arc::new(PasswordValidator::new(&config.auth));
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    // ── Services ─────────────────────────────────────────────
    let notification_service = Arc::new(NotificationService::new(Arc::clone(&notification_repo)));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
        Arc::clone(&jwt_encoder),
    ));
    let admin_user_service = Arc::new(AdminUserService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&password_validator),
        Arc::clone(&notification_service),
    ));
    let faq_service = Arc::new(FaqService::new(
        Arc::clone(&faq_repo),
        Arc::clone(&notification_service),
    ));
    let update_service = Arc::new(UpdateService::new(
        Arc::clone(&update_repo),
        Arc::clone(&notification_service),
    ));
    let reading_service = Arc::new(ReadingService::new(
        Arc::clone(&reading_repo),
        Arc::clone(&user_repo),
    ));
    let stats_service = Arc::new(StatsService::new(
        Arc::clone(&user_repo),
        Arc::clone(&faq_repo),
        Arc::clone(&update_repo),
        Arc::clone(&reading_repo),
        Arc::clone(&notification_repo),
    ));

    AppState {
        config: Arc::new(config),
        started_at: Instant::now(),
        db_pool,
        jwt_encoder,
        jwt_decoder,
        user_repo,
        faq_repo,
        update_repo,
        reading_repo,
        notification_repo,
        auth_service,
        admin_user_service,
        faq_service,
        update_service,
        reading_service,
        notification_service,
        stats_service,
    }
}

/// Runs the Shorewatch server with the given configuration and pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let state = build_state(config, db_pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Shorewatch server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install Ctrl+C handler");
    }
    tracing::info!("Shutdown signal received");
}
