//! Route definitions for the Shorewatch HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use std::time::Duration;

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(public_routes())
        .merge(reading_routes())
        .merge(notification_routes())
        .merge(admin_routes())
        .route("/health", get(handlers::health::health_check));

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);
    let timeout = TimeoutLayer::new(Duration::from_secs(
        state.config.server.request_timeout_seconds,
    ));

    Router::new()
        .nest("/api", api_routes)
        .route("/health", get(handlers::health::health_check))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(timeout)
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: register, login, profile
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/profile", get(handlers::auth::profile))
}

/// Public content endpoints (no token required)
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/user/faqs", get(handlers::faq::list_faqs))
        .route("/user/faqs/{id}", get(handlers::faq::view_faq))
        .route("/user/updates", get(handlers::update::list_updates))
}

/// Reading submission and retrieval (authenticated)
fn reading_routes() -> Router<AppState> {
    Router::new()
        .route("/readings", post(handlers::reading::submit_reading))
        .route("/readings", get(handlers::reading::list_readings))
        .route("/readings/{id}", get(handlers::reading::get_reading))
        .route("/readings/{id}", delete(handlers::reading::delete_reading))
}

/// Notification endpoints (authenticated)
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/notifications/unread-count",
            get(handlers::notification::unread_count),
        )
        .route(
            "/notifications/{id}/read",
            put(handlers::notification::mark_read),
        )
        .route(
            "/notifications/read-all",
            put(handlers::notification::mark_all_read),
        )
}

/// Admin-only endpoints
fn admin_routes() -> Router<AppState> {
    Router::new()
        // User management
        .route("/admin/users", get(handlers::admin::users::list_users))
        .route("/admin/users", post(handlers::admin::users::create_user))
        .route("/admin/users/{id}", get(handlers::admin::users::get_user))
        .route(
            "/admin/users/{id}",
            put(handlers::admin::users::update_user),
        )
        .route(
            "/admin/users/{id}",
            delete(handlers::admin::users::delete_user),
        )
        // FAQ management
        .route("/admin/faqs", get(handlers::admin::faqs::list_faqs))
        .route("/admin/faqs", post(handlers::admin::faqs::create_faq))
        .route("/admin/faqs/{id}", get(handlers::admin::faqs::get_faq))
        .route("/admin/faqs/{id}", put(handlers::admin::faqs::update_faq))
        .route(
            "/admin/faqs/{id}",
            delete(handlers::admin::faqs::delete_faq),
        )
        // Update management
        .route(
            "/admin/updates",
            get(handlers::admin::updates::list_updates),
        )
        .route(
            "/admin/updates",
            post(handlers::admin::updates::create_update),
        )
        .route(
            "/admin/updates/{id}",
            get(handlers::admin::updates::get_update),
        )
        .route(
            "/admin/updates/{id}",
            put(handlers::admin::updates::update_update),
        )
        .route(
            "/admin/updates/{id}",
            delete(handlers::admin::updates::delete_update),
        )
        // Reading oversight
        .route(
            "/admin/readings",
            get(handlers::admin::readings::list_readings),
        )
        .route(
            "/admin/readings/{id}",
            get(handlers::admin::readings::get_reading),
        )
        .route(
            "/admin/readings/{id}",
            delete(handlers::admin::readings::delete_reading),
        )
        // System stats
        .route("/admin/stats", get(handlers::admin::stats::system_stats))
}
