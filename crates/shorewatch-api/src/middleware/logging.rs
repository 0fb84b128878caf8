//! Request logging middleware.

use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Emits one line per request with method, path, status, and latency.
///
/// Server errors log at warn so they stand out without an extra filter.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(request).await;

    let status = response.status().as_u16();
    let elapsed_ms = start.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        tracing::warn!(%method, path, status, elapsed_ms, "HTTP request failed");
    } else {
        tracing::info!(%method, path, status, elapsed_ms, "HTTP request");
    }

    response
}
