//! CORS layer built from configuration.

use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use shorewatch_core::config::CorsConfig;

/// Builds the CORS layer for the router.
///
/// Applied at the top of the middleware stack so preflight `OPTIONS`
/// succeeds for every route. A `"*"` entry in origins or headers opens
/// that dimension entirely; anything else is parsed as an explicit list,
/// and entries that fail to parse are dropped.
pub fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new().max_age(Duration::from_secs(config.max_age_seconds));

    layer = if has_wildcard(&config.allowed_origins) {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(parse_list::<HeaderValue>(&config.allowed_origins))
    };

    layer = layer.allow_methods(parse_list::<Method>(&config.allowed_methods));

    layer = if has_wildcard(&config.allowed_headers) {
        layer.allow_headers(Any)
    } else {
        layer.allow_headers(parse_list::<HeaderName>(&config.allowed_headers))
    };

    layer
}

fn has_wildcard(values: &[String]) -> bool {
    values.iter().any(|v| v == "*")
}

fn parse_list<T: std::str::FromStr>(values: &[String]) -> Vec<T> {
    values.iter().filter_map(|v| v.parse().ok()).collect()
}
