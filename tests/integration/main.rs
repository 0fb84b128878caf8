//! Integration tests driving the full router against a live Postgres.
//!
//! Requires a reachable test database; set `TEST_DATABASE_URL` to point
//! somewhere disposable. Each test file exercises one domain.

mod helpers;

mod admin_test;
mod auth_test;
mod content_test;
mod notification_test;
mod reading_test;
