//! # shorewatch-client
//!
//! Client-side data-sync store for Shorewatch dashboards.
//!
//! UI layers never talk to the network directly: they hold a
//! [`SyncStore`], which loads every collection up front, routes all
//! mutations through the server, and keeps the local cache equal to what
//! the server returned. When the backend is unreachable the store
//! degrades to a built-in demo dataset instead of presenting an empty
//! dashboard.

pub mod fixtures;
pub mod model;
pub mod source;
pub mod store;

pub use fixtures::FixtureSource;
pub use source::{DataSource, RemoteSource};
pub use store::{ClientStats, SyncStore};
