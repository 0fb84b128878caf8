//! # shorewatch-entity
//!
//! Domain entity models for Shorewatch. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod faq;
pub mod level;
pub mod notification;
pub mod reading;
pub mod update;
pub mod user;

pub use level::{Importance, Priority};
